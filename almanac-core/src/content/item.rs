use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ContentKind, TreePath, Visibility};

/// Primary key of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A published page as seen by the selection layer. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub kind: ContentKind,
    pub title: String,
    pub path: TreePath,
    /// Site-relative URL, e.g. `/economy/inflation/articles/cpi/march-2025`.
    pub url_path: String,
    pub visibility: Visibility,
    /// Release date for articles, publication date for methodologies.
    pub release_date: Option<NaiveDate>,
    /// Set once a methodology has been revised after first publication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_revised_date: Option<NaiveDate>,
    #[serde(default)]
    pub exclude_from_breadcrumbs: bool,
}

impl ContentItem {
    /// A visible, undated item. Structural index pages are kept out of breadcrumbs.
    pub fn new(
        id: u64,
        kind: ContentKind,
        title: impl Into<String>,
        path: TreePath,
        url_path: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId(id),
            kind,
            title: title.into(),
            path,
            url_path: url_path.into(),
            visibility: Visibility::VISIBLE,
            release_date: None,
            last_revised_date: None,
            exclude_from_breadcrumbs: kind.is_structural(),
        }
    }

    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }

    pub fn with_last_revised_date(mut self, date: NaiveDate) -> Self {
        self.last_revised_date = Some(date);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn depth(&self) -> usize {
        self.path.depth()
    }
}
