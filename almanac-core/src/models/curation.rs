use serde::{Deserialize, Serialize};

use crate::content::{ContentKind, ItemId};

/// Editor-curated reference lists a page can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurationSection {
    /// "Highlighted articles" on a topic page.
    HighlightedArticles,
    /// "Highlighted methods and quality information" on a topic page.
    HighlightedMethodologies,
    /// "Related publications" on a methodology page.
    RelatedPublications,
    /// Generic "related pages" available on every page.
    RelatedPages,
}

impl CurationSection {
    pub const ALL: [CurationSection; 4] = [
        Self::HighlightedArticles,
        Self::HighlightedMethodologies,
        Self::RelatedPublications,
        Self::RelatedPages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighlightedArticles => "highlighted_articles",
            Self::HighlightedMethodologies => "highlighted_methodologies",
            Self::RelatedPublications => "related_publications",
            Self::RelatedPages => "related_pages",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    /// Kinds an editor may pick for this section. Empty means any page.
    pub fn accepted_kinds(&self) -> &'static [ContentKind] {
        match self {
            Self::HighlightedArticles | Self::RelatedPublications => {
                &[ContentKind::StatisticalArticle]
            }
            Self::HighlightedMethodologies => &[ContentKind::Methodology],
            Self::RelatedPages => &[],
        }
    }
}

impl std::fmt::Display for CurationSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored row of a curated list. `sort_order` only has meaning relative
/// to the other rows of the same `(parent, section)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurationEntry {
    pub parent: ItemId,
    pub section: CurationSection,
    pub item: ItemId,
    pub sort_order: i64,
}
