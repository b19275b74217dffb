use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::ContentItem;

/// Date used to rank items by recency. Ordering is always newest first;
/// undated items sort after dated ones, ties break on ascending id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecencyField {
    #[default]
    ReleaseDate,
    /// Last revision date, falling back to the release date for items never revised.
    LastRevised,
}

impl RecencyField {
    pub fn key(&self, item: &ContentItem) -> Option<NaiveDate> {
        match self {
            Self::ReleaseDate => item.release_date,
            Self::LastRevised => item.last_revised_date.or(item.release_date),
        }
    }

    /// Total order: newest first, undated last, then ascending id.
    pub fn compare(&self, a: &ContentItem, b: &ContentItem) -> std::cmp::Ordering {
        self.key(b)
            .cmp(&self.key(a))
            .then_with(|| a.id.cmp(&b.id))
    }
}
