use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::content::{ContentItem, ItemId};

/// The selected items of one related-content section, in display order.
///
/// Curated items come first in curation order, then supplementary items
/// newest first. Ids are unique. An empty list means the section is omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelatedList(Vec<ContentItem>);

impl RelatedList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from curated and supplementary parts. Duplicate ids keep their
    /// first occurrence and the result is truncated to `max_items`.
    pub fn assemble(
        curated: Vec<ContentItem>,
        supplementary: Vec<ContentItem>,
        max_items: usize,
    ) -> Self {
        let mut seen = HashSet::new();
        let items = curated
            .into_iter()
            .chain(supplementary)
            .filter(|item| seen.insert(item.id))
            .take(max_items)
            .collect();
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.0
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.0.iter().map(|item| item.id).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<ContentItem> {
        self.0
    }
}

impl<'a> IntoIterator for &'a RelatedList {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for RelatedList {
    type Item = ContentItem;
    type IntoIter = std::vec::IntoIter<ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
