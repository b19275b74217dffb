//! Request-scoped memoisation of selected sections.
//!
//! A page asks for the same section more than once while rendering (the
//! table of contents checks emptiness, the body renders the items). Build one
//! `RenderCache` per request and drop it with the request; never share it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use almanac_core::content::ItemId;
use almanac_core::errors::AlmanacResult;
use almanac_core::models::{CurationSection, RelatedList};

#[derive(Debug, Default)]
pub struct RenderCache {
    sections: HashMap<(ItemId, CurationSection), RelatedList>,
    hits: u64,
    misses: u64,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached list for `(parent, section)`, computing it with `select` on the
    /// first request. Errors are not cached.
    pub fn get_or_try_insert_with<F>(
        &mut self,
        parent: ItemId,
        section: CurationSection,
        select: F,
    ) -> AlmanacResult<&RelatedList>
    where
        F: FnOnce() -> AlmanacResult<RelatedList>,
    {
        match self.sections.entry((parent, section)) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                let list = select()?;
                Ok(entry.insert(list))
            }
        }
    }

    pub fn get(&self, parent: ItemId, section: CurationSection) -> Option<&RelatedList> {
        self.sections.get(&(parent, section))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::errors::AlmanacError;

    #[test]
    fn second_lookup_is_served_from_cache() {
        let mut cache = RenderCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            cache
                .get_or_try_insert_with(ItemId(7), CurationSection::HighlightedArticles, || {
                    calls += 1;
                    Ok(RelatedList::new())
                })
                .unwrap();
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn keys_are_per_parent_and_section() {
        let mut cache = RenderCache::new();
        for parent in [ItemId(1), ItemId(2)] {
            for section in [
                CurationSection::HighlightedArticles,
                CurationSection::HighlightedMethodologies,
            ] {
                cache
                    .get_or_try_insert_with(parent, section, || Ok(RelatedList::new()))
                    .unwrap();
            }
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn failures_are_retried() {
        let mut cache = RenderCache::new();
        let failed = cache.get_or_try_insert_with(ItemId(1), CurationSection::RelatedPages, || {
            Err(AlmanacError::ItemNotFound { id: 1 })
        });
        assert!(failed.is_err());
        assert!(cache.get(ItemId(1), CurationSection::RelatedPages).is_none());

        cache
            .get_or_try_insert_with(ItemId(1), CurationSection::RelatedPages, || {
                Ok(RelatedList::new())
            })
            .unwrap();
        assert!(cache.get(ItemId(1), CurationSection::RelatedPages).is_some());
    }
}
