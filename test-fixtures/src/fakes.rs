//! In-memory stores implementing the repository traits, with call counting.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use almanac_core::content::{ContentItem, ItemId};
use almanac_core::errors::AlmanacResult;
use almanac_core::models::{CurationEntry, CurationSection};
use almanac_core::query::ContentQuery;
use almanac_core::traits::{IContentStore, ICurationStore};

/// Content store evaluating queries with [`ContentQuery::evaluate`].
#[derive(Default)]
pub struct FakeContentStore {
    items: Mutex<Vec<ContentItem>>,
    query_calls: AtomicUsize,
    queries: Mutex<Vec<ContentQuery>>,
}

impl FakeContentStore {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Default::default()
        }
    }

    /// Number of `query` calls since construction or the last reset.
    pub fn query_count(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    /// Every query received, in call order.
    pub fn recorded_queries(&self) -> Vec<ContentQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn reset_counts(&self) {
        self.query_calls.store(0, Ordering::SeqCst);
        self.queries.lock().unwrap().clear();
    }

    pub fn snapshot(&self) -> Vec<ContentItem> {
        self.items.lock().unwrap().clone()
    }
}

impl IContentStore for FakeContentStore {
    fn get(&self, id: ItemId) -> AlmanacResult<Option<ContentItem>> {
        Ok(self.items.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    fn query(&self, query: &ContentQuery) -> AlmanacResult<Vec<ContentItem>> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        Ok(query.evaluate(self.items.lock().unwrap().iter()))
    }

    fn upsert(&self, item: &ContentItem) -> AlmanacResult<()> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => items.push(item.clone()),
        }
        Ok(())
    }

    fn upsert_bulk(&self, items: &[ContentItem]) -> AlmanacResult<usize> {
        for item in items {
            self.upsert(item)?;
        }
        Ok(items.len())
    }

    fn delete(&self, id: ItemId) -> AlmanacResult<()> {
        self.items.lock().unwrap().retain(|i| i.id != id);
        Ok(())
    }
}

/// Curation store with no referential integrity, so tests can hold
/// references to items that were since removed.
#[derive(Default)]
pub struct FakeCurationStore {
    lists: Mutex<HashMap<(ItemId, CurationSection), Vec<ItemId>>>,
    reads: AtomicUsize,
}

impl FakeCurationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, parent: ItemId, section: CurationSection, items: &[ItemId]) -> Self {
        self.lists
            .lock()
            .unwrap()
            .insert((parent, section), items.to_vec());
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ICurationStore for FakeCurationStore {
    fn curated_ids(&self, parent: ItemId, section: CurationSection) -> AlmanacResult<Vec<ItemId>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .lists
            .lock()
            .unwrap()
            .get(&(parent, section))
            .cloned()
            .unwrap_or_default())
    }

    fn set_curation(
        &self,
        parent: ItemId,
        section: CurationSection,
        items: &[ItemId],
    ) -> AlmanacResult<()> {
        self.lists
            .lock()
            .unwrap()
            .insert((parent, section), items.to_vec());
        Ok(())
    }

    fn entries_for(&self, parent: ItemId) -> AlmanacResult<Vec<CurationEntry>> {
        let lists = self.lists.lock().unwrap();
        let mut entries: Vec<CurationEntry> = lists
            .iter()
            .filter(|((p, _), _)| *p == parent)
            .flat_map(|((_, section), items)| {
                items.iter().enumerate().map(move |(i, item)| CurationEntry {
                    parent,
                    section: *section,
                    item: *item,
                    sort_order: i as i64,
                })
            })
            .collect();
        entries.sort_by(|a, b| {
            a.section
                .as_str()
                .cmp(b.section.as_str())
                .then(a.sort_order.cmp(&b.sort_order))
        });
        Ok(entries)
    }
}
