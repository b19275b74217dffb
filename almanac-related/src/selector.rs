//! RelatedContentSelector: curated references first, then the newest
//! candidates from a pool, bounded by `max_items`.
//!
//! 1. Resolve curated references against visible items, keeping curation order.
//! 2. If the resolved count already fills the section, stop. The pool is not queried.
//! 3. Otherwise ask the pool for `max_items - resolved` items, excluding the resolved ids.
//! 4. Concatenate.

use std::collections::HashSet;
use std::sync::Mutex;

use almanac_core::content::{ContentItem, ItemId};
use almanac_core::errors::AlmanacResult;
use almanac_core::models::{CurationSection, RelatedList};
use almanac_core::query::ContentQuery;
use almanac_core::traits::IContentStore;
use almanac_observability::tracing_setup::events;
use almanac_observability::SelectionMetrics;

use crate::positional;

pub struct RelatedContentSelector<'a> {
    content: &'a dyn IContentStore,
    metrics: Mutex<SelectionMetrics>,
}

impl<'a> RelatedContentSelector<'a> {
    pub fn new(content: &'a dyn IContentStore) -> Self {
        Self {
            content,
            metrics: Mutex::new(SelectionMetrics::new()),
        }
    }

    /// Curated references of `section`, resolved to visible items of an
    /// accepted kind, in curation order. Stale references are dropped.
    pub fn resolve_curated(
        &self,
        section: CurationSection,
        curated_refs: &[ItemId],
    ) -> AlmanacResult<Vec<ContentItem>> {
        let mut base = ContentQuery::new().visible();
        for kind in section.accepted_kinds() {
            base = base.kind(*kind);
        }
        positional::resolve_in_order(self.content, curated_refs, base)
    }

    /// Select one related section.
    ///
    /// `candidate_pool` describes the supplementary candidates. Its
    /// exclusion list and limit are filled in here, and it is expected to
    /// order by descending recency.
    pub fn select(
        &self,
        parent: ItemId,
        section: CurationSection,
        curated_refs: &[ItemId],
        candidate_pool: ContentQuery,
        max_items: usize,
    ) -> AlmanacResult<RelatedList> {
        let _span = almanac_observability::selection_span!(parent, section, max_items).entered();

        if max_items == 0 {
            return Ok(RelatedList::new());
        }

        let curated = self.resolve_curated(section, curated_refs)?;
        let distinct_refs = distinct_count(curated_refs);
        if curated.len() < distinct_refs {
            events::stale_references_dropped(parent, section, distinct_refs - curated.len());
        }

        if curated.len() >= max_items {
            events::selection_short_circuited(parent, section, curated.len());
            self.record(section, distinct_refs, curated.len(), 0, false);
            return Ok(RelatedList::assemble(curated, Vec::new(), max_items));
        }

        let remaining = max_items - curated.len();
        let pool = candidate_pool
            .excluding(curated.iter().map(|item| item.id))
            .limit(remaining);
        let supplementary = self.content.query(&pool)?;

        let curated_count = curated.len();
        let list = RelatedList::assemble(curated, supplementary, max_items);
        let supplementary_count = list.len().saturating_sub(curated_count);
        events::selection_completed(parent, section, curated_count, supplementary_count);
        self.record(section, distinct_refs, curated_count, supplementary_count, true);
        Ok(list)
    }

    /// Counters accumulated by this selector.
    pub fn metrics(&self) -> SelectionMetrics {
        self.metrics
            .lock()
            .map(|metrics| metrics.clone())
            .unwrap_or_default()
    }

    fn record(
        &self,
        section: CurationSection,
        refs: usize,
        resolved: usize,
        supplementary: usize,
        pool_queried: bool,
    ) {
        if let Ok(mut metrics) = self.metrics.lock() {
            metrics.record(section, refs, resolved, supplementary, pool_queried);
        }
    }
}

fn distinct_count(ids: &[ItemId]) -> usize {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().filter(|id| seen.insert(**id)).count()
}
