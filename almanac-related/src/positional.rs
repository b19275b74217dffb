//! Positional join: reorder a bulk-fetched record set to match an externally
//! given id order.
//!
//! Stored reference lists can name ids that no longer resolve (deleted,
//! unpublished, made private) and can name the same id twice. Order is taken
//! from the first occurrence of each id.

use std::collections::{HashMap, HashSet};

use almanac_core::content::{ContentItem, ItemId};
use almanac_core::errors::AlmanacResult;
use almanac_core::query::ContentQuery;
use almanac_core::traits::IContentStore;

/// Reorder `records` by the position of their id in `pks`.
///
/// With `exclude_non_matches` set, records whose id is not in `pks` are
/// dropped. Otherwise they follow the positioned records in their incoming
/// order. Ids in `pks` with no record are skipped.
pub fn order_by_position(
    pks: &[ItemId],
    records: Vec<ContentItem>,
    exclude_non_matches: bool,
) -> Vec<ContentItem> {
    let mut position: HashMap<ItemId, usize> = HashMap::with_capacity(pks.len());
    for (index, id) in pks.iter().enumerate() {
        position.entry(*id).or_insert(index);
    }

    let mut positioned: Vec<(usize, ContentItem)> = Vec::with_capacity(records.len());
    let mut unmatched = Vec::new();
    for record in records {
        match position.get(&record.id) {
            Some(&index) => positioned.push((index, record)),
            None if !exclude_non_matches => unmatched.push(record),
            None => {}
        }
    }

    // Stable, so a store that returns the same id twice keeps its first copy first.
    positioned.sort_by_key(|(index, _)| *index);

    let mut seen = HashSet::with_capacity(positioned.len());
    positioned
        .into_iter()
        .map(|(_, record)| record)
        .filter(|record| seen.insert(record.id))
        .chain(unmatched)
        .collect()
}

/// Resolve `pks` against the store in one bulk query, keeping `pks` order and
/// dropping ids that `base` filters out or that no longer exist.
pub fn resolve_in_order(
    store: &dyn IContentStore,
    pks: &[ItemId],
    base: ContentQuery,
) -> AlmanacResult<Vec<ContentItem>> {
    if pks.is_empty() {
        return Ok(Vec::new());
    }
    let _span = almanac_observability::positional_join_span!(pks.len()).entered();

    let mut unique = Vec::with_capacity(pks.len());
    let mut seen = HashSet::with_capacity(pks.len());
    for id in pks {
        if seen.insert(*id) {
            unique.push(*id);
        }
    }

    let records = store.query(&base.with_ids(unique))?;
    Ok(order_by_position(pks, records, true))
}
