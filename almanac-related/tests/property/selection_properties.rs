//! Property tests for the positional join and the selector.

use std::collections::HashSet;

use proptest::prelude::*;

use almanac_core::content::{ContentItem, ContentKind, ItemId, TreePath, Visibility};
use almanac_core::models::CurationSection;
use almanac_core::query::{ContentQuery, RecencyField};
use almanac_related::positional::order_by_position;
use almanac_related::RelatedContentSelector;
use test_fixtures::{date, FakeContentStore};

fn page(id: u64) -> ContentItem {
    let path = TreePath::root().child(id as u32 + 1).unwrap();
    ContentItem::new(id, ContentKind::InformationPage, format!("Page {id}"), path, "/")
}

/// Distinct ids in first-occurrence order.
fn distinct(ids: &[u64]) -> Vec<u64> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// A flat pool of pages under the root with proptest-chosen recency and
/// visibility.
fn pool(specs: &[(u16, bool)]) -> Vec<ContentItem> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (offset, visible))| {
            let released = date(2020, 1, 1) + chrono::Days::new(u64::from(*offset));
            let visibility = if *visible {
                Visibility::VISIBLE
            } else {
                Visibility::DRAFT
            };
            page(i as u64 + 1)
                .with_release_date(released)
                .with_visibility(visibility)
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_positional_join_follows_pk_order(
        pks in prop::collection::vec(1u64..30, 0..20),
        shuffle_seed in any::<u64>(),
    ) {
        let order = distinct(&pks);
        let mut records: Vec<ContentItem> = order.iter().map(|id| page(*id)).collect();
        // Arbitrary incoming order.
        let len = records.len().max(1);
        records.rotate_left((shuffle_seed as usize) % len);

        let pk_ids: Vec<ItemId> = pks.iter().copied().map(ItemId).collect();
        let joined: Vec<u64> = order_by_position(&pk_ids, records, true)
            .iter()
            .map(|r| r.id.0)
            .collect();
        prop_assert_eq!(joined, order);
    }

    #[test]
    fn prop_dangling_pks_shorten_by_their_count(
        present in prop::collection::hash_set(1u64..50, 0..15),
        dangling in prop::collection::hash_set(100u64..150, 0..10),
    ) {
        let mut pks: Vec<u64> = present.iter().copied().chain(dangling.iter().copied()).collect();
        pks.sort_unstable_by_key(|id| id.wrapping_mul(2654435761) % 97);
        let records: Vec<ContentItem> = present.iter().map(|id| page(*id)).collect();

        let pk_ids: Vec<ItemId> = pks.iter().copied().map(ItemId).collect();
        let joined: Vec<u64> = order_by_position(&pk_ids, records, true)
            .iter()
            .map(|r| r.id.0)
            .collect();
        let expected: Vec<u64> = pks.iter().copied().filter(|id| present.contains(id)).collect();
        prop_assert_eq!(joined.len(), pks.len() - dangling.len());
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn prop_selection_is_bounded_and_unique(
        specs in prop::collection::vec((0u16..400, any::<bool>()), 0..25),
        curated in prop::collection::vec(1u64..35, 0..8),
        max_items in 0usize..6,
    ) {
        let store = FakeContentStore::new(pool(&specs));
        let selector = RelatedContentSelector::new(&store);
        let refs: Vec<ItemId> = curated.iter().copied().map(ItemId).collect();
        let candidate_pool = ContentQuery::new()
            .descendant_of(&TreePath::root())
            .visible()
            .order_by_recency(RecencyField::ReleaseDate);

        let list = selector
            .select(ItemId(1), CurationSection::RelatedPages, &refs, candidate_pool, max_items)
            .unwrap();

        prop_assert!(list.len() <= max_items);
        let ids = list.ids();
        let unique: HashSet<ItemId> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert!(list.iter().all(|item| item.is_visible()));

        // Curated items lead, in curation order.
        let visible: HashSet<u64> = store
            .snapshot()
            .iter()
            .filter(|i| i.is_visible())
            .map(|i| i.id.0)
            .collect();
        let resolved: Vec<ItemId> = distinct(&curated)
            .into_iter()
            .filter(|id| visible.contains(id))
            .map(ItemId)
            .take(max_items)
            .collect();
        prop_assert_eq!(&ids[..resolved.len()], &resolved[..]);

        // The pool is only consulted when curation leaves room.
        if max_items > 0 && resolved.len() >= max_items {
            prop_assert!(store.recorded_queries().iter().all(|q| q.ids.is_some()));
        }
    }
}
