//! Property tests: the SQL translation agrees with the reference evaluation.

use proptest::prelude::*;

use almanac_core::content::{ContentItem, ContentKind, ItemId, Visibility};
use almanac_core::query::{ContentQuery, RecencyField};
use almanac_core::traits::IContentStore;
use almanac_storage::StorageEngine;
use test_fixtures::{date, SiteBuilder};

/// Two topics, each with a few series and methodologies, with
/// proptest-chosen release offsets and visibility.
fn build_site(offsets: &[(u16, bool, bool)]) -> Vec<ContentItem> {
    let mut site = SiteBuilder::new();
    let mut slots = offsets.iter().copied().cycle();
    for t in 0..2 {
        let topic = site.topic(&format!("Topic {t}"));
        for s in 0..3 {
            let series = site.series(topic, &format!("Series {t}-{s}"));
            for a in 0..3 {
                let (offset, live, public) = slots.next().unwrap_or((0, true, true));
                let released = date(2020, 1, 1) + chrono::Days::new(u64::from(offset));
                let id = site.article(series, &format!("A {t}-{s}-{a}"), released);
                site.set_visibility(id, Visibility { live, public });
            }
        }
        for m in 0..3 {
            let (offset, live, public) = slots.next().unwrap_or((0, true, true));
            let published = date(2018, 1, 1) + chrono::Days::new(u64::from(offset));
            let revised = (offset % 2 == 0).then(|| published + chrono::Days::new(400));
            let id = site.methodology(topic, &format!("M {t}-{m}"), published, revised);
            site.set_visibility(id, Visibility { live, public });
        }
    }
    site.into_items()
}

fn ids(items: &[ContentItem]) -> Vec<ItemId> {
    items.iter().map(|i| i.id).collect()
}

proptest! {
    #[test]
    fn prop_sql_matches_reference_for_related_queries(
        offsets in prop::collection::vec((0u16..60, any::<bool>(), any::<bool>()), 1..40),
        exclude in prop::collection::vec(1u64..40, 0..4),
        limit in 0usize..5,
        per_parent in any::<bool>(),
        revised in any::<bool>(),
    ) {
        let items = build_site(&offsets);
        let engine = StorageEngine::open_in_memory().unwrap();
        engine.upsert_bulk(&items).unwrap();

        let topic = items.iter().find(|i| i.kind == ContentKind::Topic).unwrap();
        let (kind, field) = if revised {
            (ContentKind::Methodology, RecencyField::LastRevised)
        } else {
            (ContentKind::StatisticalArticle, RecencyField::ReleaseDate)
        };
        let mut query = ContentQuery::new()
            .kind(kind)
            .descendant_of(&topic.path)
            .visible()
            .excluding(exclude.into_iter().map(ItemId))
            .order_by_recency(field)
            .limit(limit);
        if per_parent {
            query = query.newest_per_parent();
        }

        let from_sql = engine.query(&query).unwrap();
        let reference = query.evaluate(&items);
        prop_assert_eq!(ids(&from_sql), ids(&reference));
    }

    #[test]
    fn prop_id_lookup_matches_reference(
        wanted in prop::collection::vec(1u64..50, 0..12),
    ) {
        let items = build_site(&[(3, true, true), (9, false, true), (1, true, false)]);
        let engine = StorageEngine::open_in_memory().unwrap();
        engine.upsert_bulk(&items).unwrap();

        let query = ContentQuery::new().with_ids(wanted.into_iter().map(ItemId)).visible();
        prop_assert_eq!(ids(&engine.query(&query).unwrap()), ids(&query.evaluate(&items)));
    }
}
