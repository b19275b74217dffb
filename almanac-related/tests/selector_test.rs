//! Selection behaviour against the in-memory store, with call-count checks.

use almanac_core::content::{ContentItem, ItemId, Visibility};
use almanac_core::models::CurationSection;
use almanac_related::{RelatedContentSelector, SectionPolicy};
use test_fixtures::{date, FakeContentStore, SiteBuilder};

const ARTICLES: CurationSection = CurationSection::HighlightedArticles;

struct Topic {
    store: FakeContentStore,
    topic: ContentItem,
    articles: Vec<ItemId>,
}

/// One topic with one series per article, released on the given days of
/// January 2025.
fn topic_with_articles(days: &[u32]) -> Topic {
    let mut site = SiteBuilder::new();
    let topic = site.topic("Economy");
    let articles = days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let series = site.series(topic, &format!("Series {i}"));
            site.article(series, &format!("Article {i}"), date(2025, 1, *day))
        })
        .collect();
    let topic = site.item(topic).clone();
    Topic {
        store: site.into_store(),
        topic,
        articles,
    }
}

fn select(t: &Topic, curated: &[ItemId], max_items: usize) -> Vec<ItemId> {
    let selector = RelatedContentSelector::new(&t.store);
    selector
        .select(
            t.topic.id,
            ARTICLES,
            curated,
            SectionPolicy::RelatedArticles.candidate_pool(&t.topic),
            max_items,
        )
        .unwrap()
        .ids()
}

#[test]
fn curated_order_is_preserved() {
    let t = topic_with_articles(&[1, 2, 3, 4]);
    let a = &t.articles;
    let curated = [a[2], a[0], a[3], a[1]];
    assert_eq!(select(&t, &curated, 4), curated.to_vec());
}

#[test]
fn dangling_references_are_skipped_in_order() {
    let t = topic_with_articles(&[1, 2, 3]);
    let a = &t.articles;
    let curated = [a[1], ItemId(777), a[0], ItemId(778)];
    let resolved = RelatedContentSelector::new(&t.store)
        .resolve_curated(ARTICLES, &curated)
        .unwrap();
    let ids: Vec<ItemId> = resolved.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![a[1], a[0]]);
}

#[test]
fn short_circuit_never_queries_the_pool() {
    let t = topic_with_articles(&[1, 2, 3, 20, 21]);
    let a = &t.articles;
    let curated = [a[0], a[1], a[2]];

    assert_eq!(select(&t, &curated, 3), curated.to_vec());
    // One bulk lookup for the curated ids, nothing else.
    assert_eq!(t.store.query_count(), 1);
    assert!(t.store.recorded_queries()[0].ids.is_some());
}

#[test]
fn supplementary_fill_newest_first() {
    // A curated; B, C, D in the pool with recency 5, 3, 10.
    let t = topic_with_articles(&[1, 5, 3, 10]);
    let (a, b, d) = (t.articles[0], t.articles[1], t.articles[3]);
    assert_eq!(select(&t, &[a], 3), vec![a, d, b]);
    assert_eq!(t.store.query_count(), 2);
}

#[test]
fn empty_everything_is_an_empty_list() {
    let t = topic_with_articles(&[]);
    assert!(select(&t, &[], 3).is_empty());
    // No curated ids means no bulk lookup; the pool is still asked.
    assert_eq!(t.store.query_count(), 1);
}

#[test]
fn short_circuit_counts_only_visible_references() {
    let mut site = SiteBuilder::new();
    let topic = site.topic("Health");
    let mut ids = Vec::new();
    for (i, day) in [1, 2, 3, 4].iter().enumerate() {
        let series = site.series(topic, &format!("S{i}"));
        ids.push(site.article(series, &format!("A{i}"), date(2025, 2, *day)));
    }
    site.set_visibility(ids[0], Visibility::DRAFT);
    let topic = site.item(topic).clone();
    let store = site.into_store();

    let selector = RelatedContentSelector::new(&store);
    let list = selector
        .select(
            topic.id,
            ARTICLES,
            &[ids[0], ids[1], ids[2]],
            SectionPolicy::RelatedArticles.candidate_pool(&topic),
            3,
        )
        .unwrap();
    // Two curated survive, so the pool fills the last slot.
    assert_eq!(list.ids(), vec![ids[1], ids[2], ids[3]]);
    assert_eq!(store.query_count(), 2);

    let counters = selector.metrics().section(ARTICLES);
    assert_eq!(counters.stale_refs_dropped, 1);
    assert_eq!(counters.pool_queries, 1);
}

#[test]
fn more_curated_than_slots_is_truncated() {
    let t = topic_with_articles(&[1, 2, 3, 4, 5]);
    let a = &t.articles;
    let curated = [a[4], a[3], a[2], a[1], a[0]];
    assert_eq!(select(&t, &curated, 3), vec![a[4], a[3], a[2]]);
    assert_eq!(t.store.query_count(), 1);
}

#[test]
fn zero_slots_touch_nothing() {
    let t = topic_with_articles(&[1, 2]);
    assert!(select(&t, &[t.articles[0]], 0).is_empty());
    assert_eq!(t.store.query_count(), 0);
}

#[test]
fn curated_methodology_in_article_section_is_dropped() {
    let mut site = SiteBuilder::new();
    let topic = site.topic("Population");
    let m = site.methodology(topic, "Census quality", date(2022, 1, 1), None);
    let series = site.series(topic, "Census");
    let article = site.article(series, "Census 2021", date(2022, 6, 28));
    let topic = site.item(topic).clone();
    let store = site.into_store();

    let list = RelatedContentSelector::new(&store)
        .select(
            topic.id,
            ARTICLES,
            &[m],
            SectionPolicy::RelatedArticles.candidate_pool(&topic),
            3,
        )
        .unwrap();
    assert_eq!(list.ids(), vec![article]);
}

#[test]
fn methodologies_order_by_last_revision() {
    let mut site = SiteBuilder::new();
    let topic = site.topic("Labour market");
    let old_rev = site.methodology(topic, "LFS", date(2015, 1, 1), Some(date(2024, 3, 1)));
    let fresh = site.methodology(topic, "Claimant count", date(2023, 9, 1), None);
    let never = site.methodology(topic, "Vacancies", date(2018, 5, 1), None);
    let topic = site.item(topic).clone();
    let store = site.into_store();

    let list = RelatedContentSelector::new(&store)
        .select(
            topic.id,
            CurationSection::HighlightedMethodologies,
            &[],
            SectionPolicy::RelatedMethodologies.candidate_pool(&topic),
            3,
        )
        .unwrap();
    assert_eq!(list.ids(), vec![old_rev, fresh, never]);
}
