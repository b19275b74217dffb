use almanac_core::content::*;
use almanac_core::query::{ContentQuery, RecencyField};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// topic (0001 0001) ── series A ── a1, a2
///                   └─ series B ── b1
///                   └─ methodology m1 (revised), m2 (never revised)
fn tree() -> Vec<ContentItem> {
    let topic = TreePath::parse("00010001").unwrap();
    let series_a = topic.child(1).unwrap();
    let series_b = topic.child(2).unwrap();
    vec![
        ContentItem::new(1, ContentKind::Topic, "Inflation", topic.clone(), "/inflation"),
        ContentItem::new(2, ContentKind::ArticleSeries, "CPI", series_a.clone(), "/inflation/cpi"),
        ContentItem::new(3, ContentKind::ArticleSeries, "PPI", series_b.clone(), "/inflation/ppi"),
        ContentItem::new(10, ContentKind::StatisticalArticle, "CPI Jan", series_a.child(1).unwrap(), "/inflation/cpi/jan")
            .with_release_date(date(2025, 1, 15)),
        ContentItem::new(11, ContentKind::StatisticalArticle, "CPI Feb", series_a.child(2).unwrap(), "/inflation/cpi/feb")
            .with_release_date(date(2025, 2, 15)),
        ContentItem::new(12, ContentKind::StatisticalArticle, "PPI Jan", series_b.child(1).unwrap(), "/inflation/ppi/jan")
            .with_release_date(date(2025, 1, 20)),
        ContentItem::new(20, ContentKind::Methodology, "CPI methods", topic.child(3).unwrap(), "/inflation/m1")
            .with_release_date(date(2020, 5, 1))
            .with_last_revised_date(date(2025, 3, 1)),
        ContentItem::new(21, ContentKind::Methodology, "PPI methods", topic.child(4).unwrap(), "/inflation/m2")
            .with_release_date(date(2024, 6, 1)),
    ]
}

fn ids(items: &[ContentItem]) -> Vec<u64> {
    items.iter().map(|i| i.id.0).collect()
}

#[test]
fn descendant_query_orders_newest_first() {
    let items = tree();
    let topic = items[0].path.clone();
    let result = ContentQuery::new()
        .kind(ContentKind::StatisticalArticle)
        .descendant_of(&topic)
        .order_by_recency(RecencyField::ReleaseDate)
        .evaluate(&items);
    assert_eq!(ids(&result), vec![11, 12, 10]);
}

#[test]
fn newest_per_parent_keeps_one_per_series() {
    let items = tree();
    let topic = items[0].path.clone();
    let result = ContentQuery::new()
        .kind(ContentKind::StatisticalArticle)
        .descendant_of(&topic)
        .newest_per_parent()
        .order_by_recency(RecencyField::ReleaseDate)
        .evaluate(&items);
    assert_eq!(ids(&result), vec![11, 12]);
}

#[test]
fn exclusion_applies_after_newest_per_parent() {
    let items = tree();
    let topic = items[0].path.clone();
    // Excluding the newest CPI article drops the series entirely rather than
    // promoting the January release.
    let result = ContentQuery::new()
        .kind(ContentKind::StatisticalArticle)
        .descendant_of(&topic)
        .newest_per_parent()
        .excluding([ItemId(11)])
        .order_by_recency(RecencyField::ReleaseDate)
        .evaluate(&items);
    assert_eq!(ids(&result), vec![12]);
}

#[test]
fn last_revised_falls_back_to_release_date() {
    let items = tree();
    let topic = items[0].path.clone();
    let result = ContentQuery::new()
        .kind(ContentKind::Methodology)
        .descendant_of(&topic)
        .order_by_recency(RecencyField::LastRevised)
        .evaluate(&items);
    assert_eq!(ids(&result), vec![20, 21]);
}

#[test]
fn visibility_filter_hides_drafts_and_private_pages() {
    let mut items = tree();
    items[3].visibility = Visibility::DRAFT;
    items[4].visibility = Visibility::PRIVATE;
    let result = ContentQuery::new()
        .kind(ContentKind::StatisticalArticle)
        .visible()
        .evaluate(&items);
    assert_eq!(ids(&result), vec![12]);
}

#[test]
fn empty_id_set_matches_nothing() {
    let items = tree();
    assert!(ContentQuery::new().with_ids(Vec::new()).evaluate(&items).is_empty());
}

#[test]
fn ancestor_scope_walks_up_in_tree_order() {
    let items = tree();
    let article = items[3].path.clone();
    let result = ContentQuery::new().ancestor_of(&article).evaluate(&items);
    assert_eq!(ids(&result), vec![1, 2]);
}

#[test]
fn limit_truncates_after_ordering() {
    let items = tree();
    let result = ContentQuery::new()
        .kind(ContentKind::StatisticalArticle)
        .order_by_recency(RecencyField::ReleaseDate)
        .limit(1)
        .evaluate(&items);
    assert_eq!(ids(&result), vec![11]);
}
