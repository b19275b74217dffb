use criterion::{black_box, criterion_group, criterion_main, Criterion};

use almanac_core::content::{ContentItem, ContentKind, ItemId, TreePath};
use almanac_core::models::CurationSection;
use almanac_core::query::{ContentQuery, RecencyField};
use almanac_related::positional::order_by_position;
use almanac_related::RelatedContentSelector;
use test_fixtures::{date, FakeContentStore};

fn pages(count: u64) -> Vec<ContentItem> {
    (1..=count)
        .map(|id| {
            let path = TreePath::root().child(id as u32).unwrap();
            ContentItem::new(id, ContentKind::StatisticalArticle, format!("Article {id}"), path, "/")
                .with_release_date(date(2020, 1, 1) + chrono::Days::new(id % 365))
        })
        .collect()
}

fn bench_positional_join(c: &mut Criterion) {
    let records = pages(500);
    let pks: Vec<ItemId> = (1..=500u64).rev().step_by(3).map(ItemId).collect();

    c.bench_function("order_by_position_500_records", |b| {
        b.iter(|| order_by_position(black_box(&pks), black_box(records.clone()), true))
    });

    c.bench_function("order_by_position_keep_unmatched", |b| {
        b.iter(|| order_by_position(black_box(&pks), black_box(records.clone()), false))
    });
}

fn bench_select(c: &mut Criterion) {
    let store = FakeContentStore::new(pages(200));
    let selector = RelatedContentSelector::new(&store);
    let curated = [ItemId(17), ItemId(4)];

    c.bench_function("select_with_supplementary_fill", |b| {
        b.iter(|| {
            let pool = ContentQuery::new()
                .kind(ContentKind::StatisticalArticle)
                .visible()
                .order_by_recency(RecencyField::ReleaseDate);
            selector
                .select(
                    ItemId(1),
                    CurationSection::HighlightedArticles,
                    black_box(&curated),
                    pool,
                    3,
                )
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_positional_join, bench_select);
criterion_main!(benches);
