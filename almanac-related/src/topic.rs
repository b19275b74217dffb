//! Topic page assembly: featured article, the two related sections, and a
//! table of contents that only lists sections with content.

use serde::Serialize;
use tracing::debug;

use almanac_core::config::RelatedConfig;
use almanac_core::content::{ContentItem, ContentKind, ItemId};
use almanac_core::errors::AlmanacResult;
use almanac_core::models::{RelatedList, TocEntry};
use almanac_core::query::{ContentQuery, RecencyField};
use almanac_core::traits::{IContentStore, ICurationStore};
use almanac_observability::SelectionMetrics;

use crate::cache::RenderCache;
use crate::sections::SectionPolicy;
use crate::selector::RelatedContentSelector;

/// What the render layer knows about a topic page before assembly.
#[derive(Debug, Clone)]
pub struct TopicPageRequest<'r> {
    pub topic: &'r ContentItem,
    /// Series chosen in the "Featured" panel, if any.
    pub featured_series: Option<ItemId>,
    /// Previewing an article as featured replaces the series lookup.
    pub featured_override: Option<ContentItem>,
    pub has_explore_more: bool,
    pub has_datasets: bool,
}

impl<'r> TopicPageRequest<'r> {
    pub fn new(topic: &'r ContentItem) -> Self {
        Self {
            topic,
            featured_series: None,
            featured_override: None,
            has_explore_more: false,
            has_datasets: false,
        }
    }

    pub fn with_featured_series(mut self, series: ItemId) -> Self {
        self.featured_series = Some(series);
        self
    }

    pub fn with_featured_override(mut self, article: ContentItem) -> Self {
        self.featured_override = Some(article);
        self
    }

    pub fn with_explore_more(mut self, present: bool) -> Self {
        self.has_explore_more = present;
        self
    }

    pub fn with_datasets(mut self, present: bool) -> Self {
        self.has_datasets = present;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSections {
    pub featured_item: Option<ContentItem>,
    pub related_articles: RelatedList,
    pub related_methodologies: RelatedList,
    pub table_of_contents: Vec<TocEntry>,
}

pub struct TopicPageAssembler<'a> {
    content: &'a dyn IContentStore,
    curation: &'a dyn ICurationStore,
    selector: RelatedContentSelector<'a>,
    config: RelatedConfig,
}

impl<'a> TopicPageAssembler<'a> {
    pub fn new(
        content: &'a dyn IContentStore,
        curation: &'a dyn ICurationStore,
        config: RelatedConfig,
    ) -> Self {
        Self {
            content,
            curation,
            selector: RelatedContentSelector::new(content),
            config,
        }
    }

    /// One related section of `topic`, memoised in `cache`.
    pub fn section(
        &self,
        topic: &ContentItem,
        policy: SectionPolicy,
        cache: &mut RenderCache,
    ) -> AlmanacResult<RelatedList> {
        let section = policy.curation();
        let list = cache.get_or_try_insert_with(topic.id, section, || {
            let curated = self.curation.curated_ids(topic.id, section)?;
            self.selector.select(
                topic.id,
                section,
                &curated,
                policy.candidate_pool(topic),
                self.config.max_items_per_section,
            )
        })?;
        Ok(list.clone())
    }

    /// Newest visible article directly under the featured series. A series
    /// that was deleted or is not a series yields nothing.
    pub fn latest_article_in_featured_series(
        &self,
        series: ItemId,
    ) -> AlmanacResult<Option<ContentItem>> {
        let Some(series) = self.content.get(series)? else {
            return Ok(None);
        };
        if series.kind != ContentKind::ArticleSeries {
            return Ok(None);
        }
        let latest = self.content.query(
            &ContentQuery::new()
                .kind(ContentKind::StatisticalArticle)
                .child_of(&series.path)
                .visible()
                .order_by_recency(RecencyField::ReleaseDate)
                .limit(1),
        )?;
        Ok(latest.into_iter().next())
    }

    pub fn assemble(
        &self,
        request: TopicPageRequest<'_>,
        cache: &mut RenderCache,
    ) -> AlmanacResult<TopicSections> {
        let topic = request.topic;
        let _span = almanac_observability::topic_assembly_span!(topic.id).entered();

        let featured_item = match request.featured_override {
            Some(article) => Some(article),
            None => match request.featured_series {
                Some(series) => self.latest_article_in_featured_series(series)?,
                None => None,
            },
        };
        let related_articles = self.section(topic, SectionPolicy::RelatedArticles, cache)?;
        let related_methodologies =
            self.section(topic, SectionPolicy::RelatedMethodologies, cache)?;

        let table_of_contents = table_of_contents(
            featured_item.is_some(),
            !related_articles.is_empty(),
            !related_methodologies.is_empty(),
            request.has_explore_more,
            request.has_datasets,
        );
        debug!(
            topic = %topic.id,
            articles = related_articles.len(),
            methodologies = related_methodologies.len(),
            toc = table_of_contents.len(),
            "topic page assembled"
        );

        Ok(TopicSections {
            featured_item,
            related_articles,
            related_methodologies,
            table_of_contents,
        })
    }

    pub fn metrics(&self) -> SelectionMetrics {
        self.selector.metrics()
    }
}

/// In-page navigation in display order, one entry per non-empty section.
pub fn table_of_contents(
    featured: bool,
    related_articles: bool,
    related_methodologies: bool,
    explore_more: bool,
    datasets: bool,
) -> Vec<TocEntry> {
    [
        (featured, "featured", "Featured"),
        (related_articles, "related-articles", "Related articles"),
        (
            related_methodologies,
            "related-methods",
            "Methods and quality information",
        ),
        (explore_more, "explore-more", "Explore more"),
        (datasets, "data", "Data"),
    ]
    .into_iter()
    .filter(|(present, _, _)| *present)
    .map(|(_, anchor, text)| TocEntry::new(anchor, text))
    .collect()
}
