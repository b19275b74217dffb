//! The two topped-up sections of a topic page and their candidate pools.

use almanac_core::content::{ContentItem, ContentKind};
use almanac_core::models::CurationSection;
use almanac_core::query::{ContentQuery, RecencyField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionPolicy {
    /// The latest release of every article series under the topic.
    RelatedArticles,
    /// Methodologies under the topic, most recently revised first.
    RelatedMethodologies,
}

impl SectionPolicy {
    pub const ALL: [SectionPolicy; 2] = [Self::RelatedArticles, Self::RelatedMethodologies];

    /// Curated list that feeds this section.
    pub fn curation(&self) -> CurationSection {
        match self {
            Self::RelatedArticles => CurationSection::HighlightedArticles,
            Self::RelatedMethodologies => CurationSection::HighlightedMethodologies,
        }
    }

    pub fn recency(&self) -> RecencyField {
        match self {
            Self::RelatedArticles => RecencyField::ReleaseDate,
            Self::RelatedMethodologies => RecencyField::LastRevised,
        }
    }

    /// Supplementary candidates for `topic`, newest first. The selector adds
    /// the exclusions and the limit.
    pub fn candidate_pool(&self, topic: &ContentItem) -> ContentQuery {
        match self {
            // Articles are direct children of their series, so newest per
            // parent is newest per series.
            Self::RelatedArticles => ContentQuery::new()
                .kind(ContentKind::StatisticalArticle)
                .descendant_of(&topic.path)
                .visible()
                .newest_per_parent()
                .order_by_recency(self.recency()),
            Self::RelatedMethodologies => ContentQuery::new()
                .kind(ContentKind::Methodology)
                .descendant_of(&topic.path)
                .visible()
                .order_by_recency(self.recency()),
        }
    }
}
