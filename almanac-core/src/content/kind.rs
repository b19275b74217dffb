use serde::{Deserialize, Serialize};

/// Page types present in the content tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Root,
    Home,
    Topic,
    ArticlesIndex,
    ArticleSeries,
    StatisticalArticle,
    MethodologyIndex,
    Methodology,
    InformationPage,
}

impl ContentKind {
    pub const ALL: [ContentKind; 9] = [
        Self::Root,
        Self::Home,
        Self::Topic,
        Self::ArticlesIndex,
        Self::ArticleSeries,
        Self::StatisticalArticle,
        Self::MethodologyIndex,
        Self::Methodology,
        Self::InformationPage,
    ];

    /// Stable storage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Home => "home",
            Self::Topic => "topic",
            Self::ArticlesIndex => "articles_index",
            Self::ArticleSeries => "article_series",
            Self::StatisticalArticle => "statistical_article",
            Self::MethodologyIndex => "methodology_index",
            Self::Methodology => "methodology",
            Self::InformationPage => "information_page",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Container pages that only exist to shape URLs and never appear in breadcrumbs.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::ArticlesIndex | Self::MethodologyIndex)
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
