//! PageValidator: runs the field rules for a page kind and reports the
//! first violation.

use std::sync::Mutex;

use chrono::NaiveDate;
use tracing::debug;

use almanac_core::config::ValidationConfig;
use almanac_core::content::{ContentItem, ContentKind, ItemId};
use almanac_core::errors::{AlmanacResult, ValidationError};
use almanac_core::models::HeadlineFigure;
use almanac_core::query::{ContentQuery, RecencyField};
use almanac_core::traits::IContentStore;
use almanac_observability::tracing_setup::events;
use almanac_observability::ValidationMetrics;

use crate::rules::{dates, headline_figures};

/// A statistical article as submitted from the editing form.
#[derive(Debug, Clone)]
pub struct ArticleSubmission<'s> {
    /// The page being saved. Its path places it under its series.
    pub page: &'s ContentItem,
    pub release_date: NaiveDate,
    pub next_release_date: Option<NaiveDate>,
    pub headline_figures: &'s [HeadlineFigure],
    /// Figure ids the form issued for this page.
    pub registered_figure_ids: &'s [String],
    /// Headline figures of the topic page the article sits under.
    pub topic_headline_figures: &'s [HeadlineFigure],
}

pub struct PageValidator<'a> {
    content: &'a dyn IContentStore,
    config: ValidationConfig,
    metrics: Mutex<ValidationMetrics>,
}

impl<'a> PageValidator<'a> {
    pub fn new(content: &'a dyn IContentStore, config: ValidationConfig) -> Self {
        Self {
            content,
            config,
            metrics: Mutex::new(ValidationMetrics::new()),
        }
    }

    pub fn validate_topic(&self, page: ItemId, figures: &[HeadlineFigure]) -> AlmanacResult<()> {
        let _span = almanac_observability::validation_span!(page).entered();
        let outcome = headline_figures::check_count(figures, &self.config)
            .and_then(|()| headline_figures::check_duplicates(figures));
        self.finish(page, outcome)
    }

    pub fn validate_methodology(
        &self,
        page: ItemId,
        publication_date: NaiveDate,
        last_revised_date: Option<NaiveDate>,
    ) -> AlmanacResult<()> {
        let _span = almanac_observability::validation_span!(page).entered();
        let outcome = dates::check_methodology_dates(publication_date, last_revised_date);
        self.finish(page, outcome)
    }

    /// Date ordering, figure count, registered ids, and, for an existing
    /// article that is the latest in its series, figures the topic page uses.
    pub fn validate_article(&self, submission: &ArticleSubmission<'_>) -> AlmanacResult<()> {
        let page = submission.page.id;
        let _span = almanac_observability::validation_span!(page).entered();

        let figures = submission.headline_figures;
        let mut outcome = dates::check_article_dates(
            submission.release_date,
            submission.next_release_date,
        )
        .and_then(|()| headline_figures::check_count(figures, &self.config))
        .and_then(|()| headline_figures::check_registered(figures, submission.registered_figure_ids));

        if outcome.is_ok() && self.is_latest_in_series(submission.page)? {
            let referenced = self.figures_used_by_topic(submission)?;
            outcome = headline_figures::check_still_referenced(figures, &referenced);
        }
        self.finish(page, outcome)
    }

    /// Whether `article` is saved and is the newest live release among its
    /// siblings.
    pub fn is_latest_in_series(&self, article: &ContentItem) -> AlmanacResult<bool> {
        if self.content.get(article.id)?.is_none() {
            return Ok(false);
        }
        let Some(series_path) = article.path.parent() else {
            return Ok(false);
        };
        let siblings = self.content.query(
            &ContentQuery::new()
                .kind(ContentKind::StatisticalArticle)
                .child_of(&series_path)
                .order_by_recency(RecencyField::ReleaseDate),
        )?;
        let latest = siblings.iter().find(|s| s.visibility.live).map(|s| s.id);
        Ok(latest == Some(article.id))
    }

    fn figures_used_by_topic(&self, submission: &ArticleSubmission<'_>) -> AlmanacResult<Vec<String>> {
        let series = self.content.query(
            &ContentQuery::new()
                .kind(ContentKind::ArticleSeries)
                .ancestor_of(&submission.page.path),
        )?;
        let Some(series) = series.last() else {
            return Ok(Vec::new());
        };
        Ok(submission
            .topic_headline_figures
            .iter()
            .filter(|f| f.series == Some(series.id))
            .map(|f| f.figure_id.clone())
            .collect())
    }

    pub fn metrics(&self) -> ValidationMetrics {
        self.metrics
            .lock()
            .map(|metrics| metrics.clone())
            .unwrap_or_default()
    }

    fn finish(&self, page: ItemId, outcome: Result<(), ValidationError>) -> AlmanacResult<()> {
        match outcome {
            Ok(()) => {
                debug!(%page, "page passed validation");
                if let Ok(mut metrics) = self.metrics.lock() {
                    metrics.record_accepted();
                }
                Ok(())
            }
            Err(err) => {
                events::validation_rejected(page, err.field_name(), err.message());
                if let Ok(mut metrics) = self.metrics.lock() {
                    metrics.record_rejected(err.field_name());
                }
                Err(err.into())
            }
        }
    }
}
