//! Headline figure rules shared by topic and article pages.

use std::collections::HashSet;

use almanac_core::config::ValidationConfig;
use almanac_core::errors::ValidationError;
use almanac_core::models::HeadlineFigure;

use super::fields::HEADLINE_FIGURES;

fn reject(message: impl Into<String>) -> ValidationError {
    ValidationError::field(HEADLINE_FIGURES, message)
}

/// None at all is fine; otherwise between the configured bounds.
pub fn check_count(
    figures: &[HeadlineFigure],
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    if figures.is_empty() {
        return Ok(());
    }
    if figures.len() < config.min_headline_figures {
        return Err(reject(format!(
            "If you add headline figures, please add at least {}.",
            config.min_headline_figures
        )));
    }
    if figures.len() > config.max_headline_figures {
        return Err(reject(format!(
            "The maximum number of items is {}.",
            config.max_headline_figures
        )));
    }
    Ok(())
}

pub fn check_duplicates(figures: &[HeadlineFigure]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(figures.len());
    if figures.iter().all(|f| seen.insert(f.figure_id.as_str())) {
        Ok(())
    } else {
        Err(reject("Duplicate headline figures are not allowed."))
    }
}

/// Every submitted id must have been issued by the editing form.
pub fn check_registered(
    figures: &[HeadlineFigure],
    registered: &[String],
) -> Result<(), ValidationError> {
    let registered: HashSet<&str> = registered.iter().map(String::as_str).collect();
    if figures
        .iter()
        .all(|f| registered.contains(f.figure_id.as_str()))
    {
        Ok(())
    } else {
        Err(reject("Invalid figure ID(s) provided."))
    }
}

/// Figures a topic page pulls from this article's series must stay.
pub fn check_still_referenced(
    figures: &[HeadlineFigure],
    referenced_by_topic: &[String],
) -> Result<(), ValidationError> {
    let kept: HashSet<&str> = figures.iter().map(|f| f.figure_id.as_str()).collect();
    match referenced_by_topic
        .iter()
        .find(|id| !kept.contains(id.as_str()))
    {
        Some(id) => Err(reject(format!(
            "Figure ID {id} cannot be removed as it is referenced in a topic page."
        ))),
        None => Ok(()),
    }
}
