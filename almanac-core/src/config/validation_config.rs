use serde::{Deserialize, Serialize};

use super::defaults;

/// Save-time page validation limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum headline figures when any are present. Zero figures is always allowed.
    pub min_headline_figures: usize,
    /// Maximum headline figures on a page.
    pub max_headline_figures: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_headline_figures: defaults::DEFAULT_MIN_HEADLINE_FIGURES,
            max_headline_figures: defaults::DEFAULT_MAX_HEADLINE_FIGURES,
        }
    }
}
