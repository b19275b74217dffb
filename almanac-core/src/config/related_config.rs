use serde::{Deserialize, Serialize};

use super::defaults;

/// Related-content selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedConfig {
    /// Upper bound on items shown in one related section.
    pub max_items_per_section: usize,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            max_items_per_section: defaults::DEFAULT_MAX_ITEMS_PER_SECTION,
        }
    }
}
