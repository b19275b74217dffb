//! Workspace configuration, loaded from TOML with environment overrides.
//!
//! # Examples
//!
//! ```
//! use almanac_core::config::AlmanacConfig;
//!
//! let config = AlmanacConfig::from_toml("[related]\nmax_items_per_section = 4\n").unwrap();
//! assert_eq!(config.related.max_items_per_section, 4);
//! assert_eq!(config.storage.db_path, "almanac.db");
//! ```

pub mod defaults;
mod observability_config;
mod related_config;
mod storage_config;
mod validation_config;

pub use observability_config::ObservabilityConfig;
pub use related_config::RelatedConfig;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AlmanacResult, ConfigError};

/// Top-level configuration aggregating every subsystem section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlmanacConfig {
    pub related: RelatedConfig,
    pub storage: StorageConfig,
    pub validation: ValidationConfig,
    pub observability: ObservabilityConfig,
}

impl AlmanacConfig {
    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml(source: &str) -> AlmanacResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.check()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> AlmanacResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> AlmanacResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(defaults::ENV_MAX_ITEMS_PER_SECTION) {
            let max_items = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: defaults::ENV_MAX_ITEMS_PER_SECTION.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
            self.related.max_items_per_section = max_items;
        }
        if let Some(path) = lookup(defaults::ENV_DB_PATH) {
            self.storage.db_path = path;
        }
        if let Some(level) = lookup(defaults::ENV_LOG_LEVEL) {
            self.observability.log_level = level;
        }
        self.check()?;
        Ok(self)
    }

    fn check(&self) -> AlmanacResult<()> {
        if self.related.max_items_per_section == 0 {
            return Err(ConfigError::InvalidValue {
                key: "related.max_items_per_section".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.validation.min_headline_figures > self.validation.max_headline_figures {
            return Err(ConfigError::InvalidValue {
                key: "validation.min_headline_figures".to_string(),
                value: self.validation.min_headline_figures.to_string(),
                reason: format!(
                    "exceeds max_headline_figures ({})",
                    self.validation.max_headline_figures
                ),
            }
            .into());
        }
        Ok(())
    }
}
