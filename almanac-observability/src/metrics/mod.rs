//! Central metrics registry.
//!
//! [`MetricsCollector`] owns the domain-specific collectors and is
//! serializable for diagnostics endpoints.

pub mod selection_metrics;
pub mod validation_metrics;

pub use selection_metrics::SelectionMetrics;
pub use validation_metrics::ValidationMetrics;

/// Central metrics registry that owns all domain-specific collectors.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MetricsCollector {
    pub selection: SelectionMetrics,
    pub validation: ValidationMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all metrics (useful for testing or periodic rotation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
