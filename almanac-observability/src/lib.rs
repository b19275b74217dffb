//! # almanac-observability
//!
//! Structured tracing with span definitions and event helpers, plus counters
//! for related-content selection and save-time validation.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{MetricsCollector, SelectionMetrics, ValidationMetrics};
