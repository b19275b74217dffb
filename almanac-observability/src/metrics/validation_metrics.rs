//! Save-time validation outcomes, keyed by the rejected field.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationMetrics {
    pub accepted: u64,
    pub rejected_by_field: HashMap<String, u64>,
}

impl ValidationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&mut self) {
        self.accepted += 1;
    }

    pub fn record_rejected(&mut self, field: &str) {
        *self.rejected_by_field.entry(field.to_string()).or_default() += 1;
    }

    pub fn total_rejected(&self) -> u64 {
        self.rejected_by_field.values().sum()
    }
}
