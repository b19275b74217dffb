//! Per-section selection counters: how often curation fills a section on its
//! own, how many stale references are skipped, how many slots the pool fills.

use std::collections::HashMap;

use almanac_core::models::CurationSection;
use serde::{Deserialize, Serialize};

/// Counters for one section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCounters {
    pub selections: u64,
    pub short_circuits: u64,
    pub pool_queries: u64,
    pub curated_items: u64,
    pub supplementary_items: u64,
    pub stale_refs_dropped: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionMetrics {
    pub by_section: HashMap<String, SectionCounters>,
}

impl SelectionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished selection.
    pub fn record(
        &mut self,
        section: CurationSection,
        curated_refs: usize,
        curated_resolved: usize,
        supplementary: usize,
        pool_queried: bool,
    ) {
        let counters = self
            .by_section
            .entry(section.as_str().to_string())
            .or_default();
        counters.selections += 1;
        counters.curated_items += curated_resolved as u64;
        counters.supplementary_items += supplementary as u64;
        counters.stale_refs_dropped += curated_refs.saturating_sub(curated_resolved) as u64;
        if pool_queried {
            counters.pool_queries += 1;
        } else {
            counters.short_circuits += 1;
        }
    }

    pub fn section(&self, section: CurationSection) -> SectionCounters {
        self.by_section
            .get(section.as_str())
            .copied()
            .unwrap_or_default()
    }

    /// Share of selections that never touched the candidate pool.
    pub fn short_circuit_rate(&self, section: CurationSection) -> f64 {
        let counters = self.section(section);
        if counters.selections == 0 {
            return 0.0;
        }
        counters.short_circuits as f64 / counters.selections as f64
    }
}
