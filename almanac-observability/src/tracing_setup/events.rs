//! Structured log events for key selection and validation outcomes.
//!
//! Each function emits a `tracing` event with structured fields.

use almanac_core::content::ItemId;
use almanac_core::models::CurationSection;

/// Log a section filled entirely from curation.
pub fn selection_short_circuited(parent: ItemId, section: CurationSection, curated: usize) {
    tracing::debug!(
        event = "selection_short_circuited",
        parent = %parent,
        section = %section,
        curated = curated,
        "curated items fill the section"
    );
}

/// Log a completed selection.
pub fn selection_completed(
    parent: ItemId,
    section: CurationSection,
    curated: usize,
    supplementary: usize,
) {
    tracing::debug!(
        event = "selection_completed",
        parent = %parent,
        section = %section,
        curated = curated,
        supplementary = supplementary,
        "related section selected"
    );
}

/// Log curated references that no longer resolve to a visible item.
pub fn stale_references_dropped(parent: ItemId, section: CurationSection, dropped: usize) {
    tracing::info!(
        event = "stale_references_dropped",
        parent = %parent,
        section = %section,
        dropped = dropped,
        "curated references skipped"
    );
}

/// Log a rejected save.
pub fn validation_rejected(page: ItemId, field: &str, message: &str) {
    tracing::info!(
        event = "validation_rejected",
        page = %page,
        field = %field,
        message = %message,
        "page save rejected"
    );
}
