//! Span definitions per operation: selection, positional join, topic
//! assembly, breadcrumbs, validation.

/// Create a selection span for one related-content section.
#[macro_export]
macro_rules! selection_span {
    ($parent:expr, $section:expr, $max_items:expr) => {
        tracing::info_span!(
            "almanac.selection",
            parent = %$parent,
            section = %$section,
            max_items = $max_items
        )
    };
}

/// Create a positional join span.
#[macro_export]
macro_rules! positional_join_span {
    ($ref_count:expr) => {
        tracing::debug_span!("almanac.positional_join", ref_count = $ref_count)
    };
}

/// Create a topic page assembly span.
#[macro_export]
macro_rules! topic_assembly_span {
    ($topic:expr) => {
        tracing::info_span!("almanac.topic_assembly", topic = %$topic)
    };
}

/// Create a breadcrumbs span.
#[macro_export]
macro_rules! breadcrumbs_span {
    ($page:expr) => {
        tracing::debug_span!("almanac.breadcrumbs", page = %$page)
    };
}

/// Create a validation span.
#[macro_export]
macro_rules! validation_span {
    ($page:expr) => {
        tracing::info_span!("almanac.validation", page = %$page)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SELECTION: &str = "almanac.selection";
    pub const POSITIONAL_JOIN: &str = "almanac.positional_join";
    pub const TOPIC_ASSEMBLY: &str = "almanac.topic_assembly";
    pub const BREADCRUMBS: &str = "almanac.breadcrumbs";
    pub const VALIDATION: &str = "almanac.validation";
}
