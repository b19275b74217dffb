//! Individual checks. Each returns the first violation for its field.

pub mod dates;
pub mod headline_figures;

/// Form field names as reported back to the editor.
pub mod fields {
    pub const HEADLINE_FIGURES: &str = "headline_figures";
    pub const LAST_REVISED_DATE: &str = "last_revised_date";
    pub const NEXT_RELEASE_DATE: &str = "next_release_date";
}
