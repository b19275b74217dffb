//! # almanac-core
//!
//! Foundation crate for the Almanac content system.
//! Defines the content model, the repository query model, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod content;
pub mod errors;
pub mod models;
pub mod query;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AlmanacConfig;
pub use content::{ContentItem, ContentKind, ItemId, TreePath, Visibility};
pub use errors::{AlmanacError, AlmanacResult};
pub use models::{CurationEntry, CurationSection, RelatedList};
pub use query::{ContentQuery, RecencyField};
