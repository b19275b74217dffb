//! # almanac-related
//!
//! Assembles the bounded, ordered "related content" sections of a page:
//! editor-curated references first, in curation order, topped up with the
//! most recent matching items from a candidate pool.
//!
//! Everything here is per request and read-only against the stores.

pub mod breadcrumbs;
pub mod cache;
pub mod positional;
pub mod publications;
pub mod sections;
pub mod selector;
pub mod topic;

pub use breadcrumbs::BreadcrumbTrail;
pub use cache::RenderCache;
pub use sections::SectionPolicy;
pub use selector::RelatedContentSelector;
pub use topic::{TopicPageAssembler, TopicPageRequest, TopicSections};
