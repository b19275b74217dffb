//! # almanac-validation
//!
//! Field-level checks run when an editor saves a page. The first failing
//! check is reported as a [`ValidationError`](almanac_core::errors::ValidationError)
//! naming the field, and the save is rejected.

pub mod engine;
pub mod rules;

pub use engine::{ArticleSubmission, PageValidator};
