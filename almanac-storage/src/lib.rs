//! # almanac-storage
//!
//! SQLite persistence for the content tree and curated reference lists.
//! Implements [`IContentStore`](almanac_core::traits::IContentStore) and
//! [`ICurationStore`](almanac_core::traits::ICurationStore) by translating
//! [`ContentQuery`](almanac_core::query::ContentQuery) to SQL.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::StorageEngine;

use almanac_core::errors::{AlmanacError, StorageError};

/// Wrap a backend message as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> AlmanacError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
