pub mod content_crud;
pub mod content_query;
pub mod curation_ops;
