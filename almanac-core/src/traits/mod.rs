mod content_store;
mod curation_store;

pub use content_store::IContentStore;
pub use curation_store::ICurationStore;
