use crate::content::{ContentItem, ItemId};
use crate::errors::AlmanacResult;
use crate::query::ContentQuery;

/// Authoritative source of content items.
///
/// All reads go through [`ContentQuery`]. Writes exist for seeding and
/// publishing workflows.
pub trait IContentStore: Send + Sync {
    // --- Reads ---
    fn get(&self, id: ItemId) -> AlmanacResult<Option<ContentItem>>;
    fn query(&self, query: &ContentQuery) -> AlmanacResult<Vec<ContentItem>>;

    // --- Writes ---
    fn upsert(&self, item: &ContentItem) -> AlmanacResult<()>;
    fn upsert_bulk(&self, items: &[ContentItem]) -> AlmanacResult<usize>;
    fn delete(&self, id: ItemId) -> AlmanacResult<()>;
}
