use crate::content::ItemId;
use crate::errors::AlmanacResult;
use crate::models::{CurationEntry, CurationSection};

/// Editor-maintained ordered reference lists, one per `(parent, section)`.
pub trait ICurationStore: Send + Sync {
    /// Referenced ids in stored order. References may be stale.
    fn curated_ids(&self, parent: ItemId, section: CurationSection) -> AlmanacResult<Vec<ItemId>>;

    /// Replace the whole list, assigning positions from slice order.
    fn set_curation(
        &self,
        parent: ItemId,
        section: CurationSection,
        items: &[ItemId],
    ) -> AlmanacResult<()>;

    /// Every stored row for a parent, across sections.
    fn entries_for(&self, parent: ItemId) -> AlmanacResult<Vec<CurationEntry>>;
}
