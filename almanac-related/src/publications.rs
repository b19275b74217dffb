//! Curated-only lists: a methodology's related publications and the generic
//! related pages any page can carry. Never topped up, never truncated.

use almanac_core::content::{ContentItem, ContentKind};
use almanac_core::errors::AlmanacResult;
use almanac_core::models::{CurationSection, RelatedList};
use almanac_core::query::ContentQuery;
use almanac_core::traits::{IContentStore, ICurationStore};

use crate::cache::RenderCache;
use crate::positional;

/// Visible items referenced by `page`'s `section`, in curation order.
pub fn curated_only(
    content: &dyn IContentStore,
    curation: &dyn ICurationStore,
    page: &ContentItem,
    section: CurationSection,
    cache: &mut RenderCache,
) -> AlmanacResult<RelatedList> {
    let list = cache.get_or_try_insert_with(page.id, section, || {
        let refs = curation.curated_ids(page.id, section)?;
        let mut base = ContentQuery::new().visible();
        for kind in section.accepted_kinds() {
            base = base.kind(*kind);
        }
        let items = positional::resolve_in_order(content, &refs, base)?;
        let count = items.len();
        Ok(RelatedList::assemble(items, Vec::new(), count))
    })?;
    Ok(list.clone())
}

/// Related publications of a methodology page. Empty for other kinds.
pub fn related_publications(
    content: &dyn IContentStore,
    curation: &dyn ICurationStore,
    page: &ContentItem,
    cache: &mut RenderCache,
) -> AlmanacResult<RelatedList> {
    if page.kind != ContentKind::Methodology {
        return Ok(RelatedList::new());
    }
    curated_only(content, curation, page, CurationSection::RelatedPublications, cache)
}

pub fn related_pages(
    content: &dyn IContentStore,
    curation: &dyn ICurationStore,
    page: &ContentItem,
    cache: &mut RenderCache,
) -> AlmanacResult<RelatedList> {
    curated_only(content, curation, page, CurationSection::RelatedPages, cache)
}
