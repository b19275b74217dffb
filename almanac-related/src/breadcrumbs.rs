//! Breadcrumb trails and their schema.org `BreadcrumbList` form.

use serde_json::{json, Map, Value};

use almanac_core::constants::HOMEPAGE_DEPTH;
use almanac_core::content::ContentItem;
use almanac_core::errors::AlmanacResult;
use almanac_core::models::Breadcrumb;
use almanac_core::query::ContentQuery;
use almanac_core::traits::IContentStore;

pub struct BreadcrumbTrail<'a> {
    content: &'a dyn IContentStore,
    root_url: String,
}

impl<'a> BreadcrumbTrail<'a> {
    /// `root_url` is the site's absolute base, e.g. `https://www.example.gov`.
    pub fn new(content: &'a dyn IContentStore, root_url: impl Into<String>) -> Self {
        Self {
            content,
            root_url: root_url.into(),
        }
    }

    pub fn full_url(&self, item: &ContentItem) -> String {
        format!("{}{}", self.root_url.trim_end_matches('/'), item.url_path)
    }

    /// Ancestors of `page` from the home page down. The tree root is skipped,
    /// the home page level always reads "Home", and ancestors that opt out
    /// are left out. On a sub-route the page itself closes the trail.
    pub fn for_page(&self, page: &ContentItem, is_for_subpage: bool) -> AlmanacResult<Vec<Breadcrumb>> {
        let _span = almanac_observability::breadcrumbs_span!(page.id).entered();

        let ancestors = self
            .content
            .query(&ContentQuery::new().ancestor_of(&page.path))?;

        let mut crumbs = Vec::with_capacity(ancestors.len() + 1);
        for ancestor in &ancestors {
            if ancestor.path.is_root() {
                continue;
            }
            if ancestor.depth() <= HOMEPAGE_DEPTH {
                crumbs.push(Breadcrumb {
                    url: self.root_url.clone(),
                    text: "Home".to_string(),
                });
            } else if !ancestor.exclude_from_breadcrumbs {
                crumbs.push(Breadcrumb {
                    url: self.full_url(ancestor),
                    text: ancestor.title.clone(),
                });
            }
        }
        if is_for_subpage {
            crumbs.push(Breadcrumb {
                url: self.full_url(page),
                text: page.title.clone(),
            });
        }
        Ok(crumbs)
    }

    /// JSON-LD `breadcrumb` property for the page's structured data.
    pub fn as_jsonld(&self, page: &ContentItem) -> AlmanacResult<Value> {
        Ok(breadcrumbs_as_jsonld(&self.for_page(page, false)?))
    }
}

/// `{"breadcrumb": {"@type": "BreadcrumbList", ...}}`, or `{}` without crumbs.
pub fn breadcrumbs_as_jsonld(crumbs: &[Breadcrumb]) -> Value {
    let mut entity = Map::new();
    if crumbs.is_empty() {
        return Value::Object(entity);
    }
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(index, crumb)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": crumb.text,
                "item": crumb.url,
            })
        })
        .collect();
    entity.insert(
        "breadcrumb".to_string(),
        json!({
            "@type": "BreadcrumbList",
            "itemListElement": items,
        }),
    );
    Value::Object(entity)
}
