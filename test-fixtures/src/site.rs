//! Builds a realistic page tree: root → home → topics → index pages →
//! series/articles and methodologies, with paths and URLs filled in.

use std::collections::HashMap;

use almanac_core::content::{ContentItem, ContentKind, ItemId, TreePath, Visibility};
use chrono::NaiveDate;

use crate::fakes::FakeContentStore;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

pub struct SiteBuilder {
    items: Vec<ContentItem>,
    next_child: HashMap<TreePath, u32>,
    articles_index: HashMap<ItemId, ItemId>,
    methodology_index: HashMap<ItemId, ItemId>,
    home: ItemId,
}

impl SiteBuilder {
    /// A tree holding only the root (id 1) and the home page (id 2).
    pub fn new() -> Self {
        let root = ContentItem::new(1, ContentKind::Root, "Root", TreePath::root(), "");
        let mut builder = Self {
            items: vec![root],
            next_child: HashMap::new(),
            articles_index: HashMap::new(),
            methodology_index: HashMap::new(),
            home: ItemId(2),
        };
        builder.home = builder.add_child(ItemId(1), ContentKind::Home, "Home", Some("/"));
        builder
    }

    pub fn home(&self) -> ItemId {
        self.home
    }

    pub fn topic(&mut self, title: &str) -> ItemId {
        self.add_child(self.home, ContentKind::Topic, title, None)
    }

    pub fn series(&mut self, topic: ItemId, title: &str) -> ItemId {
        let index = match self.articles_index.get(&topic) {
            Some(&index) => index,
            None => {
                let index =
                    self.add_child(topic, ContentKind::ArticlesIndex, "Articles", None);
                self.articles_index.insert(topic, index);
                index
            }
        };
        self.add_child(index, ContentKind::ArticleSeries, title, None)
    }

    pub fn article(&mut self, series: ItemId, title: &str, released: NaiveDate) -> ItemId {
        let id = self.add_child(series, ContentKind::StatisticalArticle, title, None);
        self.item_mut(id).release_date = Some(released);
        id
    }

    pub fn methodology(
        &mut self,
        topic: ItemId,
        title: &str,
        published: NaiveDate,
        revised: Option<NaiveDate>,
    ) -> ItemId {
        let index = match self.methodology_index.get(&topic) {
            Some(&index) => index,
            None => {
                let index =
                    self.add_child(topic, ContentKind::MethodologyIndex, "Methodologies", None);
                self.methodology_index.insert(topic, index);
                index
            }
        };
        let id = self.add_child(index, ContentKind::Methodology, title, None);
        let item = self.item_mut(id);
        item.release_date = Some(published);
        item.last_revised_date = revised;
        id
    }

    pub fn information_page(&mut self, parent: ItemId, title: &str) -> ItemId {
        self.add_child(parent, ContentKind::InformationPage, title, None)
    }

    pub fn set_visibility(&mut self, id: ItemId, visibility: Visibility) -> &mut Self {
        self.item_mut(id).visibility = visibility;
        self
    }

    pub fn item(&self, id: ItemId) -> &ContentItem {
        self.items
            .iter()
            .find(|item| item.id == id)
            .unwrap_or_else(|| panic!("no item {id} in site"))
    }

    pub fn item_mut(&mut self, id: ItemId) -> &mut ContentItem {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .unwrap_or_else(|| panic!("no item {id} in site"))
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ContentItem> {
        self.items
    }

    pub fn into_store(self) -> FakeContentStore {
        FakeContentStore::new(self.items)
    }

    fn add_child(
        &mut self,
        parent: ItemId,
        kind: ContentKind,
        title: &str,
        url_override: Option<&str>,
    ) -> ItemId {
        let parent_item = self.item(parent).clone();
        let slot = self.next_child.entry(parent_item.path.clone()).or_insert(0);
        *slot += 1;
        let path = parent_item
            .path
            .child(*slot)
            .expect("child index within range");

        let url = match url_override {
            Some(url) => url.to_string(),
            None => {
                let base = parent_item.url_path.trim_end_matches('/');
                format!("{base}/{}", slugify(title))
            }
        };

        let id = self.items.len() as u64 + 1;
        self.items
            .push(ContentItem::new(id, kind, title, path, url));
        ItemId(id)
    }
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
