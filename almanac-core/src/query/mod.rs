//! Repository query model.
//!
//! `ContentQuery` names exactly the operations the selection layer needs from
//! a content store: scope by tree position, filter by kind, visibility and id
//! set, exclude ids, keep the newest item per parent, order by a recency field
//! (always descending), and limit. Stores translate it to their own query
//! language; [`ContentQuery::evaluate`] is the reference semantics over an
//! in-memory slice.

mod evaluate;
mod recency;

pub use recency::RecencyField;

use serde::{Deserialize, Serialize};

use crate::content::{ContentKind, ItemId, TreePath};

/// Tree-position filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "scope", content = "path")]
pub enum Scope {
    /// Strictly below the given node.
    DescendantOf(TreePath),
    /// Direct children of the given node.
    ChildOf(TreePath),
    /// Strict ancestors of the given node.
    AncestorOf(TreePath),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentQuery {
    /// Accepted kinds. Empty accepts every kind.
    pub kinds: Vec<ContentKind>,
    pub scope: Option<Scope>,
    /// Restrict to this id set. `Some(vec![])` matches nothing.
    pub ids: Option<Vec<ItemId>>,
    pub visible_only: bool,
    /// Applied after `newest_per_parent`.
    pub exclude: Vec<ItemId>,
    /// Keep only the most recent match under each direct parent.
    pub newest_per_parent: bool,
    /// Descending recency ordering. `None` orders by tree position.
    pub order_by: Option<RecencyField>,
    pub limit: Option<usize>,
}

impl ContentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: ContentKind) -> Self {
        self.kinds.push(kind);
        self
    }

    pub fn descendant_of(mut self, path: &TreePath) -> Self {
        self.scope = Some(Scope::DescendantOf(path.clone()));
        self
    }

    pub fn child_of(mut self, path: &TreePath) -> Self {
        self.scope = Some(Scope::ChildOf(path.clone()));
        self
    }

    pub fn ancestor_of(mut self, path: &TreePath) -> Self {
        self.scope = Some(Scope::AncestorOf(path.clone()));
        self
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = ItemId>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    /// Live and public items only.
    pub fn visible(mut self) -> Self {
        self.visible_only = true;
        self
    }

    pub fn excluding(mut self, ids: impl IntoIterator<Item = ItemId>) -> Self {
        self.exclude.extend(ids);
        self
    }

    pub fn newest_per_parent(mut self) -> Self {
        self.newest_per_parent = true;
        self
    }

    pub fn order_by_recency(mut self, field: RecencyField) -> Self {
        self.order_by = Some(field);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Recency field used to pick the newest item per parent.
    pub(crate) fn partition_recency(&self) -> RecencyField {
        self.order_by.unwrap_or_default()
    }
}
