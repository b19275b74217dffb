use std::collections::{HashMap, HashSet};

use crate::content::{ContentItem, TreePath};

use super::{ContentQuery, Scope};

impl Scope {
    pub fn matches(&self, path: &TreePath) -> bool {
        match self {
            Scope::DescendantOf(ancestor) => path.is_descendant_of(ancestor),
            Scope::ChildOf(parent) => path.is_child_of(parent),
            Scope::AncestorOf(descendant) => descendant.is_descendant_of(path),
        }
    }
}

impl ContentQuery {
    /// Row-level filters: kind, scope, id set, visibility. Excludes are not applied here.
    pub fn matches(&self, item: &ContentItem) -> bool {
        if !self.kinds.is_empty() && !self.kinds.contains(&item.kind) {
            return false;
        }
        if let Some(scope) = &self.scope {
            if !scope.matches(&item.path) {
                return false;
            }
        }
        if let Some(ids) = &self.ids {
            if !ids.contains(&item.id) {
                return false;
            }
        }
        !self.visible_only || item.is_visible()
    }

    /// Reference evaluation over an in-memory collection.
    pub fn evaluate<'a, I>(&self, items: I) -> Vec<ContentItem>
    where
        I: IntoIterator<Item = &'a ContentItem>,
    {
        let mut rows: Vec<&ContentItem> = items.into_iter().filter(|i| self.matches(i)).collect();

        if self.newest_per_parent {
            let recency = self.partition_recency();
            let mut newest: HashMap<Option<TreePath>, &ContentItem> = HashMap::new();
            for row in rows {
                newest
                    .entry(row.path.parent())
                    .and_modify(|current| {
                        if recency.compare(row, current).is_lt() {
                            *current = row;
                        }
                    })
                    .or_insert(row);
            }
            rows = newest.into_values().collect();
        }

        if !self.exclude.is_empty() {
            let excluded: HashSet<_> = self.exclude.iter().collect();
            rows.retain(|row| !excluded.contains(&row.id));
        }

        match self.order_by {
            Some(field) => rows.sort_by(|a, b| field.compare(a, b)),
            None => rows.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.id.cmp(&b.id))),
        }

        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }

        rows.into_iter().cloned().collect()
    }
}
