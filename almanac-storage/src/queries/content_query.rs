//! Translate a [`ContentQuery`] into one SQL statement.
//!
//! Row filters go into an inner SELECT. When `newest_per_parent` is set the
//! inner SELECT also numbers rows per parent with `ROW_NUMBER()` so the outer
//! query keeps only the first. Exclusions, ordering, and the limit are applied
//! by the outer query, matching [`ContentQuery::evaluate`].

use rusqlite::types::ToSql;
use rusqlite::Connection;

use almanac_core::content::{ContentItem, ItemId};
use almanac_core::errors::AlmanacResult;
use almanac_core::query::{ContentQuery, RecencyField, Scope};

use super::content_crud::{parse_content_row, CONTENT_COLUMNS};
use crate::to_storage_err;

/// Collects SQL fragments and their positional parameters.
#[derive(Default)]
struct SqlParts {
    clauses: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
}

impl SqlParts {
    fn push_param(&mut self, value: Box<dyn ToSql>) -> String {
        self.params.push(value);
        format!("?{}", self.params.len())
    }

    fn push_id_list(&mut self, ids: &[ItemId]) -> String {
        let placeholders: Vec<String> = ids
            .iter()
            .map(|id| self.push_param(Box::new(id.0 as i64)))
            .collect();
        placeholders.join(", ")
    }

    fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }
}

fn recency_expr(field: RecencyField) -> &'static str {
    match field {
        RecencyField::ReleaseDate => "release_date",
        RecencyField::LastRevised => "COALESCE(last_revised_date, release_date)",
    }
}

/// Newest first, undated last, ascending id on ties.
fn recency_order(field: RecencyField) -> String {
    let expr = recency_expr(field);
    format!("({expr}) IS NULL ASC, {expr} DESC, id ASC")
}

/// Build the SQL and parameters for a query.
pub fn build_sql(query: &ContentQuery) -> (String, Vec<Box<dyn ToSql>>) {
    let mut parts = SqlParts::default();

    if !query.kinds.is_empty() {
        let placeholders: Vec<String> = query
            .kinds
            .iter()
            .map(|kind| parts.push_param(Box::new(kind.as_str())))
            .collect();
        parts.clauses.push(format!("kind IN ({})", placeholders.join(", ")));
    }

    match &query.scope {
        Some(Scope::DescendantOf(ancestor)) => {
            let len = parts.push_param(Box::new(ancestor.as_str().len() as i64));
            let prefix = parts.push_param(Box::new(ancestor.as_str().to_string()));
            let depth = parts.push_param(Box::new(ancestor.depth() as i64));
            parts
                .clauses
                .push(format!("substr(path, 1, {len}) = {prefix} AND depth > {depth}"));
        }
        Some(Scope::ChildOf(parent)) => {
            let p = parts.push_param(Box::new(parent.as_str().to_string()));
            parts.clauses.push(format!("parent_path = {p}"));
        }
        Some(Scope::AncestorOf(descendant)) => {
            let ancestors = descendant.ancestors();
            if ancestors.is_empty() {
                parts.clauses.push("0".to_string());
            } else {
                let placeholders: Vec<String> = ancestors
                    .into_iter()
                    .map(|path| parts.push_param(Box::new(String::from(path))))
                    .collect();
                parts.clauses.push(format!("path IN ({})", placeholders.join(", ")));
            }
        }
        None => {}
    }

    if let Some(ids) = &query.ids {
        if ids.is_empty() {
            parts.clauses.push("0".to_string());
        } else {
            let list = parts.push_id_list(ids);
            parts.clauses.push(format!("id IN ({list})"));
        }
    }

    if query.visible_only {
        parts.clauses.push("live = 1 AND public = 1".to_string());
    }

    let inner_where = parts.where_sql();
    let inner = if query.newest_per_parent {
        let partition_order = recency_order(query.order_by.unwrap_or_default());
        format!(
            "SELECT {CONTENT_COLUMNS}, ROW_NUMBER() OVER (PARTITION BY parent_path ORDER BY {partition_order}) AS rn \
             FROM content_items{inner_where}"
        )
    } else {
        format!("SELECT {CONTENT_COLUMNS}, 1 AS rn FROM content_items{inner_where}")
    };

    let mut outer = vec!["rn = 1".to_string()];
    if !query.exclude.is_empty() {
        let list = parts.push_id_list(&query.exclude);
        outer.push(format!("id NOT IN ({list})"));
    }

    let order = match query.order_by {
        Some(field) => recency_order(field),
        None => "path ASC, id ASC".to_string(),
    };

    let mut sql = format!(
        "SELECT {CONTENT_COLUMNS} FROM ({inner}) AS candidates WHERE {} ORDER BY {order}",
        outer.join(" AND ")
    );
    if let Some(limit) = query.limit {
        let p = parts.push_param(Box::new(limit as i64));
        sql.push_str(&format!(" LIMIT {p}"));
    }

    (sql, parts.params)
}

/// Execute a query against the content table.
pub fn run_query(conn: &Connection, query: &ContentQuery) -> AlmanacResult<Vec<ContentItem>> {
    let (sql, params) = build_sql(query);
    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let params_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();

    let rows = stmt
        .query_map(params_refs.as_slice(), |row| Ok(parse_content_row(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use almanac_core::content::{ContentKind, TreePath};

    use super::*;

    #[test]
    fn placeholders_are_numbered_in_push_order() {
        let topic = TreePath::parse("00010001").unwrap();
        let query = ContentQuery::new()
            .kind(ContentKind::Methodology)
            .descendant_of(&topic)
            .visible()
            .excluding([ItemId(7)])
            .order_by_recency(RecencyField::LastRevised)
            .limit(2);
        let (sql, params) = build_sql(&query);
        assert_eq!(params.len(), 6);
        assert!(sql.contains("kind IN (?1)"));
        assert!(sql.contains("id NOT IN (?5)"));
        assert!(sql.ends_with("LIMIT ?6"));
        assert!(sql.contains("COALESCE(last_revised_date, release_date)"));
    }

    #[test]
    fn empty_id_set_compiles_to_false() {
        let (sql, params) = build_sql(&ContentQuery::new().with_ids(Vec::new()));
        assert!(sql.contains("WHERE 0"));
        assert!(params.is_empty());
    }
}
