//! Upsert, get, delete, and row parsing for content items.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use almanac_core::content::{ContentItem, ContentKind, ItemId, TreePath, Visibility};
use almanac_core::errors::{AlmanacResult, StorageError};

use crate::to_storage_err;

/// The base SELECT columns for all content queries (10 columns, indices 0-9).
pub(crate) const CONTENT_COLUMNS: &str = "id, kind, title, path, url_path, live, public, \
     release_date, last_revised_date, exclude_from_breadcrumbs";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Insert or replace one item.
pub fn upsert_item(conn: &Connection, item: &ContentItem) -> AlmanacResult<()> {
    conn.execute(
        "INSERT INTO content_items (
            id, kind, title, path, depth, parent_path, url_path, live, public,
            release_date, last_revised_date, exclude_from_breadcrumbs
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
        ON CONFLICT(id) DO UPDATE SET
            kind = excluded.kind,
            title = excluded.title,
            path = excluded.path,
            depth = excluded.depth,
            parent_path = excluded.parent_path,
            url_path = excluded.url_path,
            live = excluded.live,
            public = excluded.public,
            release_date = excluded.release_date,
            last_revised_date = excluded.last_revised_date,
            exclude_from_breadcrumbs = excluded.exclude_from_breadcrumbs,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![
            item.id.0 as i64,
            item.kind.as_str(),
            item.title,
            item.path.as_str(),
            item.path.depth() as i64,
            item.path.parent().map(String::from),
            item.url_path,
            item.visibility.live,
            item.visibility.public,
            item.release_date.map(format_date),
            item.last_revised_date.map(format_date),
            item.exclude_from_breadcrumbs,
        ],
    )
    .map_err(|e| to_storage_err(format!("upsert item {}: {e}", item.id)))?;
    Ok(())
}

/// Upsert many items atomically.
pub fn upsert_bulk(conn: &Connection, items: &[ContentItem]) -> AlmanacResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("upsert_bulk begin: {e}")))?;
    for item in items {
        upsert_item(&tx, item)?;
    }
    tx.commit()
        .map_err(|e| to_storage_err(format!("upsert_bulk commit: {e}")))?;
    Ok(items.len())
}

pub fn get_item(conn: &Connection, id: ItemId) -> AlmanacResult<Option<ContentItem>> {
    let sql = format!("SELECT {CONTENT_COLUMNS} FROM content_items WHERE id = ?1");
    let row = conn
        .query_row(&sql, [id.0 as i64], |row| Ok(parse_content_row(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.transpose()
}

pub fn delete_item(conn: &Connection, id: ItemId) -> AlmanacResult<()> {
    conn.execute("DELETE FROM content_items WHERE id = ?1", [id.0 as i64])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Parse a row selected with [`CONTENT_COLUMNS`].
pub(crate) fn parse_content_row(row: &Row<'_>) -> AlmanacResult<ContentItem> {
    let get_err = |e: rusqlite::Error| to_storage_err(e.to_string());

    let id: i64 = row.get(0).map_err(get_err)?;
    let kind_str: String = row.get(1).map_err(get_err)?;
    let path_str: String = row.get(3).map_err(get_err)?;
    let release: Option<String> = row.get(7).map_err(get_err)?;
    let revised: Option<String> = row.get(8).map_err(get_err)?;

    let kind = ContentKind::parse(&kind_str).ok_or_else(|| corrupt(format!("unknown kind {kind_str:?}")))?;

    Ok(ContentItem {
        id: ItemId(id as u64),
        kind,
        title: row.get(2).map_err(get_err)?,
        path: TreePath::parse(&path_str)?,
        url_path: row.get(4).map_err(get_err)?,
        visibility: Visibility {
            live: row.get(5).map_err(get_err)?,
            public: row.get(6).map_err(get_err)?,
        },
        release_date: release.as_deref().map(parse_date).transpose()?,
        last_revised_date: revised.as_deref().map(parse_date).transpose()?,
        exclude_from_breadcrumbs: row.get(9).map_err(get_err)?,
    })
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date(raw: &str) -> AlmanacResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| corrupt(format!("bad date {raw:?}: {e}")))
}

fn corrupt(details: String) -> almanac_core::AlmanacError {
    StorageError::CorruptRow {
        table: "content_items".to_string(),
        details,
    }
    .into()
}
