//! v002: curation_entries: editor-ordered reference lists per parent and section.

use rusqlite::Connection;

use almanac_core::errors::AlmanacResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> AlmanacResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS curation_entries (
            parent_id   INTEGER NOT NULL REFERENCES content_items(id) ON DELETE CASCADE,
            section     TEXT NOT NULL,
            sort_order  INTEGER NOT NULL,
            item_id     INTEGER NOT NULL REFERENCES content_items(id) ON DELETE CASCADE,
            PRIMARY KEY (parent_id, section, sort_order)
        );

        CREATE INDEX IF NOT EXISTS idx_curation_item ON curation_entries(item_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
