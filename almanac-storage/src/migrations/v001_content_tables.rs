//! v001: content_items: the materialised page tree.

use rusqlite::Connection;

use almanac_core::errors::AlmanacResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> AlmanacResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS content_items (
            id                        INTEGER PRIMARY KEY,
            kind                      TEXT NOT NULL,
            title                     TEXT NOT NULL,
            path                      TEXT NOT NULL UNIQUE,
            depth                     INTEGER NOT NULL,
            parent_path               TEXT,
            url_path                  TEXT NOT NULL,
            live                      INTEGER NOT NULL DEFAULT 1,
            public                    INTEGER NOT NULL DEFAULT 1,
            release_date              TEXT,
            last_revised_date         TEXT,
            exclude_from_breadcrumbs  INTEGER NOT NULL DEFAULT 0,
            updated_at                TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_content_kind ON content_items(kind);
        CREATE INDEX IF NOT EXISTS idx_content_parent ON content_items(parent_path);
        CREATE INDEX IF NOT EXISTS idx_content_release ON content_items(release_date);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
