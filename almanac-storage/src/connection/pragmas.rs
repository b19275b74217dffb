//! PRAGMA configuration applied to every connection.
//!
//! foreign_keys ON (curated rows cascade with their pages), busy_timeout from
//! config, WAL + NORMAL sync for file-backed databases.

use rusqlite::Connection;

use almanac_core::config::StorageConfig;
use almanac_core::errors::AlmanacResult;

use crate::to_storage_err;

pub fn apply_pragmas(conn: &Connection, config: &StorageConfig, file_backed: bool) -> AlmanacResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = {};
        ",
        config.busy_timeout_ms
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;

    if file_backed && config.wal_mode {
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

/// Whether WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> AlmanacResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
