//! Versioned schema migrations, applied in order and recorded in `schema_version`.

mod v001_content_tables;
mod v002_curation_tables;

use rusqlite::Connection;
use tracing::info;

use almanac_core::errors::{AlmanacResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> AlmanacResult<()>;

const MIGRATIONS: &[(u32, MigrationFn)] = &[
    (1, v001_content_tables::migrate),
    (2, v002_curation_tables::migrate),
];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 2;

pub fn run_migrations(conn: &Connection) -> AlmanacResult<u32> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(format!("migration {version} begin: {e}")))?;
        migrate(&tx).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        tx.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
            .map_err(|e| to_storage_err(e.to_string()))?;
        tx.commit()
            .map_err(|e| to_storage_err(format!("migration {version} commit: {e}")))?;
        info!(version, "applied schema migration");
    }

    current_version(conn)
}

pub fn current_version(conn: &Connection) -> AlmanacResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
