//! The single SQLite connection behind a mutex.

pub mod pragmas;

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use almanac_core::config::StorageConfig;
use almanac_core::errors::{AlmanacResult, StorageError};

use crate::to_storage_err;

pub struct SharedConnection {
    conn: Mutex<Connection>,
}

impl SharedConnection {
    /// Open a file-backed database.
    pub fn open(path: &Path, config: &StorageConfig) -> AlmanacResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn, config, true)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory(config: &StorageConfig) -> AlmanacResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn, config, false)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the connection and run `f` against it.
    pub fn with_conn<F, T>(&self, f: F) -> AlmanacResult<T>
    where
        F: FnOnce(&Connection) -> AlmanacResult<T>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&guard)
    }
}
