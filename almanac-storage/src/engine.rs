//! StorageEngine: owns the connection, runs migrations at startup,
//! implements IContentStore + ICurationStore.

use std::path::Path;

use tracing::{debug, info};

use almanac_core::config::StorageConfig;
use almanac_core::content::{ContentItem, ItemId};
use almanac_core::errors::AlmanacResult;
use almanac_core::models::{CurationEntry, CurationSection};
use almanac_core::query::ContentQuery;
use almanac_core::traits::{IContentStore, ICurationStore};

use crate::connection::SharedConnection;
use crate::migrations;
use crate::queries::{content_crud, content_query, curation_ops};

pub struct StorageEngine {
    conn: SharedConnection,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> AlmanacResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> AlmanacResult<Self> {
        let engine = Self {
            conn: SharedConnection::open(path, config)?,
        };
        engine.initialize()?;
        info!(path = %path.display(), "opened content store");
        Ok(engine)
    }

    /// Open the database named by `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> AlmanacResult<Self> {
        Self::open_with_config(Path::new(&config.db_path), config)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> AlmanacResult<Self> {
        let engine = Self {
            conn: SharedConnection::open_in_memory(&StorageConfig::default())?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> AlmanacResult<()> {
        self.conn.with_conn(|conn| {
            let version = migrations::run_migrations(conn)?;
            debug!(version, "schema up to date");
            Ok(())
        })
    }

    pub fn schema_version(&self) -> AlmanacResult<u32> {
        self.conn.with_conn(migrations::current_version)
    }

    /// Connection access for maintenance and diagnostics.
    pub fn connection(&self) -> &SharedConnection {
        &self.conn
    }
}

impl IContentStore for StorageEngine {
    fn get(&self, id: ItemId) -> AlmanacResult<Option<ContentItem>> {
        self.conn.with_conn(|conn| content_crud::get_item(conn, id))
    }

    fn query(&self, query: &ContentQuery) -> AlmanacResult<Vec<ContentItem>> {
        let rows = self
            .conn
            .with_conn(|conn| content_query::run_query(conn, query))?;
        debug!(rows = rows.len(), limit = ?query.limit, "content query");
        Ok(rows)
    }

    fn upsert(&self, item: &ContentItem) -> AlmanacResult<()> {
        self.conn.with_conn(|conn| content_crud::upsert_item(conn, item))
    }

    fn upsert_bulk(&self, items: &[ContentItem]) -> AlmanacResult<usize> {
        self.conn.with_conn(|conn| content_crud::upsert_bulk(conn, items))
    }

    fn delete(&self, id: ItemId) -> AlmanacResult<()> {
        self.conn.with_conn(|conn| content_crud::delete_item(conn, id))
    }
}

impl ICurationStore for StorageEngine {
    fn curated_ids(&self, parent: ItemId, section: CurationSection) -> AlmanacResult<Vec<ItemId>> {
        self.conn
            .with_conn(|conn| curation_ops::curated_ids(conn, parent, section))
    }

    fn set_curation(
        &self,
        parent: ItemId,
        section: CurationSection,
        items: &[ItemId],
    ) -> AlmanacResult<()> {
        self.conn
            .with_conn(|conn| curation_ops::replace_curation(conn, parent, section, items))?;
        info!(%parent, %section, count = items.len(), "curation updated");
        Ok(())
    }

    fn entries_for(&self, parent: ItemId) -> AlmanacResult<Vec<CurationEntry>> {
        self.conn.with_conn(|conn| curation_ops::entries_for(conn, parent))
    }
}
