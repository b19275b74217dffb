//! Read and replace curated reference lists.

use rusqlite::{params, Connection};

use almanac_core::content::ItemId;
use almanac_core::errors::{AlmanacResult, StorageError};
use almanac_core::models::{CurationEntry, CurationSection};

use crate::to_storage_err;

/// Referenced ids for one list, in stored order.
pub fn curated_ids(
    conn: &Connection,
    parent: ItemId,
    section: CurationSection,
) -> AlmanacResult<Vec<ItemId>> {
    let mut stmt = conn
        .prepare(
            "SELECT item_id FROM curation_entries
             WHERE parent_id = ?1 AND section = ?2
             ORDER BY sort_order ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![parent.0 as i64, section.as_str()], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut ids = Vec::new();
    for row in rows {
        let id = row.map_err(|e| to_storage_err(e.to_string()))?;
        ids.push(ItemId(id as u64));
    }
    Ok(ids)
}

/// Replace a list wholesale. Positions are re-derived from slice order, so
/// gaps left by earlier deletions never leak into the stored ordering.
pub fn replace_curation(
    conn: &Connection,
    parent: ItemId,
    section: CurationSection,
    items: &[ItemId],
) -> AlmanacResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("replace_curation begin: {e}")))?;

    tx.execute(
        "DELETE FROM curation_entries WHERE parent_id = ?1 AND section = ?2",
        params![parent.0 as i64, section.as_str()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    for (position, item) in items.iter().enumerate() {
        tx.execute(
            "INSERT INTO curation_entries (parent_id, section, sort_order, item_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![parent.0 as i64, section.as_str(), position as i64, item.0 as i64],
        )
        .map_err(|e| to_storage_err(format!("curate {item} under {parent}: {e}")))?;
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("replace_curation commit: {e}")))?;
    Ok(())
}

/// All rows for a parent, grouped by section then position.
pub fn entries_for(conn: &Connection, parent: ItemId) -> AlmanacResult<Vec<CurationEntry>> {
    let mut stmt = conn
        .prepare(
            "SELECT section, item_id, sort_order FROM curation_entries
             WHERE parent_id = ?1
             ORDER BY section ASC, sort_order ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([parent.0 as i64], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut entries = Vec::new();
    for row in rows {
        let (section, item, sort_order) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let section = CurationSection::parse(&section).ok_or_else(|| StorageError::CorruptRow {
            table: "curation_entries".to_string(),
            details: format!("unknown section {section:?}"),
        })?;
        entries.push(CurationEntry {
            parent,
            section,
            item: ItemId(item as u64),
            sort_order,
        });
    }
    Ok(entries)
}
