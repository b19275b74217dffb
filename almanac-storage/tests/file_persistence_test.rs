use almanac_core::config::StorageConfig;
use almanac_core::models::CurationSection;
use almanac_core::traits::{IContentStore, ICurationStore};
use almanac_storage::connection::pragmas::verify_wal_mode;
use almanac_storage::StorageEngine;
use test_fixtures::{date, SiteBuilder};

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("content.db");

    let mut site = SiteBuilder::new();
    let topic = site.topic("Population");
    let m = site.methodology(topic, "Census quality", date(2023, 1, 10), None);

    {
        let engine = StorageEngine::open(&db_path).unwrap();
        engine.upsert_bulk(site.items()).unwrap();
        engine
            .set_curation(topic, CurationSection::HighlightedMethodologies, &[m])
            .unwrap();
    }

    let engine = StorageEngine::open(&db_path).unwrap();
    assert_eq!(engine.get(m).unwrap().unwrap().title, "Census quality");
    assert_eq!(
        engine
            .curated_ids(topic, CurationSection::HighlightedMethodologies)
            .unwrap(),
        vec![m]
    );
}

#[test]
fn file_backed_store_uses_wal_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        db_path: dir.path().join("wal.db").display().to_string(),
        ..StorageConfig::default()
    };
    let engine = StorageEngine::from_config(&config).unwrap();
    let wal = engine.connection().with_conn(verify_wal_mode).unwrap();
    assert!(wal);
}
