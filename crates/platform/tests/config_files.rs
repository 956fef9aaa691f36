//! Config and event-list loading from disk.

use std::io::Write;

use platform::{AppConfig, ConfigError, Services};

#[test]
fn load_reads_file_and_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let list_path = dir.path().join("events.json");
    std::fs::write(
        &list_path,
        r#"[{"id":"7","title":"Noche de Cine","date":"1 Jun","location":"Auditorio",
            "attendees":"30 asistentes","emoji":"🎬","category":"Cultural"}]"#,
    )
    .unwrap();

    let cfg_path = dir.path().join("eventos.json");
    let mut f = std::fs::File::create(&cfg_path).unwrap();
    write!(
        f,
        r#"{{"catalog_path": {}}}"#,
        serde_json::to_string(&list_path).unwrap()
    )
    .unwrap();

    let cfg = AppConfig::load(&cfg_path).unwrap();
    let catalog = cfg.catalog().unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.items()[0].title, "Noche de Cine");

    let services = Services::with_catalog(catalog);
    assert_eq!(services.events.list().len(), 1);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn broken_catalog_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let list_path = dir.path().join("events.json");
    std::fs::write(&list_path, "[{]").unwrap();
    let cfg = AppConfig {
        log_filter: None,
        catalog_path: Some(list_path),
    };
    assert!(matches!(cfg.catalog(), Err(ConfigError::Catalog(_))));
}
