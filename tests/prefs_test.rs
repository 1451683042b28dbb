use perito_ui::logger::Diagnostics;
use perito_ui::prefs::{FileStorage, MemoryStorage, PreferenceStore, StorageBackend, StorageError};
use serde_json::json;

fn memory_store() -> (PreferenceStore, MemoryStorage, Diagnostics) {
    let backend = MemoryStorage::new();
    let diagnostics = Diagnostics::new();
    let store = PreferenceStore::new(Box::new(backend.clone()), diagnostics.clone());
    (store, backend, diagnostics)
}

#[test]
fn test_save_and_get_round_trip() {
    let (store, _, _) = memory_store();

    store.save("theme", &json!({"mode": "dark"}));
    let value: serde_json::Value = store.get("theme").unwrap();
    assert_eq!(value, json!({"mode": "dark"}));
}

#[test]
fn test_get_missing_returns_default() {
    let (store, _, _) = memory_store();

    assert_eq!(store.get_or("missing", "fallback".to_string()), "fallback");
    assert!(store.get::<serde_json::Value>("missing").is_none());
}

#[test]
fn test_keys_are_namespaced() {
    let (store, backend, _) = memory_store();

    store.save("theme", &"dark");
    let raw = backend.get_item("sistemaPerito_theme").unwrap();
    assert_eq!(raw.as_deref(), Some("\"dark\""));

    // The bare key is never written
    assert!(backend.get_item("theme").unwrap().is_none());
}

#[test]
fn test_overwrite_on_resave() {
    let (store, _, _) = memory_store();

    store.save("sidebar_width", &30);
    store.save("sidebar_width", &45);
    assert_eq!(store.get_or("sidebar_width", 0), 45);
}

#[test]
fn test_remove() {
    let (store, _, _) = memory_store();

    store.save("theme", &"dark");
    store.remove("theme");
    assert!(store.get::<String>("theme").is_none());
}

#[test]
fn test_complex_values_round_trip() {
    let (store, _, _) = memory_store();

    let value = json!({
        "columns": ["fecha", "estado", "perito"],
        "page_size": 25,
        "filters": {"estado": "pendiente", "urgente": true}
    });
    store.save("tabla_informes", &value);
    assert_eq!(store.get::<serde_json::Value>("tabla_informes").unwrap(), value);
}

struct FailingStorage;

impl StorageBackend for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }
}

#[test]
fn test_storage_failures_are_swallowed_and_recorded() {
    let diagnostics = Diagnostics::new();
    let store = PreferenceStore::new(Box::new(FailingStorage), diagnostics.clone());

    // Neither call panics or surfaces an error
    store.save("theme", &"dark");
    assert_eq!(store.get_or("theme", "claro".to_string()), "claro");

    let entries = diagnostics.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().any(|e| e.contains("quota exceeded")));
    assert!(entries.iter().any(|e| e.contains("storage disabled")));
}

#[test]
fn test_corrupt_payload_returns_default_and_records() {
    let backend = MemoryStorage::new();
    backend.set_item("sistemaPerito_theme", "{not json").unwrap();

    let diagnostics = Diagnostics::new();
    let store = PreferenceStore::new(Box::new(backend), diagnostics.clone());

    assert_eq!(store.get_or("theme", "claro".to_string()), "claro");
    assert!(!diagnostics.entries().is_empty());
}

#[test]
fn test_file_storage_persists_across_instances() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("perito_ui_test_prefs");
    let file_path = temp_dir.join("nested").join("preferences.json");
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }

    {
        let store = PreferenceStore::new(Box::new(FileStorage::new(&file_path)), Diagnostics::new());
        store.save("theme", &json!({"mode": "dark"}));
    }

    // A fresh store over the same file sees the saved value
    let store = PreferenceStore::new(Box::new(FileStorage::new(&file_path)), Diagnostics::new());
    let value: serde_json::Value = store.get("theme").unwrap();
    assert_eq!(value, json!({"mode": "dark"}));

    // The on-disk payload is the namespaced raw map
    let content = fs::read_to_string(&file_path).unwrap();
    assert!(content.contains("sistemaPerito_theme"));

    let _ = fs::remove_dir_all(&temp_dir);
}
