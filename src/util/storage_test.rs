use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());

    store.set("user", "{}").unwrap();
    assert_eq!(store.get("user").as_deref(), Some("{}"));
    assert_eq!(store.len(), 1);

    store.set("user", "[]").unwrap();
    assert_eq!(store.get("user").as_deref(), Some("[]"));
    assert_eq!(store.len(), 1);

    store.remove("user");
    assert_eq!(store.get("user"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let store = MemoryStorage::new();
    store.remove("missing");
    assert!(store.is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let store = BrowserStorage;
    assert_eq!(store.set("user", "{}"), Err(StorageError::Unavailable));
    assert_eq!(store.get("user"), None);
    store.remove("user");
}
