use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), None);
}

#[test]
fn memory_store_overwrites_existing_key() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Write { key: "theme".to_owned(), reason: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "failed to write `theme`: QuotaExceededError");
    assert_eq!(StorageError::Unavailable.to_string(), "local storage is unavailable");
}
