use super::*;
use crate::util::storage::{MemoryStore, StorageError};

struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        Some("dark".to_owned())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn store_with(value: &str) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, value).unwrap();
    store
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn from_stored_only_accepts_exact_dark() {
    assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
    assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
    assert_eq!(ThemeMode::from_stored(Some("DARK")), ThemeMode::Light);
    assert_eq!(ThemeMode::from_stored(Some("")), ThemeMode::Light);
    assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
}

#[test]
fn flipped_alternates() {
    assert_eq!(ThemeMode::Light.flipped(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.flipped(), ThemeMode::Light);
    assert!(ThemeMode::Dark.is_dark());
    assert!(!ThemeMode::default().is_dark());
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn load_without_preference_is_light_and_writes_nothing() {
    let theme = ThemeController::load(MemoryStore::new());
    assert_eq!(theme.mode(), ThemeMode::Light);
    assert_eq!(theme.store().get(STORAGE_KEY), None);
}

#[test]
fn load_applies_saved_dark() {
    let theme = ThemeController::load(store_with("dark"));
    assert_eq!(theme.mode(), ThemeMode::Dark);
}

#[test]
fn load_treats_garbage_as_light() {
    let theme = ThemeController::load(store_with("midnight"));
    assert_eq!(theme.mode(), ThemeMode::Light);
}

#[test]
fn toggle_persists_new_mode() {
    let mut theme = ThemeController::load(MemoryStore::new());
    assert_eq!(theme.toggle(), ThemeMode::Dark);
    assert_eq!(theme.store().get(STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(theme.toggle(), ThemeMode::Light);
    assert_eq!(theme.store().get(STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn double_toggle_restores_mode_and_stored_value() {
    for start in ["dark", "light"] {
        let mut theme = ThemeController::load(store_with(start));
        let before = theme.mode();
        theme.toggle();
        theme.toggle();
        assert_eq!(theme.mode(), before);
        assert_eq!(theme.store().get(STORAGE_KEY).as_deref(), Some(start));
    }
}

#[test]
fn toggle_still_flips_when_store_rejects_write() {
    let mut theme = ThemeController::load(ReadOnlyStore);
    assert_eq!(theme.mode(), ThemeMode::Dark);
    assert_eq!(theme.toggle(), ThemeMode::Light);
}
