//! Browser local storage backend
//!
//! Adapts `window.localStorage` to the store's `KeyValueStorage` trait.

use leadbook::storage::{KeyValueStorage, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// `window.localStorage`, if the browser exposes it
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Grab the window's local storage. Private browsing modes may refuse
    /// access; every operation then fails with a backend error.
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::warn_1(&"localStorage is not available".into());
        }
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn inner(&self) -> StorageResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Backend("localStorage is not available".to_string()))
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", err))
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner()?.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.inner()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.inner()?.remove_item(key).map_err(js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let mut storage = LocalStorage::new();
        assert!(storage.is_available());

        storage.set_item("leadbook_test", "[]").unwrap();
        assert_eq!(
            storage.get_item("leadbook_test").unwrap().as_deref(),
            Some("[]")
        );

        storage.remove_item("leadbook_test").unwrap();
        assert_eq!(storage.get_item("leadbook_test").unwrap(), None);
    }
}
