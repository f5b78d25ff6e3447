//! Browser local-storage backend for the session store.

use ecocycle_access::{SessionStorage, StorageError};
use web_sys::Storage;
use web_sys::wasm_bindgen::JsValue;

/// [`SessionStorage`] over `window.localStorage`.
///
/// Holds no browser handle: the storage object is looked up per call,
/// so the type stays plain data and a missing or disabled storage
/// surfaces as an error the session store downgrades, never a panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// Creates the backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn local_storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable {
            reason: "no window object".to_string(),
        })?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable { reason: describe(&e) })?
            .ok_or_else(|| StorageError::Unavailable {
                reason: "local storage disabled".to_string(),
            })
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                reason: describe(&e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: describe(&e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::RemoveFailed {
                key: key.to_string(),
                reason: describe(&e),
            })
    }
}

/// Renders a thrown JS value into an error reason.
fn describe(error: &JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{error:?}"))
}
