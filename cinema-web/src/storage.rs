//! Durable storage for the session token.
//!
//! The browser build keeps the token in `localStorage`; native builds and
//! tests use an in-memory slot. Both sit behind [`TokenStorage`] so writes and
//! clears always go through the same place.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StorageError;

/// Persistence for a single session token.
pub trait TokenStorage {
    /// Read the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects the write.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Forget the persisted token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects the removal.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory token slot. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStorage {
    /// An empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.into()))),
        }
    }

    /// The token currently held.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.token())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

/// Token storage backed by the browser's `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalTokenStorage {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalTokenStorage {
    /// Store the token under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()
            .get_item(&self.key)
            .map_err(|err| unavailable("read", &self.key, &err))
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        local_storage()
            .set_item(&self.key, token)
            .map_err(|err| unavailable("write", &self.key, &err))
    }

    fn clear(&self) -> Result<(), StorageError> {
        local_storage()
            .remove_item(&self.key)
            .map_err(|err| unavailable("remove", &self.key, &err))
    }
}

/// The token is stored as the bare string, not JSON, so other readers of
/// the key see the same value the API issued.
#[cfg(target_arch = "wasm32")]
fn local_storage() -> web_sys::Storage {
    use gloo_storage::{LocalStorage, Storage};

    LocalStorage::raw()
}

#[cfg(target_arch = "wasm32")]
fn unavailable(action: &str, key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("failed to {action} '{key}': {err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_starts_empty() {
        let storage = MemoryTokenStorage::new();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_memory_storage_save_and_clear() {
        let storage = MemoryTokenStorage::new();
        storage.save("abc").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("abc"));

        storage.clear().unwrap();
        assert_eq!(storage.token(), None);
    }

    #[test]
    fn test_memory_storage_clones_share_slot() {
        let storage = MemoryTokenStorage::with_token("first");
        let observer = storage.clone();

        storage.save("second").unwrap();
        assert_eq!(observer.token().as_deref(), Some("second"));
    }
}
