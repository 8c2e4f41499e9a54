//! `localStorage`-backed session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store mirrors `token` and `user` here so a reload keeps the
//! user signed in. Outside the browser build every call reports the storage
//! as unavailable, which the store treats as "no persisted session".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use peerpoint::{SessionStorage, StorageError};

/// Stateless handle; each call looks up `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError::Unavailable("window.localStorage is not accessible".to_owned()))
}

#[cfg(feature = "csr")]
fn js_error(op: &str, key: &str) -> StorageError {
    StorageError::Unavailable(format!("localStorage {op} failed for `{key}`"))
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|_| js_error("read", key))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|_| js_error("write", key))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(unavailable())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(|_| js_error("remove", key))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> StorageError {
    StorageError::Unavailable("localStorage requires the browser build".to_owned())
}
