//! `localStorage` backend for content records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes browser-only web-sys glue so the repository in the `content`
//! crate can treat browser storage as a plain synchronous key/value store.
//! Outside the browser there is no storage: reads miss and writes fail.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use content::{LocalStore, StoreError};

/// Browser `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocalStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl LocalStore for BrowserLocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}
