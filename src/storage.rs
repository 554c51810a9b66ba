//! Browser Storage
//!
//! `localStorage` when the browser allows it, memory otherwise (private
//! mode, disabled storage). The theme then lasts only for the page.

use admin_behaviors::{MemoryStorage, Storage, UiError, UiResult};

pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match storage {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                log::warn!("localStorage unavailable, theme will not persist");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> UiResult<Option<String>> {
        match self {
            BrowserStorage::Local(storage) => storage
                .get_item(key)
                .map_err(|e| UiError::Storage(format!("{:?}", e))),
            BrowserStorage::Memory(storage) => storage.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> UiResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| UiError::Storage(format!("{:?}", e))),
            BrowserStorage::Memory(storage) => storage.set(key, value),
        }
    }
}
