//! In-memory storage, used when `localStorage` is unavailable.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::Storage;
use crate::domain::{UiError, UiResult};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    read_only: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write fail, like a full or locked-down `localStorage`
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> UiResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> UiResult<()> {
        if self.read_only.get() {
            return Err(UiError::Storage(format!("cannot write `{}`", key)));
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
