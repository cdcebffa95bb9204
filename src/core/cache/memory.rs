//! In-memory cache, used to inject a fake in place of [`super::Disk`].

use std::cell::RefCell;
use std::collections::HashMap;

use super::Cache;
use crate::error::CacheError;

/// Map-backed cache with no expiry.
#[derive(Debug, Default)]
pub struct Memory {
    entries: RefCell<HashMap<String, Vec<u8>>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Cache for Memory {
    fn get(&self, handle: &str) -> Option<Vec<u8>> {
        self.entries.borrow().get(handle).cloned()
    }

    fn put(&self, handle: &str, data: &[u8]) -> Result<(), CacheError> {
        self.entries
            .borrow_mut()
            .insert(handle.to_string(), data.to_vec());
        Ok(())
    }
}
