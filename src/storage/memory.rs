//! In-memory key-value storage backend
//!
//! The key-value analogue of browser local storage: slots live in a map for
//! the lifetime of the process. Also serves as the storage double in tests.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};

use super::backend::StorageBackend;

/// Key-value slot storage held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> BudgetResult<Option<Vec<u8>>> {
        let slots = self
            .slots
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> BudgetResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        slots.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
