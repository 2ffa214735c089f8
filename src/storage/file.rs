//! Filesystem storage backend with atomic writes
//!
//! Stores each slot as a file under a data directory. Writes go to a temp
//! file in the same directory followed by a rename, so a crash or power
//! failure mid-write never leaves a half-written slot behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};

use super::backend::StorageBackend;

/// Filesystem-backed slot storage rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at the given directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Full path of a slot file
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(key)
    }

    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> BudgetResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BudgetError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory (important for atomic rename)
        let temp_path = path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(bytes)
            .map_err(|e| BudgetError::Storage(format!("Failed to write data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            BudgetError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> BudgetResult<Option<Vec<u8>>> {
        let path = self.slot_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read(&path)
            .map(Some)
            .map_err(|e| BudgetError::Storage(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn write(&self, key: &str, bytes: &[u8]) -> BudgetResult<()> {
        self.write_atomic(&self.slot_path(key), bytes)
    }
}
