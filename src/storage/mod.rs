//! Storage layer for BudgetPulse
//!
//! Provides durable read/write of the entire budget state to a single named
//! persistence slot through a pluggable backend.

pub mod backend;
pub mod file;
pub mod memory;

pub use backend::StorageBackend;
pub use file::FileBackend;
pub use memory::MemoryBackend;

use serde::{Deserialize, Serialize};

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{AllocationEntry, BudgetState};

/// The slot every ledger lives in; matches the original app's file name
pub const BUDGET_SLOT: &str = "budgetData.json";

/// Serialized form of the budget, shared by the persistence slot and the
/// export/import payload.
///
/// `remainingAmount` is written for compatibility with older payloads but
/// never trusted on read; it is always recomputed from the invariant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBudget {
    pub total_amount: f64,

    #[serde(default)]
    pub remaining_amount: f64,

    #[serde(default)]
    pub goals: Vec<AllocationEntry>,
}

impl StoredBudget {
    /// Build the wire form of a state, deriving the remaining amount
    pub fn from_state(state: &BudgetState) -> Self {
        Self {
            total_amount: state.total_amount,
            remaining_amount: state.remaining_amount(),
            goals: state.entries.clone(),
        }
    }

    /// Convert back to in-memory state, discarding the stored remainder
    pub fn into_state(self) -> BudgetState {
        BudgetState {
            total_amount: self.total_amount,
            entries: self.goals,
        }
    }
}

/// Durable read/write of the entire budget state to one persistence slot
pub struct LedgerStore {
    backend: Box<dyn StorageBackend>,
    slot: String,
}

impl std::fmt::Debug for LedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerStore")
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

impl LedgerStore {
    /// Create a store over an explicit backend and slot key
    pub fn new(backend: Box<dyn StorageBackend>, slot: impl Into<String>) -> Self {
        Self {
            backend,
            slot: slot.into(),
        }
    }

    /// Create a file-backed store in the standard data directory
    pub fn open_file(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(
            Box::new(FileBackend::new(paths.data_dir())),
            BUDGET_SLOT,
        ))
    }

    /// Create a store over an in-memory key-value backend
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()), BUDGET_SLOT)
    }

    /// The slot key this store reads and writes
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Load the budget state from the slot.
    ///
    /// A missing slot is `Ok(None)` — the expected first-run condition, not
    /// an error. A present-but-malformed payload is a `Parse` error so data
    /// corruption is never masked by a silent default.
    pub fn load(&self) -> BudgetResult<Option<BudgetState>> {
        let Some(bytes) = self.backend.read(&self.slot)? else {
            return Ok(None);
        };

        let stored: StoredBudget = serde_json::from_slice(&bytes).map_err(|e| {
            BudgetError::Parse(format!("Malformed budget data in '{}': {}", self.slot, e))
        })?;

        Ok(Some(stored.into_state()))
    }

    /// Serialize the full state and overwrite the slot
    pub fn save(&self, state: &BudgetState) -> BudgetResult<()> {
        let stored = StoredBudget::from_state(state);
        let bytes = serde_json::to_vec_pretty(&stored)
            .map_err(|e| BudgetError::Storage(format!("Failed to serialize budget: {}", e)))?;

        self.backend.write(&self.slot, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;
    use tempfile::TempDir;

    fn sample_state() -> BudgetState {
        let mut state = BudgetState::with_total(1000.0);
        let mut car = AllocationEntry::new("Car", EntryKind::Goal);
        car.allocated_amount = 100.0;
        car.target_amount = 5000.0;
        car.target_date = "Dec 2025".to_string();
        state.entries.push(car);
        state
    }

    #[test]
    fn test_load_missing_slot_is_none() {
        let store = LedgerStore::in_memory();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = LedgerStore::in_memory();
        let state = sample_state();

        store.save(&state).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_round_trip_empty_state() {
        let store = LedgerStore::in_memory();
        let state = BudgetState::default();

        store.save(&state).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_file_backend_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(
            Box::new(FileBackend::new(temp_dir.path())),
            BUDGET_SLOT,
        );
        let state = sample_state();

        store.save(&state).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_malformed_payload_is_parse_error() {
        let backend = MemoryBackend::new();
        backend.write(BUDGET_SLOT, b"{ not json").unwrap();
        let store = LedgerStore::new(Box::new(backend), BUDGET_SLOT);

        let err = store.load().unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_unknown_entry_kind_is_parse_error() {
        let backend = MemoryBackend::new();
        let payload = br#"{
            "totalAmount": 100,
            "remainingAmount": 100,
            "goals": [{
                "title": "Mystery",
                "allocatedAmount": 0,
                "targetAmount": 0,
                "targetDate": "",
                "type": "Unknown"
            }]
        }"#;
        backend.write(BUDGET_SLOT, payload).unwrap();
        let store = LedgerStore::new(Box::new(backend), BUDGET_SLOT);

        assert!(store.load().unwrap_err().is_parse());
    }

    #[test]
    fn test_stored_remaining_amount_is_ignored() {
        let backend = MemoryBackend::new();
        // remainingAmount lies; load must recompute from the invariant
        let payload = br#"{
            "totalAmount": 1000,
            "remainingAmount": 42,
            "goals": [{
                "title": "Car",
                "allocatedAmount": 100,
                "targetAmount": 5000,
                "targetDate": "Dec 2025",
                "type": "Goal"
            }]
        }"#;
        backend.write(BUDGET_SLOT, payload).unwrap();
        let store = LedgerStore::new(Box::new(backend), BUDGET_SLOT);

        let state = store.load().unwrap().unwrap();
        assert_eq!(state.remaining_amount(), 900.0);
    }

    #[test]
    fn test_missing_remaining_amount_is_accepted() {
        let backend = MemoryBackend::new();
        let payload = br#"{ "totalAmount": 500, "goals": [] }"#;
        backend.write(BUDGET_SLOT, payload).unwrap();
        let store = LedgerStore::new(Box::new(backend), BUDGET_SLOT);

        let state = store.load().unwrap().unwrap();
        assert_eq!(state.total_amount, 500.0);
        assert_eq!(state.remaining_amount(), 500.0);
    }

    #[test]
    fn test_saved_payload_has_wire_field_names() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());
        let store = LedgerStore::new(Box::new(backend), BUDGET_SLOT);
        store.save(&sample_state()).unwrap();

        let raw = std::fs::read(temp_dir.path().join(BUDGET_SLOT)).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();

        assert_eq!(json["totalAmount"], 1000.0);
        assert_eq!(json["remainingAmount"], 900.0);
        assert_eq!(json["goals"][0]["allocatedAmount"], 100.0);
        assert_eq!(json["goals"][0]["type"], "Goal");
    }
}
