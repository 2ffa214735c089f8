//! Storage backend capability
//!
//! The persistence slot is abstracted as a minimal read/write capability so
//! the ledger store never branches on the platform. Two backends exist: a
//! filesystem backend for native use and an in-memory key-value backend
//! (the browser-storage analogue, also useful in tests). Both store the
//! identical serialized form; the choice is made once at construction time.

use crate::error::BudgetResult;

/// A named-slot byte store.
///
/// `read` distinguishes "slot does not exist" (`Ok(None)`) from a failed
/// read (`Err`); a missing slot is an expected condition on first run.
pub trait StorageBackend: Send {
    /// Read the full contents of a slot, or `None` if it does not exist
    fn read(&self, key: &str) -> BudgetResult<Option<Vec<u8>>>;

    /// Overwrite the full contents of a slot, creating it if needed
    fn write(&self, key: &str, bytes: &[u8]) -> BudgetResult<()>;
}
