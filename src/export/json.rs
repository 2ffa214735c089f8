//! JSON export/import of the budget state
//!
//! Writes and reads the same structure the persistence slot stores. Import
//! is all-or-nothing: a payload that fails to parse or validate leaves the
//! current state untouched.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetState;
use crate::storage::StoredBudget;

/// Serialize the current state to a writer in the wire format
pub fn export_json<W: Write>(state: &BudgetState, writer: &mut W, pretty: bool) -> BudgetResult<()> {
    let stored = StoredBudget::from_state(state);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &stored)
    } else {
        serde_json::to_writer(&mut *writer, &stored)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    writer
        .flush()
        .map_err(|e| BudgetError::Export(format!("Failed to flush export: {}", e)))?;

    Ok(())
}

/// Parse a wire-format payload into a budget state.
///
/// Any structural mismatch (including an unknown entry `type`) is an
/// `Import` error; nothing is applied on failure.
pub fn import_json(payload: &str) -> BudgetResult<BudgetState> {
    let stored: StoredBudget =
        serde_json::from_str(payload).map_err(|e| BudgetError::Import(e.to_string()))?;

    let state = stored.into_state();

    for entry in &state.entries {
        entry
            .validate()
            .map_err(|e| BudgetError::Import(format!("Invalid entry '{}': {}", entry.title, e)))?;
    }

    Ok(state)
}
