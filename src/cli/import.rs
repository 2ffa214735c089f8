//! CLI command handler for budget import
//!
//! Accepts a file in the shared wire format. A payload that fails to parse
//! blocks only the import itself; the current budget is left untouched.

use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::export::import_json;
use crate::services::LedgerService;

/// Handle the import command
pub fn handle_import_command(service: &mut LedgerService, file: &Path) -> BudgetResult<()> {
    if !file.exists() {
        return Err(BudgetError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let payload = std::fs::read_to_string(file)
        .map_err(|e| BudgetError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    // Parse and validate before touching the current state
    let state = import_json(&payload)?;
    let goal_count = state.entries.len();

    service.replace_state(state)?;

    println!(
        "Imported {} goals from {} (total {:.2}, remaining {:.2})",
        goal_count,
        file.display(),
        service.state().total_amount,
        service.remaining_amount()
    );
    Ok(())
}
