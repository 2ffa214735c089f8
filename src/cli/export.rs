//! CLI command handler for budget export
//!
//! Writes the current budget to a JSON file in the shared wire format.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};
use crate::export::export_json;
use crate::services::LedgerService;

/// Handle the export command
pub fn handle_export_command(
    service: &LedgerService,
    output: Option<PathBuf>,
    pretty: bool,
) -> BudgetResult<()> {
    let output = output.unwrap_or_else(default_export_path);

    let file = File::create(&output).map_err(|e| {
        BudgetError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    export_json(service.state(), &mut writer, pretty)?;

    println!(
        "Exported {} goals to {}",
        service.state().entries.len(),
        output.display()
    );
    Ok(())
}

/// Default export file name, stamped with today's date
fn default_export_path() -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d");
    PathBuf::from(format!("budgetpulse-export-{}.json", today))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_path_is_dated_json() {
        let path = default_export_path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("budgetpulse-export-"));
        assert!(name.ends_with(".json"));
    }
}
