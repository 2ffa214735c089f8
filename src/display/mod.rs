//! Display formatting for terminal output
//!
//! Formats the budget overview the way the original app's header and goal
//! list presented it: total saved with the remaining amount, then entries
//! grouped by kind.

use crate::config::settings::Settings;
use crate::models::{AllocationEntry, BudgetState, EntryKind};

/// Format the full budget overview: header line plus entries grouped by kind
pub fn format_overview(state: &BudgetState, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format_header(state, settings));
    output.push('\n');

    if state.entries.is_empty() {
        output.push_str("\nNo goals yet. Run 'budgetpulse goal add' to create one.\n");
        return output;
    }

    let sorted = state.sorted_entries();

    for kind in EntryKind::all() {
        let of_kind: Vec<(usize, &AllocationEntry)> = sorted
            .iter()
            .filter(|(_, e)| e.kind == kind)
            .copied()
            .collect();
        if of_kind.is_empty() {
            continue;
        }

        output.push_str(&format!("\n{}s\n", kind.label()));
        output.push_str(&format!("{}\n", "-".repeat(64)));

        for (index, entry) in of_kind {
            output.push_str(&format_entry_line(index, entry, settings));
        }
    }

    output
}

/// Format the header: total saved with the derived remaining amount
pub fn format_header(state: &BudgetState, settings: &Settings) -> String {
    format!(
        "Total Saved: {}{:.2} (remaining {}{:.2})\n{}",
        settings.currency_symbol,
        state.total_amount,
        settings.currency_symbol,
        state.remaining_amount(),
        "=".repeat(64)
    )
}

/// Format one entry line with its mutation index
pub fn format_entry_line(index: usize, entry: &AllocationEntry, settings: &Settings) -> String {
    format!(
        "  [{}] {:24} {}{:>10.2} of {}{:<10.2} by {}\n",
        index,
        entry.title,
        settings.currency_symbol,
        entry.allocated_amount,
        settings.currency_symbol,
        entry.target_amount,
        if entry.target_date.is_empty() {
            "-"
        } else {
            &entry.target_date
        }
    )
}
