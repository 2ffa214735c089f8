//! Goal CLI commands
//!
//! Implements CLI commands for creating, editing, funding, and deleting
//! allocation entries. Create and edit share the same upsert path; they
//! differ only in whether an index is supplied.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_entry_line;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{AllocationEntry, EntryKind};
use crate::services::LedgerService;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a new goal (defaults to the new-goal template)
    Add {
        /// Goal title
        #[arg(short, long)]
        title: Option<String>,

        /// Target amount to save toward
        #[arg(long)]
        target: Option<f64>,

        /// Target date (free-form, e.g. "Dec 2025")
        #[arg(long)]
        date: Option<String>,

        /// Entry kind: goal, want, or emergency-fund
        #[arg(long, value_enum, default_value = "goal")]
        kind: KindArg,
    },

    /// Edit an existing goal
    Edit {
        /// Entry index (shown in the overview)
        index: usize,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New allocated amount
        #[arg(long)]
        allocated: Option<f64>,

        /// New target amount
        #[arg(long)]
        target: Option<f64>,

        /// New target date
        #[arg(long)]
        date: Option<String>,

        /// New entry kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Move funds from remaining into a goal
    Fund {
        /// Entry index (shown in the overview)
        index: usize,

        /// Amount to add (defaults to the configured step)
        #[arg(short, long)]
        amount: Option<f64>,
    },

    /// Move funds from a goal back into remaining
    Defund {
        /// Entry index (shown in the overview)
        index: usize,

        /// Amount to remove (defaults to the configured step)
        #[arg(short, long)]
        amount: Option<f64>,
    },

    /// Delete a goal, freeing its allocation
    Delete {
        /// Entry index (shown in the overview)
        index: usize,
    },
}

/// Entry kind argument for clap
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    Goal,
    Want,
    EmergencyFund,
}

impl From<KindArg> for EntryKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Goal => EntryKind::Goal,
            KindArg::Want => EntryKind::Want,
            KindArg::EmergencyFund => EntryKind::EmergencyFund,
        }
    }
}

/// Handle a goal command
pub fn handle_goal_command(
    service: &mut LedgerService,
    settings: &Settings,
    cmd: GoalCommands,
) -> BudgetResult<()> {
    match cmd {
        GoalCommands::Add {
            title,
            target,
            date,
            kind,
        } => {
            let mut entry = AllocationEntry::new_goal();
            if let Some(title) = title {
                entry.title = title;
            }
            if let Some(target) = target {
                entry.target_amount = target;
            }
            if let Some(date) = date {
                entry.target_date = date;
            }
            entry.kind = kind.into();

            service.upsert_entry(entry, None)?;

            let index = service.state().entries.len() - 1;
            let entry = &service.state().entries[index];
            println!("Added:");
            print!("{}", format_entry_line(index, entry, settings));
        }

        GoalCommands::Edit {
            index,
            title,
            allocated,
            target,
            date,
            kind,
        } => {
            let mut entry = entry_at(service, index)?.clone();
            if let Some(title) = title {
                entry.title = title;
            }
            if let Some(allocated) = allocated {
                entry.allocated_amount = allocated;
            }
            if let Some(target) = target {
                entry.target_amount = target;
            }
            if let Some(date) = date {
                entry.target_date = date;
            }
            if let Some(kind) = kind {
                entry.kind = kind.into();
            }

            service.upsert_entry(entry, Some(index))?;

            println!("Updated:");
            print!(
                "{}",
                format_entry_line(index, &service.state().entries[index], settings)
            );
        }

        GoalCommands::Fund { index, amount } => {
            entry_at(service, index)?;
            let amount = amount.unwrap_or(settings.default_step);
            service.add_to_entry(index, amount)?;

            let entry = &service.state().entries[index];
            println!(
                "Funded '{}' with {}{:.2} (allocated {}{:.2}, remaining {}{:.2})",
                entry.title,
                settings.currency_symbol,
                amount,
                settings.currency_symbol,
                entry.allocated_amount,
                settings.currency_symbol,
                service.remaining_amount()
            );
        }

        GoalCommands::Defund { index, amount } => {
            entry_at(service, index)?;
            let amount = amount.unwrap_or(settings.default_step);
            let before = service.state().entries[index].allocated_amount;
            service.reduce_from_entry(index, amount)?;

            let entry = &service.state().entries[index];
            if entry.allocated_amount == before {
                println!(
                    "'{}' has only {}{:.2} allocated; nothing removed",
                    entry.title, settings.currency_symbol, before
                );
            } else {
                println!(
                    "Removed {}{:.2} from '{}' (allocated {}{:.2}, remaining {}{:.2})",
                    settings.currency_symbol,
                    amount,
                    entry.title,
                    settings.currency_symbol,
                    entry.allocated_amount,
                    settings.currency_symbol,
                    service.remaining_amount()
                );
            }
        }

        GoalCommands::Delete { index } => {
            entry_at(service, index)?;
            let removed = service.delete_entry(index)?;
            println!(
                "Deleted '{}' (freed {}{:.2}, remaining {}{:.2})",
                removed.title,
                settings.currency_symbol,
                removed.allocated_amount,
                settings.currency_symbol,
                service.remaining_amount()
            );
        }
    }

    Ok(())
}

/// Resolve a user-supplied index to an entry, with a friendly error.
///
/// The service treats a bad index as a contract violation, so user input is
/// validated here before it crosses that boundary.
fn entry_at(service: &LedgerService, index: usize) -> BudgetResult<&AllocationEntry> {
    service.state().entries.get(index).ok_or_else(|| {
        BudgetError::Validation(format!(
            "No goal at index {} (have {}); run 'budgetpulse overview' to see indices",
            index,
            service.state().entries.len()
        ))
    })
}
