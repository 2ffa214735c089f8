//! Total amount CLI commands
//!
//! Implements CLI commands for editing the total saved amount: a direct
//! set plus the quick ± step actions from the original app's header.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::services::LedgerService;

/// Total amount subcommands
#[derive(Subcommand)]
pub enum TotalCommands {
    /// Set the total saved amount
    Set {
        /// New total amount
        amount: f64,
    },

    /// Add to the total saved amount
    Add {
        /// Amount to add (defaults to the configured step)
        amount: Option<f64>,
    },

    /// Reduce the total saved amount
    Reduce {
        /// Amount to remove (defaults to the configured step)
        amount: Option<f64>,
    },
}

/// Handle a total command
pub fn handle_total_command(
    service: &mut LedgerService,
    settings: &Settings,
    cmd: TotalCommands,
) -> BudgetResult<()> {
    match cmd {
        TotalCommands::Set { amount } => {
            service.set_total_amount(amount)?;
        }
        TotalCommands::Add { amount } => {
            service.adjust_total(amount.unwrap_or(settings.default_step))?;
        }
        TotalCommands::Reduce { amount } => {
            service.adjust_total(-amount.unwrap_or(settings.default_step))?;
        }
    }

    let remaining = service.remaining_amount();
    println!(
        "Total Saved: {}{:.2} (remaining {}{:.2})",
        settings.currency_symbol,
        service.state().total_amount,
        settings.currency_symbol,
        remaining
    );

    if remaining < 0.0 {
        println!(
            "Warning: allocations exceed the total by {}{:.2}",
            settings.currency_symbol,
            -remaining
        );
    }

    Ok(())
}
