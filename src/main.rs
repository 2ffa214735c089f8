use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_pulse::cli::{
    handle_export_command, handle_goal_command, handle_import_command, handle_total_command,
    GoalCommands, TotalCommands,
};
use budget_pulse::config::{paths::BudgetPaths, settings::Settings};
use budget_pulse::display::format_overview;
use budget_pulse::error::BudgetError;
use budget_pulse::services::LedgerService;
use budget_pulse::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "budgetpulse",
    version,
    about = "Personal budgeting ledger for goals, wants, and emergency funds",
    long_about = "BudgetPulse tracks a total saved amount and lets you allocate \
                  it across named goals, wants, and emergency funds. Every change \
                  is persisted locally, and the whole budget can be exported to \
                  or imported from a JSON file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the budget overview
    #[command(alias = "show")]
    Overview,

    /// Goal management commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Total saved amount commands
    #[command(subcommand)]
    Total(TotalCommands),

    /// Export the budget to a JSON file
    Export {
        /// Output file path (defaults to a dated file in the current directory)
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Import a budget from a JSON file, replacing the current one
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Initialize a new budget
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Open the ledger; a corrupt slot is reported but not fatal, the user
    // keeps working from an empty budget until the next save overwrites it
    let store = LedgerStore::open_file(&paths)?;
    let mut ledger = match LedgerService::open(store) {
        Ok(ledger) => ledger,
        Err(err @ BudgetError::Parse(_)) => {
            eprintln!("Warning: {}", err);
            eprintln!("Starting from an empty budget; the stored data is kept until the next change overwrites it.");
            LedgerService::new(LedgerStore::open_file(&paths)?)
        }
        Err(err) => return Err(err.into()),
    };

    match cli.command {
        Some(Commands::Overview) => {
            print!("{}", format_overview(ledger.state(), &settings));
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Total(cmd)) => {
            handle_total_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Export { output, pretty }) => {
            handle_export_command(&ledger, output, pretty)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&mut ledger, &file)?;
        }
        Some(Commands::Init) => {
            println!("Initializing BudgetPulse at: {}", paths.data_dir().display());
            settings.save(&paths)?;
            let total = ledger.state().total_amount;
            ledger.set_total_amount(total)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'budgetpulse goal add' to create your first goal.");
        }
        Some(Commands::Config) => {
            println!("BudgetPulse Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Budget file:    {}", paths.budget_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default step:    {}", settings.default_step);
        }
        None => {
            println!("BudgetPulse - Personal budgeting ledger");
            println!();
            println!("Run 'budgetpulse --help' for usage information.");
            println!("Run 'budgetpulse overview' to see your budget.");
        }
    }

    Ok(())
}
