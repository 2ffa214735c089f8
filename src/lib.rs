//! BudgetPulse - Personal budgeting ledger
//!
//! This library provides the core functionality for the BudgetPulse
//! budgeting application: a total saved amount allocated across named goals,
//! wants, and emergency funds, persisted wholesale to a single slot and
//! exportable as JSON.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (allocation entries, budget state)
//! - `storage`: Pluggable slot storage (filesystem or in-memory key-value)
//! - `services`: The ledger service owning all state transitions
//! - `export`: Manual JSON export/import
//! - `display`: Terminal output formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use budget_pulse::models::AllocationEntry;
//! use budget_pulse::services::{LedgerService, DEFAULT_STEP};
//! use budget_pulse::storage::LedgerStore;
//!
//! # fn main() -> budget_pulse::error::BudgetResult<()> {
//! let mut ledger = LedgerService::open(LedgerStore::in_memory())?;
//! ledger.set_total_amount(1000.0)?;
//! ledger.upsert_entry(AllocationEntry::new_goal(), None)?;
//! ledger.add_to_entry(0, DEFAULT_STEP)?;
//! assert_eq!(ledger.remaining_amount(), 900.0);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
