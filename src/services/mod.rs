//! Business logic layer for BudgetPulse
//!
//! The ledger service mediates every state transition over the single
//! in-memory budget state and persists after each one.

pub mod ledger;

pub use ledger::{LedgerService, DEFAULT_STEP};
