//! Core data models for BudgetPulse
//!
//! This module contains the data structures that represent the budgeting
//! domain: the allocation entries and the budget state that owns them.

pub mod entry;
pub mod state;

pub use entry::{AllocationEntry, EntryKind};
pub use state::BudgetState;
