//! Budget state model
//!
//! The root aggregate: the user-editable total plus the ordered list of
//! allocation entries. The remaining amount is always derived from the
//! invariant `remaining == total - sum(allocated)` rather than stored, so
//! the two can never drift apart.

use serde::{Deserialize, Serialize};

use super::entry::AllocationEntry;

/// The complete in-memory budget ledger
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetState {
    /// User-editable ceiling of funds
    pub total_amount: f64,

    /// Allocation entries in insertion order
    pub entries: Vec<AllocationEntry>,
}

impl BudgetState {
    /// Create an empty state with a starting total
    pub fn with_total(total_amount: f64) -> Self {
        Self {
            total_amount,
            entries: Vec::new(),
        }
    }

    /// Sum of all allocated amounts
    pub fn allocated_total(&self) -> f64 {
        self.entries.iter().map(|e| e.allocated_amount).sum()
    }

    /// Unallocated funds: `total_amount - sum(allocated_amount)`.
    ///
    /// May be negative when the total has been edited below the current
    /// allocations; over-allocation is allowed, not an error.
    pub fn remaining_amount(&self) -> f64 {
        self.total_amount - self.allocated_total()
    }

    /// Entries in display order: sorted by kind precedence (Goal, Want,
    /// EmergencyFund), preserving insertion order within a kind.
    ///
    /// Returned pairs carry the entry's position in `entries`, which is the
    /// index the mutation operations expect.
    pub fn sorted_entries(&self) -> Vec<(usize, &AllocationEntry)> {
        let mut indexed: Vec<(usize, &AllocationEntry)> = self.entries.iter().enumerate().collect();
        indexed.sort_by_key(|(_, e)| e.kind.precedence());
        indexed
    }
}
