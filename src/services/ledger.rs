//! Ledger service
//!
//! Mediates all state transitions over a single in-memory `BudgetState`,
//! keeping the remaining amount consistent and persisting the full state
//! after every transition.
//!
//! Persistence errors are surfaced but never roll back the in-memory
//! mutation: the working copy stays available even when it has diverged
//! from storage, and the next successful save reconciles the two.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{AllocationEntry, BudgetState};
use crate::storage::LedgerStore;

/// Amount added or removed by the quick fund/defund actions
pub const DEFAULT_STEP: f64 = 100.0;

/// Owns the budget state for the session and every mutation path into it
#[derive(Debug)]
pub struct LedgerService {
    store: LedgerStore,
    state: BudgetState,
}

impl LedgerService {
    /// Create a service over an empty state
    pub fn new(store: LedgerStore) -> Self {
        Self {
            store,
            state: BudgetState::default(),
        }
    }

    /// Create a service by loading the persisted slot.
    ///
    /// A missing slot yields the empty default state. A malformed slot is a
    /// `Parse` error; the caller may warn and fall back to [`Self::new`],
    /// which leaves the corrupt payload on disk until the next save.
    pub fn open(store: LedgerStore) -> BudgetResult<Self> {
        let state = store.load()?.unwrap_or_default();
        Ok(Self { store, state })
    }

    /// Create a service over an explicit starting state (does not persist)
    pub fn with_state(store: LedgerStore, state: BudgetState) -> Self {
        Self { store, state }
    }

    /// The current in-memory state
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Unallocated funds, derived from the invariant
    pub fn remaining_amount(&self) -> f64 {
        self.state.remaining_amount()
    }

    /// Entries in display order with their mutation indices
    pub fn sorted_entries(&self) -> Vec<(usize, &AllocationEntry)> {
        self.state.sorted_entries()
    }

    /// Replace the total amount and persist.
    ///
    /// Accepts any finite number. Existing allocations are not validated
    /// against the new total; a negative remaining amount signals
    /// over-allocation and is allowed.
    pub fn set_total_amount(&mut self, new_total: f64) -> BudgetResult<()> {
        if !new_total.is_finite() {
            return Err(BudgetError::Validation(format!(
                "Total amount must be a finite number, got {}",
                new_total
            )));
        }

        self.state.total_amount = new_total;
        self.persist()
    }

    /// Shift the total amount by a delta (the header's quick ± actions)
    pub fn adjust_total(&mut self, delta: f64) -> BudgetResult<()> {
        self.set_total_amount(self.state.total_amount + delta)
    }

    /// Increase the allocation of the entry at `index` by `delta`,
    /// consuming the same amount from remaining funds.
    pub fn add_to_entry(&mut self, index: usize, delta: f64) -> BudgetResult<()> {
        self.check_index(index)?;
        self.check_delta(delta)?;

        self.state.entries[index].allocated_amount += delta;
        self.persist()
    }

    /// Decrease the allocation of the entry at `index` by `delta`, freeing
    /// the same amount back into remaining funds.
    ///
    /// If the full delta would drive the allocation below zero the call is
    /// a no-op: nothing is partially applied and nothing is written.
    pub fn reduce_from_entry(&mut self, index: usize, delta: f64) -> BudgetResult<()> {
        self.check_index(index)?;
        self.check_delta(delta)?;

        let entry = &mut self.state.entries[index];
        if entry.allocated_amount < delta {
            return Ok(());
        }

        entry.allocated_amount -= delta;
        self.persist()
    }

    /// Remove the entry at `index`, freeing its allocation back into
    /// remaining funds. Returns the removed entry.
    pub fn delete_entry(&mut self, index: usize) -> BudgetResult<AllocationEntry> {
        self.check_index(index)?;

        let removed = self.state.entries.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Insert or replace an entry.
    ///
    /// With `Some(index)` the entry at that position is replaced (the edit
    /// flow); with `None` the entry is appended as new (the create flow).
    /// This is the single save path for both.
    pub fn upsert_entry(
        &mut self,
        entry: AllocationEntry,
        index: Option<usize>,
    ) -> BudgetResult<()> {
        entry.validate().map_err(BudgetError::Validation)?;

        match index {
            Some(i) => {
                self.check_index(i)?;
                self.state.entries[i] = entry;
            }
            None => self.state.entries.push(entry),
        }

        self.persist()
    }

    /// Replace the entire state wholesale (the import path) and persist
    pub fn replace_state(&mut self, state: BudgetState) -> BudgetResult<()> {
        for entry in &state.entries {
            entry.validate().map_err(BudgetError::Validation)?;
        }

        self.state = state;
        self.persist()
    }

    fn check_index(&self, index: usize) -> BudgetResult<()> {
        let len = self.state.entries.len();
        debug_assert!(index < len, "entry index {} out of range ({})", index, len);
        if index >= len {
            return Err(BudgetError::index_out_of_range(index, len));
        }
        Ok(())
    }

    fn check_delta(&self, delta: f64) -> BudgetResult<()> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(BudgetError::Validation(format!(
                "Amount must be a positive number, got {}",
                delta
            )));
        }
        Ok(())
    }

    fn persist(&self) -> BudgetResult<()> {
        self.store.save(&self.state)
    }
}
