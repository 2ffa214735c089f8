//! Allocation entry model
//!
//! An entry is one named allocation of saved funds: a goal being saved
//! toward, a discretionary want, or an emergency fund.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of an allocation entry.
///
/// Determines display grouping and sort precedence (Goal < Want <
/// EmergencyFund). The wire names are fixed; anything else in a persisted or
/// imported payload is a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EntryKind {
    /// A savings goal (default for new entries)
    #[default]
    Goal,
    /// A discretionary purchase being saved for
    Want,
    /// Emergency reserve funds
    EmergencyFund,
}

impl EntryKind {
    /// Sort precedence for display: goals first, emergency funds last
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Goal => 0,
            Self::Want => 1,
            Self::EmergencyFund => 2,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Goal => "Goal",
            Self::Want => "Want",
            Self::EmergencyFund => "Emergency Fund",
        }
    }

    /// All kinds in display order
    pub fn all() -> [EntryKind; 3] {
        [Self::Goal, Self::Want, Self::EmergencyFund]
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One named allocation of saved funds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    /// User-supplied name (non-empty)
    pub title: String,

    /// Funds currently assigned to this entry; never negative
    pub allocated_amount: f64,

    /// Goal ceiling; informational only, no enforced relation to the
    /// allocated amount
    pub target_amount: f64,

    /// Free-form display string ("Dec 2025"); not parsed or validated
    pub target_date: String,

    /// Category, used for display grouping and sort order
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl AllocationEntry {
    /// Create a new entry with an explicit title and kind
    pub fn new(title: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            title: title.into(),
            allocated_amount: 0.0,
            target_amount: 0.0,
            target_date: String::new(),
            kind,
        }
    }

    /// Default-populated template for the "add new goal" flow
    pub fn new_goal() -> Self {
        Self {
            title: "New Goal".to_string(),
            allocated_amount: 0.0,
            target_amount: 1000.0,
            target_date: "Dec 2025".to_string(),
            kind: EntryKind::Goal,
        }
    }

    /// Validate the entry before it is accepted into the ledger
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Entry title cannot be empty".to_string());
        }
        if !self.allocated_amount.is_finite() || self.allocated_amount < 0.0 {
            return Err(format!(
                "Allocated amount must be a non-negative number, got {}",
                self.allocated_amount
            ));
        }
        if !self.target_amount.is_finite() {
            return Err(format!(
                "Target amount must be a finite number, got {}",
                self.target_amount
            ));
        }
        Ok(())
    }
}

impl fmt::Display for AllocationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} of {} by {}",
            self.title, self.kind, self.allocated_amount, self.target_amount, self.target_date
        )
    }
}
