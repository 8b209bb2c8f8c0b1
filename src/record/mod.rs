//! Rental Record Module
//!
//! Defines the core `RentalRecord` type, its derived display values, and the
//! fixed-width binary codec used to persist records.
//!
//! ## Record Lifecycle
//! ```text
//! start_rental ──▶ Active (end_time == 0) ──▶ Closed (end_time set, cost fixed)
//! ```
//! Closure is terminal: a record is mutated in place exactly once and never
//! removed from the store.

pub mod codec;

use std::fmt;

/// Reserved `end_time` value marking a rental as still active
pub const END_TIME_SENTINEL: i64 = 0;

// =============================================================================
// RentalRecord
// =============================================================================

/// A single rental transaction
///
/// Field strings are bounded to the codec's fixed widths at creation time, so
/// an in-memory record is always byte-identical to its persisted form.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalRecord {
    /// Unique rental record ID (e.g. "R0001"), assigned at creation
    pub record_id: String,

    /// Scooty identifier (e.g. "S0001"), caller-supplied or minted
    pub scooty_id: String,

    /// Customer name, truncated to the codec field width
    pub customer_name: String,

    /// Epoch seconds when the rental started
    pub start_time: i64,

    /// Epoch seconds when the rental ended; 0 while active
    pub end_time: i64,

    /// Cost computed at closure; 0.0 while active
    pub total_cost: f64,
}

impl RentalRecord {
    /// Whether this rental is still open
    pub fn is_active(&self) -> bool {
        self.end_time == END_TIME_SENTINEL
    }

    /// Derived display status
    pub fn status(&self) -> RecordStatus {
        if self.is_active() {
            RecordStatus::Active
        } else {
            RecordStatus::Closed
        }
    }

    /// Derived display cost: "N/A" while active, fixed-point otherwise
    pub fn display_cost(&self) -> String {
        if self.is_active() {
            "N/A".to_string()
        } else {
            format!("{:.2}", self.total_cost)
        }
    }
}

// =============================================================================
// RecordStatus
// =============================================================================

/// Display status derived from `end_time`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    /// Rental is open (`end_time` is the sentinel)
    Active,
    /// Rental has been closed and billed
    Closed,
}

impl RecordStatus {
    /// Uppercase label used in table output
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "ACTIVE",
            RecordStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn active_record() -> RentalRecord {
        RentalRecord {
            record_id: "R0001".to_string(),
            scooty_id: "S0001".to_string(),
            customer_name: "Alice".to_string(),
            start_time: 1_700_000_000,
            end_time: END_TIME_SENTINEL,
            total_cost: 0.0,
        }
    }

    #[test]
    fn test_active_status_follows_sentinel() {
        let mut record = active_record();
        assert!(record.is_active());
        assert_eq!(record.status(), RecordStatus::Active);

        record.end_time = record.start_time + 3600;
        assert!(!record.is_active());
        assert_eq!(record.status(), RecordStatus::Closed);
    }

    #[test]
    fn test_display_cost() {
        let mut record = active_record();
        assert_eq!(record.display_cost(), "N/A");

        record.end_time = record.start_time + 3600;
        record.total_cost = 15.0;
        assert_eq!(record.display_cost(), "15.00");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(RecordStatus::Active.to_string(), "ACTIVE");
        assert_eq!(RecordStatus::Closed.to_string(), "CLOSED");
    }
}
