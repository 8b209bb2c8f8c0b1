//! Query Module
//!
//! Filters applied by `RentalStore::search`. Matching rules:
//! - record and scooty IDs match exactly (they are identifiers)
//! - customer names match on a case-insensitive substring
//! - status filters select active-only or closed-only records

use crate::record::{RecordStatus, RentalRecord};

/// A search criterion over rental records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Exact match on `record_id`
    RecordId(String),

    /// Exact match on `scooty_id`
    ScootyId(String),

    /// Case-insensitive substring match on `customer_name`
    Customer(String),

    /// Match records in the given lifecycle status
    Status(RecordStatus),
}

impl RecordFilter {
    /// Whether a record satisfies this filter
    pub fn matches(&self, record: &RentalRecord) -> bool {
        match self {
            RecordFilter::RecordId(id) => record.record_id == *id,
            RecordFilter::ScootyId(id) => record.scooty_id == *id,
            RecordFilter::Customer(needle) => record
                .customer_name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            RecordFilter::Status(status) => record.status() == *status,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
