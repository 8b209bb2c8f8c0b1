//! Tests for listing and search
//!
//! These tests verify:
//! - Iteration in insertion order, restartable
//! - Each filter variant against a mixed store
//! - Empty results as a valid, non-error outcome

use std::path::Path;

use rentaldb::{Config, RecordFilter, RecordStatus, RentalRecord, RentalStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

/// Store with three rentals: R0001 (closed, Alice/S0001), R0002 (active,
/// Bob/S0002), R0003 (active, Alice Cooper/S0001)
fn mixed_store(dir: &Path) -> RentalStore {
    let config = Config::builder()
        .data_file(dir.join("rental_data.dat"))
        .build();
    let mut store = RentalStore::open(config).unwrap();

    let start = 1_700_000_000;
    store.start_rental_at("S0001", "Alice", start);
    store.start_rental_at("S0002", "Bob", start + 100);
    store.start_rental_at("S0001", "Alice Cooper", start + 200);
    store.end_rental_at("R0001", start + 3600).unwrap();

    store
}

fn ids<'a>(records: impl Iterator<Item = &'a RentalRecord>) -> Vec<&'a str> {
    records.map(|r| r.record_id.as_str()).collect()
}

// =============================================================================
// Listing Tests
// =============================================================================

#[test]
fn test_iter_yields_insertion_order() {
    let temp = TempDir::new().unwrap();
    let store = mixed_store(temp.path());

    assert_eq!(ids(store.iter()), ["R0001", "R0002", "R0003"]);
}

#[test]
fn test_iter_is_restartable() {
    let temp = TempDir::new().unwrap();
    let store = mixed_store(temp.path());

    assert_eq!(store.iter().count(), 3);
    assert_eq!(store.iter().count(), 3);
}

#[test]
fn test_iter_over_empty_store() {
    let temp = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp.path().join("rental_data.dat"))
        .build();
    let store = RentalStore::open(config).unwrap();

    assert_eq!(store.iter().count(), 0);
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_by_record_id() {
    let temp = TempDir::new().unwrap();
    let store = mixed_store(temp.path());

    let filter = RecordFilter::RecordId("R0002".to_string());
    assert_eq!(ids(store.search(&filter)), ["R0002"]);
}

#[test]
fn test_search_by_scooty_id_preserves_order() {
    let temp = TempDir::new().unwrap();
    let store = mixed_store(temp.path());

    let filter = RecordFilter::ScootyId("S0001".to_string());
    assert_eq!(ids(store.search(&filter)), ["R0001", "R0003"]);
}

#[test]
fn test_search_by_customer_substring() {
    let temp = TempDir::new().unwrap();
    let store = mixed_store(temp.path());

    // "alice" matches both "Alice" and "Alice Cooper", case-insensitively
    let filter = RecordFilter::Customer("alice".to_string());
    assert_eq!(ids(store.search(&filter)), ["R0001", "R0003"]);
}

#[test]
fn test_search_by_status() {
    let temp = TempDir::new().unwrap();
    let store = mixed_store(temp.path());

    let active = RecordFilter::Status(RecordStatus::Active);
    let closed = RecordFilter::Status(RecordStatus::Closed);

    assert_eq!(ids(store.search(&active)), ["R0002", "R0003"]);
    assert_eq!(ids(store.search(&closed)), ["R0001"]);
}

#[test]
fn test_search_with_no_matches_is_empty_not_error() {
    let temp = TempDir::new().unwrap();
    let store = mixed_store(temp.path());

    let filter = RecordFilter::Customer("nobody".to_string());
    assert_eq!(store.search(&filter).count(), 0);
}

#[test]
fn test_search_empty_store() {
    let temp = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp.path().join("rental_data.dat"))
        .build();
    let store = RentalStore::open(config).unwrap();

    let filter = RecordFilter::Status(RecordStatus::Active);
    assert_eq!(store.search(&filter).count(), 0);
}
