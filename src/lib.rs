//! # rentaldb
//!
//! A scooter rental record store with:
//! - Flat-file binary persistence (fixed-width records, no header)
//! - Unique, monotonic ID assignment that survives restarts
//! - Rental lifecycle operations with deterministic cost computation
//! - Listing and search over records in insertion order
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Menu CLI (bin)                          │
//! │          load → per-command operations → save                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     RentalStore                              │
//! │   Vec<RentalRecord> + record/vehicle IdSequence counters     │
//! └─────────┬──────────────────────────────┬────────────────────┘
//!           │                              │
//!           ▼                              ▼
//!   ┌─────────────┐                ┌─────────────┐
//!   │ RecordFilter│                │ record codec│
//!   │  (search)   │                │ (fixed 94B) │
//!   └─────────────┘                └──────┬──────┘
//!                                         │
//!                                         ▼
//!                                 ┌─────────────┐
//!                                 │  data file  │
//!                                 │ (flat, raw) │
//!                                 └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod query;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RentalError, Result};
pub use config::Config;
pub use query::RecordFilter;
pub use record::{RecordStatus, RentalRecord, END_TIME_SENTINEL};
pub use store::RentalStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rentaldb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
