//! Record Store Module
//!
//! The core of rentaldb: an in-memory ordered sequence of rental records with
//! flat-file persistence and the lifecycle operations over it.
//!
//! ## Responsibilities
//! - Load the data file at startup and save it at shutdown
//! - Assign unique, monotonic record and vehicle IDs
//! - Start and end rentals, computing cost at closure
//! - Serve listing and search queries in insertion order
//!
//! ## Consistency Rules
//! - A record is active iff `end_time == 0`; closure mutates it in place
//! - Records are never removed; the sequence only grows
//! - A failed load never yields a partially populated store
//! - ID counters are reseeded from the loaded records, so IDs stay monotonic
//!   across restarts

mod sequence;

pub use sequence::{IdSequence, ID_PAD_WIDTH};

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{RentalError, Result};
use crate::query::RecordFilter;
use crate::record::codec::{
    self, CUSTOMER_NAME_WIDTH, RECORD_WIDTH, SCOOTY_ID_WIDTH,
};
use crate::record::{RentalRecord, END_TIME_SENTINEL};

/// Prefix for rental record IDs
pub const RECORD_ID_PREFIX: &str = "R";

/// Prefix for minted vehicle IDs
pub const VEHICLE_ID_PREFIX: &str = "S";

// =============================================================================
// RentalStore
// =============================================================================

/// Owned, ordered store of rental records with flat-file persistence
///
/// Single-threaded by design: mutations take `&mut self`, file handles live
/// only within `open`/`save`, and no locking is involved. Concurrent external
/// processes on the same data file are out of scope.
pub struct RentalStore {
    /// Store configuration (data file path, hourly rate)
    config: Config,

    /// All records in insertion order; never shrinks
    records: Vec<RentalRecord>,

    /// Sequence behind rental record IDs ("R0001", ...)
    record_ids: IdSequence,

    /// Sequence behind minted vehicle IDs ("S0001", ...)
    vehicle_ids: IdSequence,
}

impl RentalStore {
    // =========================================================================
    // Persistence
    // =========================================================================

    /// Open a store, loading the data file if present
    ///
    /// A missing or empty data file is the expected first-run state and
    /// yields an empty store. A file whose size is not a multiple of the
    /// record width, a short read, or an undecodable record fails the load;
    /// no partial store survives such a failure.
    pub fn open(config: Config) -> Result<Self> {
        let records = load_records(&config.data_file)?;

        // Reseed both ID sequences from what was loaded so new IDs continue
        // monotonically after a restart
        let mut record_ids = IdSequence::new(RECORD_ID_PREFIX);
        let mut vehicle_ids = IdSequence::new(VEHICLE_ID_PREFIX);
        for record in &records {
            record_ids.observe(&record.record_id);
            vehicle_ids.observe(&record.scooty_id);
        }

        info!(
            records = records.len(),
            path = %config.data_file.display(),
            last_record_seq = record_ids.last(),
            "rental store opened"
        );

        Ok(Self {
            config,
            records,
            record_ids,
            vehicle_ids,
        })
    }

    /// Save all records to the data file, truncating prior contents
    ///
    /// A zero-record store still creates/truncates the file. Short writes
    /// surface as errors through `write_all`.
    pub fn save(&self) -> Result<()> {
        let mut file = File::create(&self.config.data_file)?;

        let mut buf = Vec::with_capacity(self.records.len() * RECORD_WIDTH);
        for record in &self.records {
            buf.extend_from_slice(&codec::encode_record(record));
        }

        file.write_all(&buf)?;
        file.sync_all()?;

        info!(
            records = self.records.len(),
            path = %self.config.data_file.display(),
            "rental store saved"
        );

        Ok(())
    }

    // =========================================================================
    // Lifecycle Operations
    // =========================================================================

    /// Start a new rental at the current time
    pub fn start_rental(&mut self, scooty_id: &str, customer_name: &str) -> &RentalRecord {
        self.start_rental_at(scooty_id, customer_name, Utc::now().timestamp())
    }

    /// Start a new rental with an explicit start time
    ///
    /// Inputs are bounded to their codec cell widths, so the record stored in
    /// memory equals what `save` will persist.
    pub fn start_rental_at(
        &mut self,
        scooty_id: &str,
        customer_name: &str,
        start_time: i64,
    ) -> &RentalRecord {
        let record_id = self.record_ids.next();
        let scooty_id = codec::bound_field(scooty_id, SCOOTY_ID_WIDTH);
        let customer_name = codec::bound_field(customer_name, CUSTOMER_NAME_WIDTH);

        // Operator-entered vehicle IDs count against the minting sequence so
        // a later minted ID never collides with one already on file
        self.vehicle_ids.observe(&scooty_id);

        debug!(%record_id, %scooty_id, start_time, "starting rental");

        let record = RentalRecord {
            record_id,
            scooty_id,
            customer_name,
            start_time,
            end_time: END_TIME_SENTINEL,
            total_cost: 0.0,
        };

        let index = self.records.len();
        self.records.push(record);
        &self.records[index]
    }

    /// Close an active rental at the current time
    pub fn end_rental(&mut self, record_id: &str) -> Result<&RentalRecord> {
        self.end_rental_at(record_id, Utc::now().timestamp())
    }

    /// Close an active rental with an explicit end time
    ///
    /// The end time is clamped to the record's start time, so a clock step
    /// backwards can never produce a negative cost. An unknown or already
    /// closed ID is a `RentalNotFound` error and leaves the store unchanged.
    pub fn end_rental_at(&mut self, record_id: &str, end_time: i64) -> Result<&RentalRecord> {
        let record = match self
            .records
            .iter_mut()
            .find(|r| r.record_id == record_id && r.is_active())
        {
            Some(record) => record,
            None => {
                warn!(%record_id, "end_rental: no active rental with this ID");
                return Err(RentalError::RentalNotFound(record_id.to_string()));
            }
        };

        let end_time = end_time.max(record.start_time);
        record.end_time = end_time;
        record.total_cost = rental_cost(record.start_time, end_time, self.config.hourly_rate);

        debug!(
            %record_id,
            end_time,
            total_cost = record.total_cost,
            "rental closed"
        );

        Ok(record)
    }

    /// Mint a fresh vehicle ID for an operator who left the field blank
    pub fn next_vehicle_id(&mut self) -> String {
        self.vehicle_ids.next()
    }

    // =========================================================================
    // Listing & Search
    // =========================================================================

    /// All records in insertion order
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    /// Lazy, restartable iteration over all records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, RentalRecord> {
        self.records.iter()
    }

    /// Records matching a filter, in insertion order
    ///
    /// An empty result is a valid outcome, not an error.
    pub fn search<'a>(
        &'a self,
        filter: &'a RecordFilter,
    ) -> impl Iterator<Item = &'a RentalRecord> {
        self.records.iter().filter(move |r| filter.matches(r))
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The store's configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// =============================================================================
// Cost Computation
// =============================================================================

/// Cost of a rental spanning `[start_time, end_time]` at `hourly_rate`
///
/// Pure and deterministic: elapsed seconds divided by 3600, times the rate.
/// Fractional hours are billed proportionally with no rounding.
pub fn rental_cost(start_time: i64, end_time: i64, hourly_rate: f64) -> f64 {
    let elapsed_seconds = (end_time - start_time) as f64;
    elapsed_seconds / 3600.0 * hourly_rate
}

// =============================================================================
// Data File Loading
// =============================================================================

/// Read every record from the data file
///
/// Missing or zero-length file is the first-run state, not an error.
fn load_records(path: &Path) -> Result<Vec<RentalRecord>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no data file found, starting a new database");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let file_size = file.metadata()?.len() as usize;
    if file_size == 0 {
        return Ok(Vec::new());
    }

    if file_size % RECORD_WIDTH != 0 {
        return Err(RentalError::CorruptFile(format!(
            "file size {} is not a multiple of the record width {}",
            file_size, RECORD_WIDTH
        )));
    }

    let mut data = vec![0u8; file_size];
    file.read_exact(&mut data).map_err(|e| {
        RentalError::CorruptFile(format!("short read of {} expected bytes: {}", file_size, e))
    })?;

    let mut records = Vec::with_capacity(file_size / RECORD_WIDTH);
    for chunk in data.chunks_exact(RECORD_WIDTH) {
        records.push(codec::decode_record(chunk)?);
    }

    Ok(records)
}
