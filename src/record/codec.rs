//! Record codec
//!
//! Fixed-width binary encoding for rental records. The data file is a
//! sequence of these records back-to-back with no header, footer, or
//! checksum, so the per-record width is the file format.
//!
//! ## Record Layout (94 bytes, little-endian)
//! ```text
//! ┌────────────┬────────────┬───────────────┬──────────┬──────────┬──────────┐
//! │ record_id  │ scooty_id  │ customer_name │ start    │ end      │ cost     │
//! │ (10)       │ (10)       │ (50)          │ i64 (8)  │ i64 (8)  │ f64 (8)  │
//! └────────────┴────────────┴───────────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! String cells are UTF-8, NUL-padded on the right. Encoding truncates
//! over-long values at a character boundary; decoding takes bytes up to the
//! first NUL and rejects invalid UTF-8 as corruption.

use bytes::{Buf, BufMut};

use crate::error::{RentalError, Result};
use super::RentalRecord;

/// Width of the record ID cell in bytes
pub const RECORD_ID_WIDTH: usize = 10;

/// Width of the scooty ID cell in bytes
pub const SCOOTY_ID_WIDTH: usize = 10;

/// Width of the customer name cell in bytes
pub const CUSTOMER_NAME_WIDTH: usize = 50;

/// Total serialized width of one record
pub const RECORD_WIDTH: usize =
    RECORD_ID_WIDTH + SCOOTY_ID_WIDTH + CUSTOMER_NAME_WIDTH + 8 + 8 + 8;

// =============================================================================
// Encoding
// =============================================================================

/// Encode a record into its fixed-width form
///
/// The returned buffer is always exactly `RECORD_WIDTH` bytes.
pub fn encode_record(record: &RentalRecord) -> Vec<u8> {
    let mut buf = Vec::with_capacity(RECORD_WIDTH);

    put_str_cell(&mut buf, &record.record_id, RECORD_ID_WIDTH);
    put_str_cell(&mut buf, &record.scooty_id, SCOOTY_ID_WIDTH);
    put_str_cell(&mut buf, &record.customer_name, CUSTOMER_NAME_WIDTH);
    buf.put_i64_le(record.start_time);
    buf.put_i64_le(record.end_time);
    buf.put_f64_le(record.total_cost);

    buf
}

/// Write one NUL-padded string cell of exactly `width` bytes
fn put_str_cell(buf: &mut Vec<u8>, value: &str, width: usize) {
    let bounded = bound_str(value, width);
    buf.put_slice(bounded.as_bytes());
    buf.put_bytes(0, width - bounded.len());
}

/// Truncate a string to at most `width` bytes at a character boundary
pub fn bound_str(value: &str, width: usize) -> &str {
    if value.len() <= width {
        return value;
    }
    let mut end = width;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Bound a caller-supplied field for storage: stop at the first NUL (the
/// padding byte cannot appear inside a cell) and truncate to the cell width
pub fn bound_field(value: &str, width: usize) -> String {
    let stripped = match value.find('\0') {
        Some(pos) => &value[..pos],
        None => value,
    };
    bound_str(stripped, width).to_string()
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode one record from a `RECORD_WIDTH`-byte slice
pub fn decode_record(bytes: &[u8]) -> Result<RentalRecord> {
    if bytes.len() < RECORD_WIDTH {
        return Err(RentalError::CorruptRecord(format!(
            "truncated record: expected {} bytes, got {}",
            RECORD_WIDTH,
            bytes.len()
        )));
    }

    let mut buf = &bytes[..RECORD_WIDTH];

    let record_id = take_str_cell(&mut buf, RECORD_ID_WIDTH, "record_id")?;
    let scooty_id = take_str_cell(&mut buf, SCOOTY_ID_WIDTH, "scooty_id")?;
    let customer_name = take_str_cell(&mut buf, CUSTOMER_NAME_WIDTH, "customer_name")?;
    let start_time = buf.get_i64_le();
    let end_time = buf.get_i64_le();
    let total_cost = buf.get_f64_le();

    Ok(RentalRecord {
        record_id,
        scooty_id,
        customer_name,
        start_time,
        end_time,
        total_cost,
    })
}

/// Read one NUL-padded string cell of exactly `width` bytes
fn take_str_cell(buf: &mut &[u8], width: usize, field: &str) -> Result<String> {
    let mut cell = vec![0u8; width];
    buf.copy_to_slice(&mut cell);

    let end = cell.iter().position(|&b| b == 0).unwrap_or(width);
    let value = std::str::from_utf8(&cell[..end]).map_err(|e| {
        RentalError::CorruptRecord(format!("{} cell is not valid UTF-8: {}", field, e))
    })?;

    Ok(value.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
