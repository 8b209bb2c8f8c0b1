//! ID sequence
//!
//! Monotonic counter behind the prefixed, zero-padded IDs ("R0001", "S0001").
//! Each `RentalStore` owns its own sequences, so independent stores never
//! share counter state.

/// Minimum number of digits in a generated ID suffix
///
/// IDs grow past this naturally once the counter exceeds 9999.
pub const ID_PAD_WIDTH: usize = 4;

/// Monotonic ID generator for one prefix
#[derive(Debug, Clone)]
pub struct IdSequence {
    /// Prefix prepended to every generated ID
    prefix: &'static str,

    /// Highest sequence number assigned or observed so far
    last: u64,
}

impl IdSequence {
    /// Create a sequence starting at zero (first ID is `<prefix>0001`)
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, last: 0 }
    }

    /// Generate the next ID and advance the counter
    pub fn next(&mut self) -> String {
        self.last += 1;
        format!("{}{:0width$}", self.prefix, self.last, width = ID_PAD_WIDTH)
    }

    /// Raise the counter to cover an existing ID
    ///
    /// IDs with a different prefix or a non-numeric suffix (operator-entered
    /// vehicle IDs can be arbitrary strings) are ignored.
    pub fn observe(&mut self, id: &str) {
        let suffix = match id.strip_prefix(self.prefix) {
            Some(s) => s,
            None => return,
        };
        if let Ok(number) = suffix.parse::<u64>() {
            if number > self.last {
                self.last = number;
            }
        }
    }

    /// Highest sequence number assigned or observed so far
    pub fn last(&self) -> u64 {
        self.last
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_id_is_padded() {
        let mut seq = IdSequence::new("R");
        assert_eq!(seq.next(), "R0001");
        assert_eq!(seq.next(), "R0002");
    }

    #[test]
    fn test_observe_seeds_counter() {
        let mut seq = IdSequence::new("R");
        seq.observe("R0007");
        assert_eq!(seq.next(), "R0008");
    }

    #[test]
    fn test_observe_ignores_lower_suffix() {
        let mut seq = IdSequence::new("R");
        seq.observe("R0009");
        seq.observe("R0003");
        assert_eq!(seq.next(), "R0010");
    }

    #[test]
    fn test_observe_ignores_foreign_ids() {
        let mut seq = IdSequence::new("S");
        seq.observe("R0042");
        seq.observe("BIKE-9");
        seq.observe("S12X4");
        assert_eq!(seq.next(), "S0001");
    }

    #[test]
    fn test_ids_grow_past_pad_width() {
        let mut seq = IdSequence::new("R");
        seq.observe("R9999");
        assert_eq!(seq.next(), "R10000");
    }

    #[test]
    fn test_independent_sequences() {
        let mut records = IdSequence::new("R");
        let mut vehicles = IdSequence::new("S");
        records.observe("R0005");
        assert_eq!(vehicles.next(), "S0001");
        assert_eq!(records.next(), "R0006");
    }
}
