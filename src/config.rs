//! Configuration for rentaldb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "rental_data.dat";

/// Default rental rate per hour, in whole currency units
pub const DEFAULT_HOURLY_RATE: f64 = 15.0;

/// Main configuration for a rentaldb store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the flat data file holding all rental records back-to-back
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Billing Configuration
    // -------------------------------------------------------------------------
    /// Hourly rate applied when a rental is closed; fractional hours are
    /// billed proportionally
    pub hourly_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the hourly rental rate
    pub fn hourly_rate(mut self, rate: f64) -> Self {
        self.config.hourly_rate = rate;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
