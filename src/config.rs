//! Service configuration.
//!
//! A [`CalcConfig`] is built once by the caller and handed to the service at
//! construction. The core never reads configuration from the environment.

use serde::Serialize;
use thiserror::Error;

/// Default number of records the history store retains
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Default maximum absolute value a result may have before being rejected
pub const DEFAULT_OVERFLOW_CEILING: f64 = 1e15;

/// Default significant digits used by the display formatting helper
pub const DEFAULT_DISPLAY_PRECISION: usize = 15;

/// Tunable limits of the calculation service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcConfig {
    /// Maximum records retained by the history store (FIFO eviction beyond it)
    pub history_capacity: usize,
    /// Magnitude ceiling applied to every successful result
    pub overflow_ceiling: f64,
    /// Significant digits for boundary-side result formatting
    pub display_precision: usize,
    /// When false, `record_calculation` is a no-op and history stays empty
    pub enable_history: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            overflow_ceiling: DEFAULT_OVERFLOW_CEILING,
            display_precision: DEFAULT_DISPLAY_PRECISION,
            enable_history: true,
        }
    }
}

/// A configuration value outside its accepted range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("history capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    #[error("overflow ceiling must be positive and finite, got {0}")]
    InvalidCeiling(f64),

    #[error("display precision must be between 1 and 17, got {0}")]
    InvalidPrecision(usize),
}

impl CalcConfig {
    /// Check every field against its accepted range.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] encountered:
    /// - capacity of zero
    /// - ceiling that is zero, negative, or non-finite
    /// - precision outside 1..=17 (an `f64` carries at most 17 significant
    ///   decimal digits)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.history_capacity));
        }
        if !self.overflow_ceiling.is_finite() || self.overflow_ceiling <= 0.0 {
            return Err(ConfigError::InvalidCeiling(self.overflow_ceiling));
        }
        if self.display_precision == 0 || self.display_precision > 17 {
            return Err(ConfigError::InvalidPrecision(self.display_precision));
        }
        Ok(())
    }
}
