//! Meter configuration
//!
//! Reads runtime settings from the environment.

use std::num::ParseIntError;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the debounce delay in milliseconds.
pub const DEBOUNCE_ENV: &str = "STRENGTH_METER_DEBOUNCE_MS";

const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid STRENGTH_METER_DEBOUNCE_MS value {value:?}: {source}")]
    InvalidDebounce {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Settings for interactive evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterConfig {
    /// Delay after the last input before the password is evaluated.
    pub debounce: Duration,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl MeterConfig {
    /// Loads the configuration from the environment.
    ///
    /// # Environment Variable
    ///
    /// Set `STRENGTH_METER_DEBOUNCE_MS` to override the debounce delay.
    /// If not set, defaults to 300 ms.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDebounce`] if the variable is set but is
    /// not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = std::env::var(DEBOUNCE_ENV) else {
            return Ok(Self::default());
        };

        let millis = raw
            .trim()
            .parse::<u64>()
            .map_err(|source| ConfigError::InvalidDebounce {
                value: raw.clone(),
                source,
            })?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Meter debounce set to {} ms from {}", millis, DEBOUNCE_ENV);

        Ok(Self {
            debounce: Duration::from_millis(millis),
        })
    }
}
