//! Latency configuration for the simulated remote calls.
//!
//! The asynchronous drills pretend to talk to a remote service. How long
//! that pretend call takes is configurable so that tests and demos can run
//! instantly while the defaults keep the original pacing.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use fp_training::config::LatencyConfig;
//!
//! let config = LatencyConfig::default().with_simulated_store(Duration::from_millis(5));
//! assert_eq!(config.remote_division, Duration::from_secs(1));
//! assert_eq!(config.simulated_store, Duration::from_millis(5));
//! ```

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Environment variable overriding [`LatencyConfig::remote_division`], in milliseconds.
pub const REMOTE_DIVISION_LATENCY_ENV: &str = "FP_TRAINING_REMOTE_DIVISION_LATENCY_MS";

/// Environment variable overriding [`LatencyConfig::simulated_store`], in milliseconds.
pub const SIMULATED_STORE_LATENCY_ENV: &str = "FP_TRAINING_SIMULATED_STORE_LATENCY_MS";

const DEFAULT_REMOTE_DIVISION_LATENCY: Duration = Duration::from_millis(1000);
const DEFAULT_SIMULATED_STORE_LATENCY: Duration = Duration::from_millis(100);

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Delays applied by the simulated remote calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    /// Delay before the remote division answers.
    pub remote_division: Duration,
    /// Delay between reading and writing the simulated store.
    pub simulated_store: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            remote_division: DEFAULT_REMOTE_DIVISION_LATENCY,
            simulated_store: DEFAULT_SIMULATED_STORE_LATENCY,
        }
    }
}

impl LatencyConfig {
    /// A configuration with no delay at all.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            remote_division: Duration::ZERO,
            simulated_store: Duration::ZERO,
        }
    }

    /// Returns a copy with the remote division delay replaced.
    #[must_use]
    pub const fn with_remote_division(self, latency: Duration) -> Self {
        Self {
            remote_division: latency,
            ..self
        }
    }

    /// Returns a copy with the simulated store delay replaced.
    #[must_use]
    pub const fn with_simulated_store(self, latency: Duration) -> Self {
        Self {
            simulated_store: latency,
            ..self
        }
    }

    /// Loads the configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but is not
    /// a non-negative integer number of milliseconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Loads the configuration through an arbitrary key lookup.
    ///
    /// [`LatencyConfig::from_env`] is this function over `std::env::var`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a value is not valid Unicode
    /// or not a non-negative integer number of milliseconds.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let defaults = Self::default();
        let remote_division = parse_millis(
            REMOTE_DIVISION_LATENCY_ENV,
            lookup(REMOTE_DIVISION_LATENCY_ENV),
        )?
        .unwrap_or(defaults.remote_division);
        let simulated_store = parse_millis(
            SIMULATED_STORE_LATENCY_ENV,
            lookup(SIMULATED_STORE_LATENCY_ENV),
        )?
        .unwrap_or(defaults.simulated_store);

        tracing::debug!(?remote_division, ?simulated_store, "latency configuration loaded");

        Ok(Self {
            remote_division,
            simulated_store,
        })
    }
}

fn parse_millis(
    key: &str,
    raw: Result<String, env::VarError>,
) -> Result<Option<Duration>, ConfigError> {
    let raw = match raw {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: "value is not valid Unicode".to_string(),
            });
        }
    };

    raw.map(|value| {
        value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|error| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn lookup_from(entries: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, env::VarError> {
        let entries: HashMap<String, String> = entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| entries.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = LatencyConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, LatencyConfig::default());
    }

    #[test]
    fn test_overrides_are_read_in_milliseconds() {
        let config = LatencyConfig::from_lookup(lookup_from(&[
            (REMOTE_DIVISION_LATENCY_ENV, "20"),
            (SIMULATED_STORE_LATENCY_ENV, " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.remote_division, Duration::from_millis(20));
        assert_eq!(config.simulated_store, Duration::from_millis(3));
    }

    #[test]
    fn test_invalid_value_is_reported_with_its_key() {
        let error = LatencyConfig::from_lookup(lookup_from(&[(SIMULATED_STORE_LATENCY_ENV, "soon")]))
            .unwrap_err();
        assert!(matches!(
            &error,
            ConfigError::InvalidValue { key, .. } if key == SIMULATED_STORE_LATENCY_ENV
        ));
        assert!(error.to_string().starts_with("Invalid value for FP_TRAINING_SIMULATED_STORE_LATENCY_MS"));
    }

    #[test]
    fn test_non_unicode_value_is_invalid_not_unset() {
        let error = LatencyConfig::from_lookup(|key| {
            if key == REMOTE_DIVISION_LATENCY_ENV {
                Err(env::VarError::NotUnicode(OsString::from("1000")))
            } else {
                Err(env::VarError::NotPresent)
            }
        })
        .unwrap_err();

        assert_eq!(
            error,
            ConfigError::InvalidValue {
                key: REMOTE_DIVISION_LATENCY_ENV.to_string(),
                message: "value is not valid Unicode".to_string(),
            }
        );
    }

    #[test]
    fn test_from_env_reads_the_process_environment() {
        assert_eq!(
            LatencyConfig::from_env(),
            LatencyConfig::from_lookup(|key| env::var(key))
        );
    }

    #[test]
    fn test_immediate_has_no_delay() {
        let config = LatencyConfig::immediate();
        assert_eq!(config.remote_division, Duration::ZERO);
        assert_eq!(config.simulated_store, Duration::ZERO);
    }
}
