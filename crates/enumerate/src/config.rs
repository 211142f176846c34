use thiserror::Error;

/// Largest search space enumerated by default, `2²⁴` states.
const DEFAULT_MAX_STATES: usize = 1 << 24;

/// Configuration for full enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_states: usize,
}

/// Errors that can occur when validating an enumeration config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_states must be positive")]
    MaxStates,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_states: DEFAULT_MAX_STATES,
        }
    }
}

impl Config {
    /// Creates a new config with a validated state limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_states` is zero.
    pub fn new(max_states: usize) -> Result<Self, ConfigError> {
        if max_states == 0 {
            return Err(ConfigError::MaxStates);
        }

        Ok(Self { max_states })
    }

    /// Returns the largest number of states that will be enumerated.
    #[must_use]
    pub fn max_states(&self) -> usize {
        self.max_states
    }
}
