//! Hasher configuration module
//!
//! Handles loading and validating the bcrypt cost factor from environment variables.

use crate::error::ConfigError;
use serde::Deserialize;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Environment variable holding the cost factor
pub const COST_ENV_VAR: &str = "BCRYPT_COST";

/// Immutable hashing configuration, held by each `PasswordHasher`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    /// log2 of the number of bcrypt key-expansion rounds
    pub cost: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl HasherConfig {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Check the cost lies in the range bcrypt accepts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_COST..=MAX_COST).contains(&self.cost) {
            Ok(())
        } else {
            Err(ConfigError::CostOutOfRange(self.cost))
        }
    }

    /// Load configuration from environment variables
    ///
    /// `BCRYPT_COST` overrides the default cost. An unset variable keeps the
    /// default; anything unparsable or out of range is rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors if file not found)
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::EnvLoad(e)),
        }

        Self::from_cost_var(std::env::var(COST_ENV_VAR).ok().as_deref())
    }

    fn from_cost_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let config = match value.map(str::trim) {
            None | Some("") => Self::default(),
            Some(raw) => {
                let cost = raw.parse::<u32>().map_err(|_| {
                    ConfigError::InvalidValue(format!(
                        "{} must be an integer, got {:?}",
                        COST_ENV_VAR, raw
                    ))
                })?;
                Self::new(cost)
            }
        };

        config.validate()?;
        Ok(config)
    }
}
