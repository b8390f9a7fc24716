//! Runtime configuration for the onboarding core.
//!
//! Configuration can be built from presets, deserialized from JSON, or read
//! from environment variables:
//!
//! - `ONBOARDING_REQUIRE_TASKS`: reject flow templates without blueprints.
//! - `ONBOARDING_SEED_SAMPLE_DATA`: populate the sample directory on start.
//!
//! # Examples
//!
//! ```
//! use onboarding::config::OnboardingConfig;
//!
//! let config = OnboardingConfig::default();
//! assert!(!config.require_tasks);
//!
//! let strict = OnboardingConfig::strict();
//! assert!(strict.require_tasks);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable controlling [`OnboardingConfig::require_tasks`].
pub const REQUIRE_TASKS_ENV: &str = "ONBOARDING_REQUIRE_TASKS";

/// Environment variable controlling [`OnboardingConfig::seed_sample_data`].
pub const SEED_SAMPLE_DATA_ENV: &str = "ONBOARDING_SEED_SAMPLE_DATA";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that is not a boolean.
    #[error("{variable} must be a boolean (true/false/1/0/yes/no), got '{value}'")]
    InvalidBool {
        /// Variable name.
        variable: &'static str,
        /// Rejected value.
        value: String,
    },

    /// A JSON payload could not be parsed.
    #[error("failed to parse onboarding configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunable policies of the onboarding core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    /// Whether creating an employee from a template without blueprints fails
    /// with an empty-template error.
    pub require_tasks: bool,
    /// Whether the seed binary populates the sample directory.
    pub seed_sample_data: bool,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            require_tasks: false,
            seed_sample_data: true,
        }
    }
}

impl OnboardingConfig {
    /// Rejects empty templates.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            require_tasks: true,
            seed_sample_data: false,
        }
    }

    /// Accepts empty templates.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            require_tasks: false,
            seed_sample_data: true,
        }
    }

    /// Parses configuration from a JSON document. Missing keys take their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the payload is not valid JSON for
    /// this structure.
    pub fn from_json_str(payload: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Reads configuration from the process environment, starting from
    /// [`OnboardingConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] when a variable is set to a value
    /// that is not a recognised boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] when a value is not a recognised
    /// boolean.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            require_tasks: read_bool(&lookup, REQUIRE_TASKS_ENV, defaults.require_tasks)?,
            seed_sample_data: read_bool(&lookup, SEED_SAMPLE_DATA_ENV, defaults.seed_sample_data)?,
        })
    }
}

fn read_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = lookup(variable) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            variable,
            value: raw,
        }),
    }
}
