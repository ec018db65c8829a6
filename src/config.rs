// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Library configuration loaded from environment variables.

use std::env;

/// Default number of recorded samples per minute, used to estimate a
/// workout's duration when no end time is available.
pub const DEFAULT_SAMPLES_PER_MINUTE: u32 = 5;

/// Library configuration.
///
/// The sampling rate is an explicit value handed to duration calculation,
/// not process-wide mutable state, so tests can vary it without
/// cross-test interference.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of samples recorded per minute of activity. Always nonzero.
    pub samples_per_minute: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            samples_per_minute: DEFAULT_SAMPLES_PER_MINUTE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `BPM_SAMPLES_PER_MINUTE` overrides the default sampling rate. A zero
    /// rate is rejected: it would make the duration estimate divide by zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let samples_per_minute = match env::var("BPM_SAMPLES_PER_MINUTE") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::Invalid("BPM_SAMPLES_PER_MINUTE", raw.clone()))?,
            Err(_) => DEFAULT_SAMPLES_PER_MINUTE,
        };

        if samples_per_minute == 0 {
            return Err(ConfigError::Invalid(
                "BPM_SAMPLES_PER_MINUTE",
                "0".to_string(),
            ));
        }

        Ok(Self { samples_per_minute })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
