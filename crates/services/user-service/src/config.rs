//! User service configuration.

use std::env;

use serde::Deserialize;

/// User service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Number of users the in-memory store reserves room for up front
    pub initial_capacity: usize,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            service_name: lookup("USER_SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: lookup("USER_SERVICE_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            initial_capacity: lookup("USER_SERVICE_INITIAL_CAPACITY")
                .and_then(|c| c.parse().ok())
                .unwrap_or(defaults.initial_capacity),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "user-service".to_string(),
            log_level: "info".to_string(),
            initial_capacity: 0,
        }
    }
}
