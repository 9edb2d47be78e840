//! Global configuration parsing and validation.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::{AppError, Result};

fn default_api_base_url() -> String {
    "https://swapi.dev/api".into()
}

fn default_first_id() -> u32 {
    1
}

fn default_last_id() -> u32 {
    84
}

fn default_chunk_size() -> u32 {
    10
}

fn default_database_url() -> String {
    "sqlite://star_census.db".into()
}

fn default_request_timeout_seconds() -> u64 {
    5
}

/// Global configuration parsed from `config.toml`.
///
/// Every field carries a default matching the reference run (IDs 1–83,
/// chunks of 10), so an empty document is a valid configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// Base URL of the upstream REST API, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// First record ID to harvest (inclusive).
    #[serde(default = "default_first_id")]
    pub first_id: u32,
    /// End of the ID range (exclusive).
    #[serde(default = "default_last_id")]
    pub last_id: u32,
    /// Number of records fetched concurrently and committed per batch.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u32,
    /// Database connection string for the `SQLite` store.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Per-request timeout in seconds; a timed-out request is a fetch failure.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            first_id: default_first_id(),
            last_id: default_last_id(),
            chunk_size: default_chunk_size(),
            database_url: default_database_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string and validate it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` on invalid TOML or a failed validation.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_owned();
        config.validate()?;
        Ok(config)
    }

    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Err(AppError::Config("api_base_url must not be empty".into()));
        }
        if self.database_url.is_empty() {
            return Err(AppError::Config("database_url must not be empty".into()));
        }
        if self.first_id == 0 {
            return Err(AppError::Config("first_id must be positive".into()));
        }
        if self.first_id > self.last_id {
            return Err(AppError::Config(format!(
                "invalid id range: first_id {} exceeds last_id {}",
                self.first_id, self.last_id
            )));
        }
        if self.chunk_size == 0 {
            return Err(AppError::Config("chunk_size must be at least 1".into()));
        }
        if self.request_timeout_seconds == 0 {
            return Err(AppError::Config(
                "request_timeout_seconds must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
