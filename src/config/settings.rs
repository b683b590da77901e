//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub reports: ReportsConfig,
    pub logging: LoggingConfig,
}

/// Simulated API latency configuration
///
/// The store mimics the request/response delays of the original backend.
/// Delays are grouped by operation class; all values are in milliseconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub simulate_latency: bool,
    pub read_delay_ms: u64,
    pub write_delay_ms: u64,
    pub registration_delay_ms: u64,
    pub report_delay_ms: u64,
}

/// Report generation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportsConfig {
    pub top_students_limit: usize,
    pub recent_activity_limit: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CAMPUSHUB"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from a specific configuration file
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::CampusHubError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                simulate_latency: true,
                read_delay_ms: 300,
                write_delay_ms: 500,
                registration_delay_ms: 300,
                report_delay_ms: 400,
            },
            reports: ReportsConfig {
                top_students_limit: 3,
                recent_activity_limit: 5,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
                file_path: None,
            },
        }
    }
}
