//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{CampusHubError, Result};
use super::Settings;

/// Upper bound for simulated delays, in milliseconds
const MAX_SIMULATED_DELAY_MS: u64 = 10_000;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_reports_config(&settings.reports)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate simulated API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    let delays = [
        ("read_delay_ms", config.read_delay_ms),
        ("write_delay_ms", config.write_delay_ms),
        ("registration_delay_ms", config.registration_delay_ms),
        ("report_delay_ms", config.report_delay_ms),
    ];

    for (name, value) in delays {
        if value > MAX_SIMULATED_DELAY_MS {
            return Err(CampusHubError::Config(
                format!("{} must be at most {} ms", name, MAX_SIMULATED_DELAY_MS)
            ));
        }
    }

    Ok(())
}

/// Validate report generation configuration
fn validate_reports_config(config: &super::ReportsConfig) -> Result<()> {
    if config.top_students_limit == 0 {
        return Err(CampusHubError::Config(
            "Top students limit must be greater than 0".to_string()
        ));
    }

    if config.recent_activity_limit == 0 {
        return Err(CampusHubError::Config(
            "Recent activity limit must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CampusHubError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CampusHubError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    let valid_formats = ["pretty", "json"];
    if !valid_formats.contains(&config.format.as_str()) {
        return Err(CampusHubError::Config(
            format!("Invalid log format: {}. Valid formats: {:?}", config.format, valid_formats)
        ));
    }

    if let Some(ref path) = config.file_path {
        if path.is_empty() {
            return Err(CampusHubError::Config(
                "Log file path cannot be empty when set".to_string()
            ));
        }
    }

    Ok(())
}
