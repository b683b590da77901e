//! Error handling for CampusHub
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for CampusHub application
#[derive(Error, Debug)]
pub enum CampusHubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Registration not found: {registration_id}")]
    RegistrationNotFound { registration_id: i64 },

    #[error("Student {student_id} is already registered for event {event_id}")]
    AlreadyRegistered { student_id: i64, event_id: i64 },

    #[error("Student {student_id} is not registered for event {event_id}")]
    NotRegistered { student_id: i64, event_id: i64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for CampusHub operations
pub type Result<T> = std::result::Result<T, CampusHubError>;

impl CampusHubError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            CampusHubError::Config(_) => false,
            CampusHubError::PermissionDenied(_) => false,
            CampusHubError::UserNotFound { .. } => false,
            CampusHubError::EventNotFound { .. } => false,
            CampusHubError::RegistrationNotFound { .. } => false,
            CampusHubError::AlreadyRegistered { .. } => true,
            CampusHubError::NotRegistered { .. } => false,
            CampusHubError::Serialization(_) => false,
            CampusHubError::Io(_) => true,
            CampusHubError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CampusHubError::Config(_) => ErrorSeverity::Critical,
            CampusHubError::PermissionDenied(_) => ErrorSeverity::Warning,
            CampusHubError::AlreadyRegistered { .. } => ErrorSeverity::Warning,
            CampusHubError::NotRegistered { .. } => ErrorSeverity::Warning,
            CampusHubError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
