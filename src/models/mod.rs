//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod event;
pub mod registration;

// Re-export commonly used models
pub use user::{User, UserRole};
pub use event::{Event, EventCategory, CreateEventRequest, UpdateEventRequest, EventFilter};
pub use registration::Registration;
