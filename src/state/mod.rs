//! State management module
//!
//! This module handles user sessions and role gating

pub mod session;

// Re-export commonly used state components
pub use session::{Session, SessionManager};
