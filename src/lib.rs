//! CampusHub Event Manager
//!
//! An in-memory campus event management library. It provides modular
//! components for event administration, student registration and check-in,
//! and reporting, backed by a latency-simulating store that behaves like a
//! remote API.

#![allow(non_snake_case)]

pub mod config;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CampusHubError, Result};

// Re-export main components for easy access
pub use seed::{demo_dataset, seed_demo};
pub use services::ServiceFactory;
pub use state::{Session, SessionManager};
pub use store::{MemoryStore, StoreService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
