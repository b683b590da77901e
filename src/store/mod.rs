//! In-memory store module
//!
//! This module holds the flat tables and data access operations

pub mod memory;
pub mod repositories;
pub mod service;

// Re-export commonly used store components
pub use memory::{MemoryStore, Tables, LatencyConfig, OpClass};
pub use repositories::{UserRepository, EventRepository, RegistrationRepository};
pub use service::{StoreService, TableCounts, IntegrityReport};
