//! In-memory store management
//!
//! The original backend is simulated with three flat tables behind a shared
//! handle. Operations await a configured delay per operation class to keep
//! the request/response timing of the real API.

use std::sync::Arc;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::config::ApiConfig;
use crate::models::{Event, Registration, User};

/// Flat table contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tables {
    pub users: Vec<User>,
    pub events: Vec<Event>,
    pub registrations: Vec<Registration>,
}

/// Operation classes, each mapped to its own simulated delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpClass {
    Read,
    Write,
    Registration,
    Report,
}

/// Simulated network latency per operation class
#[derive(Debug, Clone)]
pub struct LatencyConfig {
    pub read: Duration,
    pub write: Duration,
    pub registration: Duration,
    pub report: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            read: Duration::from_millis(300),
            write: Duration::from_millis(500),
            registration: Duration::from_millis(300),
            report: Duration::from_millis(400),
        }
    }
}

impl LatencyConfig {
    /// Disable all simulated delays
    pub fn none() -> Self {
        Self {
            read: Duration::ZERO,
            write: Duration::ZERO,
            registration: Duration::ZERO,
            report: Duration::ZERO,
        }
    }

    pub fn duration_for(&self, class: OpClass) -> Duration {
        match class {
            OpClass::Read => self.read,
            OpClass::Write => self.write,
            OpClass::Registration => self.registration,
            OpClass::Report => self.report,
        }
    }
}

impl From<&ApiConfig> for LatencyConfig {
    fn from(config: &ApiConfig) -> Self {
        if !config.simulate_latency {
            return Self::none();
        }
        Self {
            read: Duration::from_millis(config.read_delay_ms),
            write: Duration::from_millis(config.write_delay_ms),
            registration: Duration::from_millis(config.registration_delay_ms),
            report: Duration::from_millis(config.report_delay_ms),
        }
    }
}

/// Shared handle to the in-memory tables
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    latency: LatencyConfig,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new(latency: LatencyConfig) -> Self {
        tracing::debug!("In-memory store initialized");
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            latency,
        }
    }

    /// Create a store pre-populated with the given tables
    pub fn with_tables(tables: Tables, latency: LatencyConfig) -> Self {
        Self {
            tables: Arc::new(RwLock::new(tables)),
            latency,
        }
    }

    /// Await the simulated delay for an operation class
    pub(crate) async fn simulate_latency(&self, class: OpClass) {
        let delay = self.latency.duration_for(class);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}

/// Allocate the next ID for a table: one past the current maximum, 1 when empty
pub(crate) fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(id_of).max().unwrap_or(0) + 1
}
