//! Store service layer
//!
//! This module provides a high-level interface to store operations

use std::collections::HashSet;
use serde::Serialize;
use tracing::info;
use crate::store::memory::{MemoryStore, OpClass, Tables};
use crate::store::repositories::{EventRepository, RegistrationRepository, UserRepository};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct StoreService {
    pub users: UserRepository,
    pub events: EventRepository,
    pub registrations: RegistrationRepository,
    store: MemoryStore,
}

/// Current table sizes
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableCounts {
    pub users: usize,
    pub events: usize,
    pub registrations: usize,
}

/// Referential integrity findings over the registrations table
///
/// Registrations referencing a missing user or event are orphaned; second and
/// later registrations for the same (student, event) pair are duplicates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrityReport {
    pub orphaned_registrations: Vec<i64>,
    pub duplicate_registrations: Vec<i64>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.orphaned_registrations.is_empty() && self.duplicate_registrations.is_empty()
    }
}

impl StoreService {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            events: EventRepository::new(store.clone()),
            registrations: RegistrationRepository::new(store.clone()),
            store,
        }
    }

    /// Replace table contents wholesale
    ///
    /// Loaded rows are taken as-is, preserving their IDs and timestamps; use
    /// [`StoreService::integrity_report`] to inspect external datasets.
    pub async fn load_dataset(&self, tables: Tables) -> Result<()> {
        let mut guard = self.store.write().await;
        *guard = tables;
        info!(
            users = guard.users.len(),
            events = guard.events.len(),
            registrations = guard.registrations.len(),
            "Dataset loaded"
        );
        Ok(())
    }

    /// Current table sizes
    pub async fn table_counts(&self) -> Result<TableCounts> {
        let tables = self.store.read().await;
        Ok(TableCounts {
            users: tables.users.len(),
            events: tables.events.len(),
            registrations: tables.registrations.len(),
        })
    }

    /// Scan the registrations table for integrity violations
    pub async fn integrity_report(&self) -> Result<IntegrityReport> {
        self.store.simulate_latency(OpClass::Report).await;
        let tables = self.store.read().await;

        let mut report = IntegrityReport::default();
        let mut seen_pairs = HashSet::new();
        for registration in &tables.registrations {
            let student_exists = tables.users.iter().any(|u| u.id == registration.student_id);
            let event_exists = tables.events.iter().any(|e| e.id == registration.event_id);
            if !student_exists || !event_exists {
                report.orphaned_registrations.push(registration.id);
            }
            if !seen_pairs.insert((registration.student_id, registration.event_id)) {
                report.duplicate_registrations.push(registration.id);
            }
        }

        Ok(report)
    }

    /// Export the full table contents as JSON
    pub async fn snapshot(&self) -> Result<serde_json::Value> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(serde_json::to_value(&*tables)?)
    }
}
