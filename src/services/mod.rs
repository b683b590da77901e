//! Services module
//!
//! This module contains business logic services

pub mod event;
pub mod registration;
pub mod reports;

// Re-export commonly used services
pub use event::EventService;
pub use registration::{Attendee, RegistrationService};
pub use reports::{ActivityEntry, DashboardSummary, EventStats, ReportService, TopStudent};

use crate::config::settings::Settings;
use crate::state::SessionManager;
use crate::store::{LatencyConfig, MemoryStore, StoreService, TableCounts};
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub store: StoreService,
    pub sessions: SessionManager,
    pub event_service: EventService,
    pub registration_service: RegistrationService,
    pub report_service: ReportService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let store = MemoryStore::new(LatencyConfig::from(&settings.api));
        Ok(Self::with_store(store, settings))
    }

    /// Build the service stack over an existing store handle
    pub fn with_store(store: MemoryStore, settings: Settings) -> Self {
        let store_service = StoreService::new(store.clone());
        let sessions = SessionManager::new(store_service.users.clone());
        let event_service = EventService::new(store_service.events.clone());
        let registration_service = RegistrationService::new(store_service.clone());
        let report_service = ReportService::new(store, settings);

        Self {
            store: store_service,
            sessions,
            event_service,
            registration_service,
            report_service,
        }
    }

    /// Health check for the service stack
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let table_counts = self.store.table_counts().await.ok();
        let integrity_clean = self
            .store
            .integrity_report()
            .await
            .map(|report| report.is_clean())
            .unwrap_or(false);

        ServiceHealthStatus {
            store_reachable: table_counts.is_some(),
            integrity_clean,
            table_counts,
        }
    }
}

/// Health status for the service stack
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub store_reachable: bool,
    pub integrity_clean: bool,
    pub table_counts: Option<TableCounts>,
}

impl ServiceHealthStatus {
    /// Check if all critical pieces are healthy
    pub fn is_healthy(&self) -> bool {
        self.store_reachable && self.integrity_clean
    }

    /// Get list of detected issues
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.store_reachable {
            issues.push("Store is unreachable".to_string());
        }
        if !self.integrity_clean {
            issues.push("Registrations table has integrity violations".to_string());
        }

        issues
    }
}
