//! Registration repository implementation

use chrono::Utc;
use crate::models::Registration;
use crate::store::memory::{next_id, MemoryStore, OpClass};
use crate::utils::errors::{CampusHubError, Result};

#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    store: MemoryStore,
}

impl RegistrationRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Create a registration, not yet checked in
    ///
    /// Uniqueness of the (student, event) pair is enforced one level up; the
    /// table itself accepts duplicates.
    pub async fn create(&self, student_id: i64, event_id: i64) -> Result<Registration> {
        self.store.simulate_latency(OpClass::Registration).await;
        let mut tables = self.store.write().await;
        let registration = Registration {
            id: next_id(&tables.registrations, |r| r.id),
            student_id,
            event_id,
            registered_at: Utc::now(),
            checked_in: false,
        };
        tables.registrations.push(registration.clone());
        Ok(registration)
    }

    /// Find registration by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Registration>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables.registrations.iter().find(|r| r.id == id).cloned())
    }

    /// Find a student's registration for an event
    pub async fn find_by_student_and_event(
        &self,
        student_id: i64,
        event_id: i64,
    ) -> Result<Option<Registration>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables
            .registrations
            .iter()
            .find(|r| r.student_id == student_id && r.event_id == event_id)
            .cloned())
    }

    /// Remove a student's registration for an event, returning the removed row
    pub async fn delete_by_student_and_event(
        &self,
        student_id: i64,
        event_id: i64,
    ) -> Result<Option<Registration>> {
        self.store.simulate_latency(OpClass::Registration).await;
        let mut tables = self.store.write().await;
        let position = tables
            .registrations
            .iter()
            .position(|r| r.student_id == student_id && r.event_id == event_id);
        Ok(position.map(|p| tables.registrations.remove(p)))
    }

    /// Set the check-in flag on a registration
    pub async fn set_checked_in(&self, id: i64, checked_in: bool) -> Result<Registration> {
        self.store.simulate_latency(OpClass::Registration).await;
        let mut tables = self.store.write().await;
        let registration = tables
            .registrations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CampusHubError::RegistrationNotFound { registration_id: id })?;
        registration.checked_in = checked_in;
        Ok(registration.clone())
    }

    /// List all registrations in table order
    pub async fn list(&self) -> Result<Vec<Registration>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables.registrations.clone())
    }

    /// List registrations for an event, earliest first
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<Registration>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        let mut registrations: Vec<Registration> = tables
            .registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect();
        registrations.sort_by_key(|r| r.registered_at);
        Ok(registrations)
    }

    /// List a student's registrations in table order
    pub async fn list_for_student(&self, student_id: i64) -> Result<Vec<Registration>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables
            .registrations
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect())
    }

    /// Check if a student is registered for an event
    pub async fn is_registered(&self, student_id: i64, event_id: i64) -> Result<bool> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables
            .registrations
            .iter()
            .any(|r| r.student_id == student_id && r.event_id == event_id))
    }

    /// Count total registrations
    pub async fn count(&self) -> Result<i64> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables.registrations.len() as i64)
    }

    /// Count registrations for an event
    pub async fn count_for_event(&self, event_id: i64) -> Result<i64> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables
            .registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .count() as i64)
    }
}
