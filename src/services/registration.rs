//! Registration service implementation
//!
//! This service handles the registration lifecycle: students registering for
//! and leaving events, admins checking attendees in, and the roster and
//! my-events views built from the registrations table.

use serde::Serialize;
use tracing::{debug, warn};
use crate::models::{Event, Registration, User};
use crate::state::Session;
use crate::store::StoreService;
use crate::utils::errors::{CampusHubError, Result};
use crate::utils::logging::log_registration_action;

/// A registration joined with its student record
///
/// The student is optional: a registration can outlive its user row in
/// externally loaded datasets, and the roster still renders.
#[derive(Debug, Clone, Serialize)]
pub struct Attendee {
    pub registration: Registration,
    pub student: Option<User>,
}

impl Attendee {
    /// Student name, with the placeholder used for missing rows
    pub fn student_name(&self) -> &str {
        self.student
            .as_ref()
            .map(|u| u.full_name.as_str())
            .unwrap_or("Unknown")
    }
}

/// Registration service for managing event attendance
#[derive(Clone)]
pub struct RegistrationService {
    store: StoreService,
}

impl RegistrationService {
    /// Create a new RegistrationService instance
    pub fn new(store: StoreService) -> Self {
        Self { store }
    }

    /// Register the session's student for an event
    pub async fn register(&self, session: &Session, event_id: i64) -> Result<Registration> {
        debug!(user_id = session.user_id, event_id = event_id, "Registering for event");
        session.require_student()?;

        // Check if the student is already registered
        if self.store.registrations.is_registered(session.user_id, event_id).await? {
            warn!(user_id = session.user_id, event_id = event_id, "Duplicate registration attempt");
            return Err(CampusHubError::AlreadyRegistered {
                student_id: session.user_id,
                event_id,
            });
        }

        // Check that the event exists
        if self.store.events.find_by_id(event_id).await?.is_none() {
            return Err(CampusHubError::EventNotFound { event_id });
        }

        let registration = self.store.registrations.create(session.user_id, event_id).await?;
        log_registration_action(
            registration.id,
            registration.student_id,
            registration.event_id,
            "registered",
        );

        Ok(registration)
    }

    /// Remove the session's registration for an event
    pub async fn unregister(&self, session: &Session, event_id: i64) -> Result<()> {
        debug!(user_id = session.user_id, event_id = event_id, "Unregistering from event");
        session.require_student()?;

        let removed = self
            .store
            .registrations
            .delete_by_student_and_event(session.user_id, event_id)
            .await?;

        match removed {
            Some(registration) => {
                log_registration_action(
                    registration.id,
                    registration.student_id,
                    registration.event_id,
                    "unregistered",
                );
                Ok(())
            }
            None => {
                warn!(user_id = session.user_id, event_id = event_id, "No registration to remove");
                Err(CampusHubError::NotRegistered {
                    student_id: session.user_id,
                    event_id,
                })
            }
        }
    }

    /// Mark a registration as checked in
    ///
    /// Checking in an already checked-in registration succeeds and leaves it
    /// checked in.
    pub async fn check_in(&self, session: &Session, registration_id: i64) -> Result<Registration> {
        debug!(
            registration_id = registration_id,
            user_id = session.user_id,
            "Checking in registration"
        );
        session.require_admin()?;

        let registration = self.store.registrations.set_checked_in(registration_id, true).await?;
        log_registration_action(
            registration.id,
            registration.student_id,
            registration.event_id,
            "checked_in",
        );

        Ok(registration)
    }

    /// Build the roster for an event: registrations joined with student rows
    pub async fn event_roster(&self, event_id: i64) -> Result<Vec<Attendee>> {
        debug!(event_id = event_id, "Building event roster");

        if self.store.events.find_by_id(event_id).await?.is_none() {
            return Err(CampusHubError::EventNotFound { event_id });
        }

        let registrations = self.store.registrations.list_for_event(event_id).await?;
        let users = self.store.users.list().await?;

        Ok(registrations
            .into_iter()
            .map(|registration| {
                let student = users.iter().find(|u| u.id == registration.student_id).cloned();
                Attendee { registration, student }
            })
            .collect())
    }

    /// List the events the session's student is registered for, in table order
    pub async fn my_events(&self, session: &Session) -> Result<Vec<Event>> {
        debug!(user_id = session.user_id, "Listing registered events");
        session.require_student()?;

        let registrations = self.store.registrations.list_for_student(session.user_id).await?;
        let events = self.store.events.list().await?;

        Ok(events
            .into_iter()
            .filter(|e| registrations.iter().any(|r| r.event_id == e.id))
            .collect())
    }

    /// Check if a student is registered for an event
    pub async fn is_registered(&self, student_id: i64, event_id: i64) -> Result<bool> {
        self.store.registrations.is_registered(student_id, event_id).await
    }
}
