//! Event service implementation
//!
//! This service handles the administrator side of event management: creating,
//! editing and deleting events, plus the search used by the event listing.

use tracing::{debug, warn};
use crate::models::{CreateEventRequest, Event, EventFilter, UpdateEventRequest};
use crate::state::Session;
use crate::store::EventRepository;
use crate::utils::errors::{CampusHubError, Result};
use crate::utils::helpers::normalize_whitespace;
use crate::utils::logging::log_event_action;

/// Event service for managing the events table
#[derive(Clone)]
pub struct EventService {
    event_repository: EventRepository,
}

impl EventService {
    /// Create a new EventService instance
    pub fn new(event_repository: EventRepository) -> Self {
        Self { event_repository }
    }

    /// Create a new event on behalf of an admin
    pub async fn create_event(&self, session: &Session, request: CreateEventRequest) -> Result<Event> {
        debug!(user_id = session.user_id, title = %request.title, "Creating event");
        session.require_admin()?;

        let request = Self::validate_create_request(request)?;
        let event = self.event_repository.create(request, session.user_id).await?;
        log_event_action(event.id, "created", session.user_id, Some(&event.title));

        Ok(event)
    }

    /// Update an existing event, leaving absent fields untouched
    pub async fn update_event(
        &self,
        session: &Session,
        event_id: i64,
        request: UpdateEventRequest,
    ) -> Result<Event> {
        debug!(event_id = event_id, user_id = session.user_id, "Updating event");
        session.require_admin()?;

        let request = Self::validate_update_request(request)?;
        let event = self.event_repository.update(event_id, request).await?;
        log_event_action(event.id, "updated", session.user_id, None);

        Ok(event)
    }

    /// Delete an event and its registrations, returning the cascade count
    pub async fn delete_event(&self, session: &Session, event_id: i64) -> Result<u64> {
        debug!(event_id = event_id, user_id = session.user_id, "Deleting event");
        session.require_admin()?;

        let removed = self.event_repository.delete(event_id).await?;
        log_event_action(
            event_id,
            "deleted",
            session.user_id,
            Some(&format!("cascaded {} registrations", removed)),
        );

        Ok(removed)
    }

    /// Get event by ID
    pub async fn get_event(&self, event_id: i64) -> Result<Event> {
        debug!(event_id = event_id, "Getting event");
        self.event_repository
            .find_by_id(event_id)
            .await?
            .ok_or(CampusHubError::EventNotFound { event_id })
    }

    /// List all events in table order
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        debug!("Listing events");
        self.event_repository.list().await
    }

    /// Search events by title substring and category
    pub async fn search_events(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        debug!(
            title_query = ?filter.title_query,
            category = ?filter.category,
            "Searching events"
        );
        self.event_repository.search(filter).await
    }

    /// Normalize and validate a create request
    fn validate_create_request(mut request: CreateEventRequest) -> Result<CreateEventRequest> {
        request.title = normalize_whitespace(&request.title);
        request.description = normalize_whitespace(&request.description);
        request.location = normalize_whitespace(&request.location);

        if request.title.is_empty() || request.description.is_empty() || request.location.is_empty() {
            warn!("Rejected event with blank required fields");
            return Err(CampusHubError::InvalidInput(
                "Title, description and location are required".to_string(),
            ));
        }

        Ok(request)
    }

    /// Normalize and validate an update request: provided fields must not be blank
    fn validate_update_request(mut request: UpdateEventRequest) -> Result<UpdateEventRequest> {
        for field in [&mut request.title, &mut request.description, &mut request.location] {
            if let Some(value) = field {
                let normalized = normalize_whitespace(value);
                if normalized.is_empty() {
                    warn!("Rejected event update with blank field");
                    return Err(CampusHubError::InvalidInput(
                        "Updated fields cannot be blank".to_string(),
                    ));
                }
                *value = normalized;
            }
        }

        Ok(request)
    }
}
