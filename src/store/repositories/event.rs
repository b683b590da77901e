//! Event repository implementation

use chrono::{DateTime, Utc};
use crate::models::{CreateEventRequest, Event, EventFilter, UpdateEventRequest};
use crate::store::memory::{next_id, MemoryStore, OpClass};
use crate::utils::errors::{CampusHubError, Result};

#[derive(Debug, Clone)]
pub struct EventRepository {
    store: MemoryStore,
}

impl EventRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Create a new event
    pub async fn create(&self, request: CreateEventRequest, created_by: i64) -> Result<Event> {
        self.store.simulate_latency(OpClass::Write).await;
        let mut tables = self.store.write().await;
        let event = Event {
            id: next_id(&tables.events, |e| e.id),
            title: request.title,
            description: request.description,
            event_date: request.event_date,
            location: request.location,
            category: request.category,
            created_by,
            created_at: Utc::now(),
        };
        tables.events.push(event.clone());
        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables.events.iter().find(|e| e.id == id).cloned())
    }

    /// Update event, keeping current values for absent fields
    pub async fn update(&self, id: i64, request: UpdateEventRequest) -> Result<Event> {
        self.store.simulate_latency(OpClass::Write).await;
        let mut tables = self.store.write().await;
        let event = tables
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(CampusHubError::EventNotFound { event_id: id })?;

        if let Some(title) = request.title {
            event.title = title;
        }
        if let Some(description) = request.description {
            event.description = description;
        }
        if let Some(event_date) = request.event_date {
            event.event_date = event_date;
        }
        if let Some(location) = request.location {
            event.location = location;
        }
        if let Some(category) = request.category {
            event.category = category;
        }

        Ok(event.clone())
    }

    /// Delete event and cascade its registrations
    ///
    /// Both removals happen under a single write guard. Returns the number of
    /// registrations removed by the cascade.
    pub async fn delete(&self, id: i64) -> Result<u64> {
        self.store.simulate_latency(OpClass::Write).await;
        let mut tables = self.store.write().await;
        let position = tables
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(CampusHubError::EventNotFound { event_id: id })?;
        tables.events.remove(position);

        let before = tables.registrations.len();
        tables.registrations.retain(|r| r.event_id != id);
        Ok((before - tables.registrations.len()) as u64)
    }

    /// List all events in table order
    pub async fn list(&self) -> Result<Vec<Event>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables.events.clone())
    }

    /// Search events by title substring (case-insensitive) and category
    pub async fn search(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        let query = filter.title_query.as_ref().map(|q| q.to_lowercase());
        Ok(tables
            .events
            .iter()
            .filter(|e| match &query {
                Some(q) => e.title.to_lowercase().contains(q.as_str()),
                None => true,
            })
            .filter(|e| match filter.category {
                Some(category) => e.category == category,
                None => true,
            })
            .cloned()
            .collect())
    }

    /// Get upcoming events ordered by date
    pub async fn upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Event>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        let mut events: Vec<Event> = tables
            .events
            .iter()
            .filter(|e| e.event_date > now)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.event_date);
        Ok(events)
    }

    /// Count total events
    pub async fn count(&self) -> Result<i64> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables.events.len() as i64)
    }
}
