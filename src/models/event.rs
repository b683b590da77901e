//! Event model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub category: EventCategory,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Workshop,
    Fest,
    Seminar,
    TechTalk,
    Hackathon,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Workshop,
        EventCategory::Fest,
        EventCategory::Seminar,
        EventCategory::TechTalk,
        EventCategory::Hackathon,
    ];

    /// Human-readable category label
    pub fn display_name(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "Workshop",
            EventCategory::Fest => "Fest",
            EventCategory::Seminar => "Seminar",
            EventCategory::TechTalk => "Tech Talk",
            EventCategory::Hackathon => "Hackathon",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub category: EventCategory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub category: Option<EventCategory>,
}

/// Search criteria for event listings
///
/// `title_query` matches case-insensitively on a title substring; `category`
/// matches exactly. Empty filter returns every event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFilter {
    pub title_query: Option<String>,
    pub category: Option<EventCategory>,
}
