//! Report service implementation
//!
//! This service derives the analytics views from the raw tables: the
//! dashboard summary, per-event attendance stats, the top-students
//! leaderboard and the recent registration feed. Each derivation reads the
//! tables in one pass and costs one report-class delay, matching the original
//! API's one call per dataset.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use crate::config::settings::Settings;
use crate::models::{EventCategory, UserRole};
use crate::store::memory::{MemoryStore, OpClass};
use crate::utils::errors::Result;
use crate::utils::helpers::{format_percentage, format_timestamp};

/// Dashboard headline numbers
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardSummary {
    pub total_events: usize,
    pub total_registrations: usize,
    pub upcoming_events: usize,
}

/// Attendance numbers for one event
#[derive(Debug, Clone, Serialize)]
pub struct EventStats {
    pub event_id: i64,
    pub title: String,
    pub category: EventCategory,
    pub total_registrations: usize,
    pub checked_in: usize,
    pub check_in_rate: f64,
}

impl EventStats {
    /// Rate rendered with one decimal place, as the reports page shows it
    pub fn formatted_rate(&self) -> String {
        format_percentage(self.check_in_rate)
    }
}

/// Leaderboard entry: a student ranked by check-in count
#[derive(Debug, Clone, Serialize)]
pub struct TopStudent {
    pub rank: usize,
    pub student_id: i64,
    pub full_name: String,
    pub checked_in_count: usize,
}

/// Recent registration feed entry, joined with display names
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub registration_id: i64,
    pub student_name: String,
    pub event_title: String,
    pub registered_at: DateTime<Utc>,
    pub checked_in: bool,
}

impl std::fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} registered for {} on {}",
            self.student_name,
            self.event_title,
            format_timestamp(self.registered_at)
        )
    }
}

/// Report service deriving analytics from the tables
#[derive(Clone)]
pub struct ReportService {
    store: MemoryStore,
    settings: Settings,
}

impl ReportService {
    /// Create a new ReportService instance
    pub fn new(store: MemoryStore, settings: Settings) -> Self {
        Self { store, settings }
    }

    /// Dashboard headline numbers, relative to the current time
    pub async fn summary(&self) -> Result<DashboardSummary> {
        self.summary_at(Utc::now()).await
    }

    /// Dashboard headline numbers relative to the provided clock
    pub async fn summary_at(&self, now: DateTime<Utc>) -> Result<DashboardSummary> {
        debug!("Generating dashboard summary");
        self.store.simulate_latency(OpClass::Report).await;
        let tables = self.store.read().await;

        Ok(DashboardSummary {
            total_events: tables.events.len(),
            total_registrations: tables.registrations.len(),
            upcoming_events: tables.events.iter().filter(|e| e.event_date > now).count(),
        })
    }

    /// Attendance numbers per event, optionally restricted to one category
    pub async fn event_analytics(&self, category: Option<EventCategory>) -> Result<Vec<EventStats>> {
        debug!(category = ?category, "Generating event analytics");
        self.store.simulate_latency(OpClass::Report).await;
        let tables = self.store.read().await;

        Ok(tables
            .events
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .map(|event| {
                let total = tables
                    .registrations
                    .iter()
                    .filter(|r| r.event_id == event.id)
                    .count();
                let checked_in = tables
                    .registrations
                    .iter()
                    .filter(|r| r.event_id == event.id && r.checked_in)
                    .count();
                EventStats {
                    event_id: event.id,
                    title: event.title.clone(),
                    category: event.category,
                    total_registrations: total,
                    checked_in,
                    check_in_rate: check_in_rate(checked_in, total),
                }
            })
            .collect())
    }

    /// Top students by number of checked-in registrations
    ///
    /// Every student participates, including those with zero check-ins. The
    /// sort is stable and descending, so ties keep users-table order; ranks
    /// are assigned by final position.
    pub async fn top_students(&self) -> Result<Vec<TopStudent>> {
        debug!(
            limit = self.settings.reports.top_students_limit,
            "Generating top students leaderboard"
        );
        self.store.simulate_latency(OpClass::Report).await;
        let tables = self.store.read().await;

        let mut counts: Vec<(&crate::models::User, usize)> = tables
            .users
            .iter()
            .filter(|u| u.role == UserRole::Student)
            .map(|user| {
                let checked_in = tables
                    .registrations
                    .iter()
                    .filter(|r| r.student_id == user.id && r.checked_in)
                    .count();
                (user, checked_in)
            })
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(counts
            .into_iter()
            .take(self.settings.reports.top_students_limit)
            .enumerate()
            .map(|(index, (user, checked_in_count))| TopStudent {
                rank: index + 1,
                student_id: user.id,
                full_name: user.full_name.clone(),
                checked_in_count,
            })
            .collect())
    }

    /// Latest registrations, newest first, joined with display names
    ///
    /// Registrations pointing at deleted rows render with "Unknown" /
    /// "Unknown Event" placeholders rather than failing.
    pub async fn recent_activity(&self) -> Result<Vec<ActivityEntry>> {
        debug!(
            limit = self.settings.reports.recent_activity_limit,
            "Generating recent activity feed"
        );
        self.store.simulate_latency(OpClass::Report).await;
        let tables = self.store.read().await;

        let mut registrations: Vec<&crate::models::Registration> =
            tables.registrations.iter().collect();
        registrations.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));

        Ok(registrations
            .into_iter()
            .take(self.settings.reports.recent_activity_limit)
            .map(|registration| ActivityEntry {
                registration_id: registration.id,
                student_name: tables
                    .users
                    .iter()
                    .find(|u| u.id == registration.student_id)
                    .map(|u| u.full_name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                event_title: tables
                    .events
                    .iter()
                    .find(|e| e.id == registration.event_id)
                    .map(|e| e.title.clone())
                    .unwrap_or_else(|| "Unknown Event".to_string()),
                registered_at: registration.registered_at,
                checked_in: registration.checked_in,
            })
            .collect())
    }
}

/// Share of checked-in registrations as a percentage; 0.0 for empty events
fn check_in_rate(checked_in: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (checked_in as f64 / total as f64) * 100.0
    }
}
