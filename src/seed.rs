//! Demo dataset
//!
//! A ready-made campus: 12 users (2 admins, 10 students), 15 events across
//! all five categories, and 40 registrations whose check-in pattern gives a
//! stable top-three leaderboard. Dates are offsets from a caller-supplied
//! anchor so past and upcoming events keep their meaning.

use chrono::{DateTime, Duration, Utc};
use crate::models::{Event, EventCategory, Registration, User, UserRole};
use crate::store::{StoreService, Tables};
use crate::utils::errors::Result;

fn user(id: i64, full_name: &str, role: UserRole, anchor: DateTime<Utc>) -> User {
    let email = format!(
        "{}@campus.edu",
        full_name.to_lowercase().replace(' ', ".")
    );
    User {
        id,
        full_name: full_name.to_string(),
        email,
        role,
        created_at: anchor - Duration::days(180) + Duration::days(id * 3),
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: i64,
    title: &str,
    description: &str,
    category: EventCategory,
    location: &str,
    created_by: i64,
    anchor: DateTime<Utc>,
    offset_days: i64,
) -> Event {
    Event {
        id,
        title: title.to_string(),
        description: description.to_string(),
        event_date: anchor + Duration::days(offset_days),
        location: location.to_string(),
        category,
        created_by,
        created_at: anchor - Duration::days(50) + Duration::days(id),
    }
}

/// Build the demo tables relative to the given anchor time
pub fn demo_dataset(anchor: DateTime<Utc>) -> Tables {
    let users = vec![
        user(1, "Sarah Williams", UserRole::Admin, anchor),
        user(2, "David Martinez", UserRole::Admin, anchor),
        user(3, "Alex Chen", UserRole::Student, anchor),
        user(4, "Emma Rodriguez", UserRole::Student, anchor),
        user(5, "Michael Johnson", UserRole::Student, anchor),
        user(6, "Sophia Lee", UserRole::Student, anchor),
        user(7, "James Wilson", UserRole::Student, anchor),
        user(8, "Olivia Brown", UserRole::Student, anchor),
        user(9, "Daniel Kim", UserRole::Student, anchor),
        user(10, "Ava Patel", UserRole::Student, anchor),
        user(11, "Ethan Garcia", UserRole::Student, anchor),
        user(12, "Mia Thompson", UserRole::Student, anchor),
    ];

    let events = vec![
        event(1, "Intro to Machine Learning", "Hands-on session covering the basics of supervised learning.", EventCategory::Workshop, "Engineering Lab 3", 1, anchor, -30),
        event(2, "Spring Culture Fest", "Food stalls, performances and club showcases on the main quad.", EventCategory::Fest, "Main Quad", 2, anchor, -25),
        event(3, "Career Paths in Research", "Faculty panel on graduate school and industry research roles.", EventCategory::Seminar, "Humanities Hall 201", 1, anchor, -21),
        event(4, "Cloud Infrastructure Tech Talk", "Guest engineers walk through a real production architecture.", EventCategory::TechTalk, "Auditorium B", 2, anchor, -14),
        event(5, "Campus Hack Night", "An evening sprint: build something small and demo it.", EventCategory::Hackathon, "Innovation Center", 1, anchor, -10),
        event(6, "Data Visualization Workshop", "From raw tables to clear charts, step by step.", EventCategory::Workshop, "Engineering Lab 1", 2, anchor, -7),
        event(7, "Entrepreneurship Seminar", "Alumni founders on taking a campus project to market.", EventCategory::Seminar, "Business School 105", 1, anchor, -5),
        event(8, "Autumn Music Fest", "Student bands and the university orchestra, outdoors.", EventCategory::Fest, "Amphitheater", 2, anchor, -2),
        event(9, "Robotics Workshop", "Assemble and program a line-following robot in teams.", EventCategory::Workshop, "Engineering Lab 2", 1, anchor, 3),
        event(10, "AI Ethics Tech Talk", "Practitioners discuss fairness and accountability in deployed models.", EventCategory::TechTalk, "Auditorium A", 2, anchor, 5),
        event(11, "Design Thinking Seminar", "A structured method for framing and solving open problems.", EventCategory::Seminar, "Design Studio", 1, anchor, 8),
        event(12, "Winter Arts Fest", "Galleries, film screenings and the annual crafts market.", EventCategory::Fest, "Arts Center", 2, anchor, 12),
        event(13, "Open Source Hackathon", "Two days contributing to established open source projects.", EventCategory::Hackathon, "Innovation Center", 1, anchor, 16),
        event(14, "Quantum Computing Tech Talk", "What current hardware can and cannot do, without the hype.", EventCategory::TechTalk, "Physics Lecture Hall", 2, anchor, 21),
        event(15, "Game Dev Hackathon", "Build a playable game in 48 hours; engines provided.", EventCategory::Hackathon, "Innovation Center", 1, anchor, 28),
    ];

    // (student_id, event_id, checked_in) per registration; row order doubles
    // as registration time order. Check-in totals: Alex Chen 7, Emma
    // Rodriguez 6, Michael Johnson 5, the rest 0-2.
    let rows: [(i64, i64, bool); 40] = [
        (3, 1, true),
        (3, 2, true),
        (3, 3, true),
        (3, 4, true),
        (3, 5, true),
        (3, 6, true),
        (3, 7, true),
        (3, 9, false),
        (4, 1, true),
        (4, 2, true),
        (4, 3, true),
        (4, 4, true),
        (4, 5, true),
        (4, 6, true),
        (4, 10, false),
        (5, 1, true),
        (5, 2, true),
        (5, 3, true),
        (5, 4, true),
        (5, 5, true),
        (5, 8, false),
        (5, 13, false),
        (6, 1, true),
        (6, 2, false),
        (6, 6, true),
        (6, 9, false),
        (7, 3, true),
        (7, 4, true),
        (7, 10, false),
        (7, 15, false),
        (8, 5, true),
        (8, 12, false),
        (9, 6, true),
        (9, 13, false),
        (10, 7, true),
        (10, 14, false),
        (11, 8, true),
        (11, 15, false),
        (12, 9, false),
        (12, 12, false),
    ];

    let registrations = rows
        .iter()
        .enumerate()
        .map(|(index, &(student_id, event_id, checked_in))| {
            let id = index as i64 + 1;
            Registration {
                id,
                student_id,
                event_id,
                registered_at: anchor - Duration::days(40) + Duration::days(id),
                checked_in,
            }
        })
        .collect();

    Tables {
        users,
        events,
        registrations,
    }
}

/// Load the demo dataset into a store
pub async fn seed_demo(store: &StoreService, anchor: DateTime<Utc>) -> Result<()> {
    store.load_dataset(demo_dataset(anchor)).await
}
