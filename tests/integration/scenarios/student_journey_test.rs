//! Student journey integration tests
//!
//! These tests verify end-to-end student scenarios: browsing the catalog,
//! registering, unregistering, and the guards around each step.

use assert_matches::assert_matches;
use serial_test::serial;
use CampusHub::models::{EventCategory, EventFilter};
use CampusHub::CampusHubError;

use crate::helpers::EventRequestBuilder;
use crate::integration::setup_integration_test;

#[tokio::test]
#[serial]
async fn test_student_registers_and_sees_event() {
    let ctx = setup_integration_test().await.expect("Setup should succeed");
    let admin = ctx.admin_session().await;
    let student = ctx.student_session().await;

    let request = EventRequestBuilder::new("Distributed Systems Reading Group").build();
    let event = ctx
        .factory
        .event_service
        .create_event(&admin, request)
        .await
        .expect("Event creation should succeed");

    let registration = ctx
        .factory
        .registration_service
        .register(&student, event.id)
        .await
        .expect("Registration should succeed");

    // Demo data already holds 40 registrations
    assert_eq!(registration.id, 41);
    assert_eq!(registration.student_id, student.user_id);
    assert_eq!(registration.event_id, event.id);
    assert!(!registration.checked_in);

    let registered = ctx
        .factory
        .registration_service
        .is_registered(student.user_id, event.id)
        .await
        .expect("Lookup should succeed");
    assert!(registered);

    let my_events = ctx
        .factory
        .registration_service
        .my_events(&student)
        .await
        .expect("my_events should succeed");
    assert!(my_events.iter().any(|e| e.id == event.id));
}

#[tokio::test]
#[serial]
async fn test_duplicate_registration_is_rejected() {
    let ctx = setup_integration_test().await.expect("Setup should succeed");
    let student = ctx.student_session().await;

    // Alex is already registered for event 1 in the demo dataset
    let err = ctx
        .factory
        .registration_service
        .register(&student, 1)
        .await
        .expect_err("Duplicate registration must fail");

    assert_matches!(
        err,
        CampusHubError::AlreadyRegistered { student_id: 3, event_id: 1 }
    );
    assert!(err.is_recoverable());
    assert_eq!(
        err.to_string(),
        "Student 3 is already registered for event 1"
    );
}

#[tokio::test]
#[serial]
async fn test_unregister_and_reregister() {
    let ctx = setup_integration_test().await.expect("Setup should succeed");

    // Mia is registered for the Robotics Workshop (event 9) in the demo data
    let mia = ctx.login(12).await.expect("Mia should exist");

    ctx.factory
        .registration_service
        .unregister(&mia, 9)
        .await
        .expect("Unregister should succeed");

    let registered = ctx
        .factory
        .registration_service
        .is_registered(mia.user_id, 9)
        .await
        .expect("Lookup should succeed");
    assert!(!registered);

    let err = ctx
        .factory
        .registration_service
        .unregister(&mia, 9)
        .await
        .expect_err("Second unregister must fail");
    assert_matches!(
        err,
        CampusHubError::NotRegistered { student_id: 12, event_id: 9 }
    );

    let registration = ctx
        .factory
        .registration_service
        .register(&mia, 9)
        .await
        .expect("Re-registration should succeed");
    assert!(!registration.checked_in);
}

#[tokio::test]
#[serial]
async fn test_admins_cannot_register_or_unregister() {
    let ctx = setup_integration_test().await.expect("Setup should succeed");
    let admin = ctx.admin_session().await;

    let err = ctx
        .factory
        .registration_service
        .register(&admin, 9)
        .await
        .expect_err("Admins must not register");
    assert_matches!(err, CampusHubError::PermissionDenied(_));

    let err = ctx
        .factory
        .registration_service
        .unregister(&admin, 9)
        .await
        .expect_err("Admins must not unregister");
    assert_matches!(err, CampusHubError::PermissionDenied(_));
}

#[tokio::test]
#[serial]
async fn test_register_for_unknown_event_fails() {
    let ctx = setup_integration_test().await.expect("Setup should succeed");
    let student = ctx.student_session().await;

    let err = ctx
        .factory
        .registration_service
        .register(&student, 404)
        .await
        .expect_err("Unknown event must fail");

    assert_matches!(err, CampusHubError::EventNotFound { event_id: 404 });
}

#[tokio::test]
#[serial]
async fn test_my_events_follow_catalog_order() {
    let ctx = setup_integration_test().await.expect("Setup should succeed");
    let student = ctx.student_session().await;

    let my_events = ctx
        .factory
        .registration_service
        .my_events(&student)
        .await
        .expect("my_events should succeed");

    let ids: Vec<i64> = my_events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 9]);
}

#[tokio::test]
#[serial]
async fn test_browse_events_with_filters() {
    let ctx = setup_integration_test().await.expect("Setup should succeed");

    let all = ctx
        .factory
        .event_service
        .list_events()
        .await
        .expect("Listing should succeed");
    assert_eq!(all.len(), 15);

    let tech_talks = ctx
        .factory
        .event_service
        .search_events(&EventFilter {
            title_query: Some("tech".to_string()),
            category: None,
        })
        .await
        .expect("Search should succeed");
    assert_eq!(tech_talks.len(), 3);
    assert!(tech_talks
        .iter()
        .all(|e| e.title.to_lowercase().contains("tech")));

    let hackathons = ctx
        .factory
        .event_service
        .search_events(&EventFilter {
            title_query: None,
            category: Some(EventCategory::Hackathon),
        })
        .await
        .expect("Search should succeed");
    let ids: Vec<i64> = hackathons.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![5, 13, 15]);

    let open_source = ctx
        .factory
        .event_service
        .search_events(&EventFilter {
            title_query: Some("open".to_string()),
            category: Some(EventCategory::Hackathon),
        })
        .await
        .expect("Search should succeed");
    assert_eq!(open_source.len(), 1);
    assert_eq!(open_source[0].title, "Open Source Hackathon");
}
