//! Integration tests module
//!
//! This module contains all integration tests for the CampusHub library,
//! organized by journey and reporting surface.

pub mod reports;
pub mod scenarios;

use std::sync::Once;

use crate::helpers::{EventRequestBuilder, TestContext};

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Common setup function for integration tests
pub async fn setup_integration_test(
) -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    init_test_logging();
    TestContext::new().await
}

/// Drive a full event lifecycle: publish, register students, check some in
///
/// Returns the id of the created event.
pub async fn run_event_lifecycle(
    ctx: &TestContext,
    title: &str,
    student_ids: &[i64],
    check_in_count: usize,
) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
    let admin = ctx.admin_session().await;

    // Step 1: admin publishes the event
    let request = EventRequestBuilder::new(title).build();
    let event = ctx.factory.event_service.create_event(&admin, request).await?;

    // Step 2: each student registers
    let mut registration_ids = Vec::new();
    for &student_id in student_ids {
        let session = ctx.login(student_id).await?;
        let registration = ctx
            .factory
            .registration_service
            .register(&session, event.id)
            .await?;
        registration_ids.push(registration.id);
    }

    // Step 3: admin checks in the earliest registrations
    for &registration_id in registration_ids.iter().take(check_in_count) {
        ctx.factory
            .registration_service
            .check_in(&admin, registration_id)
            .await?;
    }

    Ok(event.id)
}

/// Assert the analytics row for an event matches the expected attendance
pub async fn verify_event_stats(
    ctx: &TestContext,
    event_id: i64,
    expected_total: usize,
    expected_checked: usize,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stats = ctx.factory.report_service.event_analytics(None).await?;
    let row = stats
        .iter()
        .find(|s| s.event_id == event_id)
        .ok_or("analytics row missing for event")?;

    assert_eq!(row.total_registrations, expected_total, "Total mismatch");
    assert_eq!(row.checked_in, expected_checked, "Check-in mismatch");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_lifecycle_helper_reaches_reports() {
        let ctx = setup_integration_test().await.expect("Setup should succeed");

        // Sophia, James and Olivia attend; two of them are checked in
        let event_id = run_event_lifecycle(&ctx, "Helper Smoke Event", &[6, 7, 8], 2)
            .await
            .expect("Lifecycle should succeed");

        verify_event_stats(&ctx, event_id, 3, 2)
            .await
            .expect("Stats verification should succeed");
    }
}
