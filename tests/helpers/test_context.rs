//! Test context for unified test setup
//!
//! Builds the full service stack over a zero-latency store, optionally
//! loaded with the demo dataset, so tests drive the same wiring the library
//! exposes to applications.

use chrono::{DateTime, TimeZone, Utc};
use CampusHub::config::Settings;
use CampusHub::seed;
use CampusHub::services::ServiceFactory;
use CampusHub::state::Session;

use super::test_data::{demo_admin_id, demo_student_id};

/// Unified test context that manages the service stack under test
pub struct TestContext {
    pub factory: ServiceFactory,
    pub settings: Settings,
    pub anchor: DateTime<Utc>,
}

/// Configuration for test context setup
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub simulate_latency: bool,
    pub load_demo_data: bool,
    pub top_students_limit: Option<usize>,
    pub anchor: Option<DateTime<Utc>>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            simulate_latency: false,
            load_demo_data: true,
            top_students_limit: None,
            anchor: None,
        }
    }
}

impl TestContext {
    /// Create a test context with default configuration
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::new_with_config(TestConfig::default()).await
    }

    /// Create a test context with custom configuration
    pub async fn new_with_config(
        config: TestConfig,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut settings = Settings::default();
        settings.api.simulate_latency = config.simulate_latency;
        settings.logging.level = "debug".to_string();
        if let Some(limit) = config.top_students_limit {
            settings.reports.top_students_limit = limit;
        }

        let anchor = config.anchor.unwrap_or_else(default_anchor);
        let factory = ServiceFactory::new(settings.clone())?;

        if config.load_demo_data {
            seed::seed_demo(&factory.store, anchor).await?;
        }

        Ok(Self {
            factory,
            settings,
            anchor,
        })
    }

    /// Log in as the demo head admin (Sarah Williams)
    pub async fn admin_session(&self) -> Session {
        self.factory
            .sessions
            .login(demo_admin_id())
            .await
            .expect("demo admin should exist")
    }

    /// Log in as the demo student with the most check-ins (Alex Chen)
    pub async fn student_session(&self) -> Session {
        self.factory
            .sessions
            .login(demo_student_id())
            .await
            .expect("demo student should exist")
    }

    /// Log in as an arbitrary user
    pub async fn login(&self, user_id: i64) -> CampusHub::Result<Session> {
        self.factory.sessions.login(user_id).await
    }
}

/// Fixed anchor used by default so date assertions stay deterministic
pub fn default_anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_context_creation_loads_demo_data() {
        let ctx = TestContext::new().await.expect("Failed to create test context");

        let counts = ctx.factory.store.table_counts().await.expect("counts");
        assert_eq!(counts.users, 12);
        assert_eq!(counts.events, 15);
        assert_eq!(counts.registrations, 40);

        let health = ctx.factory.health_check().await;
        assert!(health.is_healthy(), "issues: {:?}", health.get_issues());
    }

    #[tokio::test]
    async fn test_context_with_empty_store() {
        let config = TestConfig {
            load_demo_data: false,
            ..Default::default()
        };
        let ctx = TestContext::new_with_config(config)
            .await
            .expect("Failed to create test context");

        let counts = ctx.factory.store.table_counts().await.expect("counts");
        assert_eq!(counts.users, 0);
        assert_eq!(counts.events, 0);
        assert_eq!(counts.registrations, 0);
    }

    #[tokio::test]
    async fn test_context_sessions_have_expected_roles() {
        let ctx = TestContext::new().await.expect("Failed to create test context");

        let admin = ctx.admin_session().await;
        assert!(admin.is_admin());
        assert_eq!(admin.full_name, "Sarah Williams");

        let student = ctx.student_session().await;
        assert!(!student.is_admin());
        assert_eq!(student.full_name, "Alex Chen");
    }
}
