//! Session management
//!
//! This module tracks who is operating the system and gates role-restricted
//! operations. A session is a plain lookup result; there is no authentication
//! behind it.

use tracing::{debug, warn};
use crate::models::{User, UserRole};
use crate::store::UserRepository;
use crate::utils::errors::{CampusHubError, Result};
use crate::utils::logging::log_user_action;

/// An active user's session
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub full_name: String,
    pub role: UserRole,
}

impl Session {
    /// Build a session directly from a user row
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            full_name: user.full_name.clone(),
            role: user.role,
        }
    }

    /// Check if the session belongs to an admin
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Check that the session is authorized for admin operations
    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin() {
            debug!(user_id = self.user_id, "Admin authorization successful");
            Ok(())
        } else {
            warn!(user_id = self.user_id, "Unauthorized admin access attempt");
            Err(CampusHubError::PermissionDenied(
                "Admin privileges required".to_string()
            ))
        }
    }

    /// Check that the session is authorized for student operations
    pub fn require_student(&self) -> Result<()> {
        if self.role == UserRole::Student {
            debug!(user_id = self.user_id, "Student authorization successful");
            Ok(())
        } else {
            warn!(user_id = self.user_id, "Student-only operation attempted by non-student");
            Err(CampusHubError::PermissionDenied(
                "Student account required".to_string()
            ))
        }
    }
}

/// Opens sessions by looking users up in the store
#[derive(Debug, Clone)]
pub struct SessionManager {
    users: UserRepository,
}

impl SessionManager {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Open a session for an existing user
    pub async fn login(&self, user_id: i64) -> Result<Session> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(CampusHubError::UserNotFound { user_id })?;
        log_user_action(user.id, "login", Some(&user.role.to_string()));
        Ok(Session::for_user(&user))
    }
}
