//! User repository implementation

use chrono::Utc;
use crate::models::{User, UserRole};
use crate::store::memory::{next_id, MemoryStore, OpClass};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct UserRepository {
    store: MemoryStore,
}

impl UserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Insert a new user, allocating the next ID
    pub async fn insert(&self, full_name: &str, email: &str, role: UserRole) -> Result<User> {
        self.store.simulate_latency(OpClass::Write).await;
        let mut tables = self.store.write().await;
        let user = User {
            id: next_id(&tables.users, |u| u.id),
            full_name: full_name.to_string(),
            email: email.to_string(),
            role,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    /// List all users in table order
    pub async fn list(&self) -> Result<Vec<User>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables.users.clone())
    }

    /// List users with the student role, in table order
    pub async fn list_students(&self) -> Result<Vec<User>> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables
            .users
            .iter()
            .filter(|u| u.role == UserRole::Student)
            .cloned()
            .collect())
    }

    /// Count total users
    pub async fn count(&self) -> Result<i64> {
        self.store.simulate_latency(OpClass::Read).await;
        let tables = self.store.read().await;
        Ok(tables.users.len() as i64)
    }
}
