//! In-memory implementation of UserRepository

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::instrument;

use chat_core::entities::{NewUser, User, UserPatch};
use chat_core::error::DomainError;
use chat_core::traits::{RepoResult, UserRepository};

#[derive(Debug, Default)]
struct UserTable {
    last_id: i64,
    rows: BTreeMap<i64, User>,
}

/// In-memory implementation of UserRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<Mutex<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.table.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.table.lock().rows.get(&id).cloned())
    }

    #[instrument(skip(self, user))]
    async fn create(&self, user: &NewUser) -> RepoResult<i64> {
        let mut table = self.table.lock();

        if table.rows.values().any(|u| u.email == user.email) {
            return Err(DomainError::DatabaseError(
                "duplicate key value violates unique constraint \"user_email_key\"".to_string(),
            ));
        }

        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(
            id,
            User {
                id,
                name: user.name.clone(),
                email: user.email.clone(),
                role: user.role,
                created_at: Utc::now(),
                updated_at: None,
            },
        );

        Ok(id)
    }

    #[instrument(skip(self, patch))]
    async fn update(
        &self,
        id: i64,
        patch: &UserPatch,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let mut table = self.table.lock();
        let user = table
            .rows
            .get_mut(&id)
            .ok_or(DomainError::UserNotFound(id))?;

        patch.apply(user, updated_at);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.table
            .lock()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::UserNotFound(id))
    }
}
