//! User service
//!
//! Handles the user directory: lookup, registration, profile edits and removal.

use chat_core::entities::{NewUser, User, UserPatch, UserRole};
use chat_core::DomainError;
use chrono::Utc;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))
    }

    /// Register a user and return the id assigned by the store
    ///
    /// `role` is the raw wire value; unknown values are rejected before any I/O.
    /// Email uniqueness is left to the store.
    #[instrument(skip(self, email))]
    pub async fn create(&self, name: String, email: String, role: i32) -> ServiceResult<i64> {
        let role = UserRole::from_i32(role).ok_or(DomainError::InvalidRole(role))?;

        let id = self
            .ctx
            .user_repo()
            .create(&NewUser { name, email, role })
            .await?;

        info!(user_id = id, %role, "User created");
        Ok(id)
    }

    /// Apply a partial update; `updated_at` is stamped even when the patch is empty
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: UserPatch) -> ServiceResult<()> {
        self.ctx.user_repo().update(id, &patch, Utc::now()).await?;
        info!(user_id = id, touch_only = patch.is_empty(), "User updated");
        Ok(())
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.user_repo().delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }
}
