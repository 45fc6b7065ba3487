//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-memory).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{ChatMember, Message, NewMessage, NewUser, User, UserPatch};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Create a new user, returning the id assigned by the store
    async fn create(&self, user: &NewUser) -> RepoResult<i64>;

    /// Apply a partial update and stamp `updated_at`
    ///
    /// Fails with `UserNotFound` when no row was affected.
    async fn update(&self, id: i64, patch: &UserPatch, updated_at: DateTime<Utc>)
        -> RepoResult<()>;

    /// Delete a user, failing with `UserNotFound` when no row was affected
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Chat Repository
// ============================================================================

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Create a new chat, returning the id assigned by the store
    async fn create(&self, name: &str) -> RepoResult<i64>;

    /// Delete a chat, failing with `ChatNotFound` when no row was affected
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Add a user to a chat; an existing membership is left as is
    async fn add(&self, member: ChatMember) -> RepoResult<()>;

    /// List the user ids that belong to a chat
    async fn find_user_ids(&self, chat_id: i64) -> RepoResult<Vec<i64>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Store a message; a conflicting duplicate is absorbed
    async fn create(&self, message: &NewMessage) -> RepoResult<()>;

    /// List all messages of a chat, oldest first (ties broken by id)
    async fn find_by_chat(&self, chat_id: i64) -> RepoResult<Vec<Message>>;
}
