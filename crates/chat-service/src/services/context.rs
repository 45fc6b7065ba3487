//! Service context - dependency container for services
//!
//! Holds the repositories needed by services, behind their traits so the
//! same services run over PostgreSQL or over the in-memory store.

use std::sync::Arc;

use chat_core::traits::{ChatRepository, MemberRepository, MessageRepository, UserRepository};
use chat_db::{
    InMemoryChatRepository, InMemoryUserRepository, PgChatRepository, PgMemberRepository,
    PgMessageRepository, PgPool, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every clone shares the same repositories.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    chat_repo: Arc<dyn ChatRepository>,
    member_repo: Arc<dyn MemberRepository>,
    message_repo: Arc<dyn MessageRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        chat_repo: Arc<dyn ChatRepository>,
        member_repo: Arc<dyn MemberRepository>,
        message_repo: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            user_repo,
            chat_repo,
            member_repo,
            message_repo,
        }
    }

    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgChatRepository::new(pool.clone())),
            Arc::new(PgMemberRepository::new(pool.clone())),
            Arc::new(PgMessageRepository::new(pool)),
        )
    }

    /// Context backed by fresh in-memory repositories
    pub fn in_memory() -> Self {
        let chats = InMemoryChatRepository::new();
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(chats.clone()),
            Arc::new(chats.clone()),
            Arc::new(chats),
        )
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the chat repository
    pub fn chat_repo(&self) -> &dyn ChatRepository {
        self.chat_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    chat_repo: Option<Arc<dyn ChatRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn chat_repo(mut self, repo: Arc<dyn ChatRepository>) -> Self {
        self.chat_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.chat_repo
                .ok_or_else(|| ServiceError::validation("chat_repo is required"))?,
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
        ))
    }
}
