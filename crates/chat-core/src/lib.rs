//! # chat-core
//!
//! Domain layer containing entities, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, RPC transport, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Chat, ChatMember, Message, NewMessage, NewUser, User, UserPatch, UserRole};
pub use error::DomainError;
pub use traits::{
    ChatRepository, MemberRepository, MessageRepository, RepoResult, UserRepository,
};
