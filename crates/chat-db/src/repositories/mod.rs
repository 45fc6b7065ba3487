//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in chat-core.
//! Each repository handles database operations for a specific domain entity
//! and issues exactly one statement per call.

mod chat;
mod error;
mod member;
mod message;
mod user;

pub use chat::PgChatRepository;
pub use member::PgMemberRepository;
pub use message::PgMessageRepository;
pub use user::PgUserRepository;
