//! In-memory repositories
//!
//! Implement the same repository traits as the PostgreSQL repositories and
//! mimic the constraints of `schema.sql`: generated ids, unique emails,
//! foreign keys to `chat` and cascading chat deletes. Member and sender ids
//! are plain values, as in the schema, so the user and chat stores stay
//! independent. Used by tests and local runs without a database.

mod chat;
mod user;

pub use chat::InMemoryChatRepository;
pub use user::InMemoryUserRepository;
