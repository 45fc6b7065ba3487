//! # chat-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Parameterized statement builder (`query`)
//! - Row models decoded positionally (`models`)
//! - Model ↔ entity mappers (`mappers`)
//! - PostgreSQL repositories and connection pool (`repositories`, `pool`)
//! - In-memory repositories with the same constraints (`memory`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_db::pool::{create_pool, DatabaseConfig};
//! use chat_db::repositories::PgUserRepository;
//! use chat_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     let user = user_repo.find_by_id(1).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod query;
pub mod repositories;

/// DDL for the tables the repositories expect
pub const SCHEMA: &str = include_str!("../schema.sql");

// Re-export commonly used types
pub use memory::{InMemoryChatRepository, InMemoryUserRepository};
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgChatRepository, PgMemberRepository, PgMessageRepository, PgUserRepository,
};
