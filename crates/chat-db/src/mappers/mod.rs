//! Entity to model mappers
//!
//! This module provides conversions between domain entities (chat-core) and database models.
//! - `From<Model> for Entity` / `TryFrom<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Render entity data into parameterized statements

mod message;
mod user;

use chat_core::DomainError;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

pub use message::MessageInsert;
pub use user::{UserInsert, UserUpdate};

/// Decode a row into a model, reporting failures as mapping errors
pub fn decode_row<M>(row: &PgRow) -> Result<M, DomainError>
where
    M: for<'r> FromRow<'r, PgRow>,
{
    M::from_row(row).map_err(|e| DomainError::Mapping(e.to_string()))
}
