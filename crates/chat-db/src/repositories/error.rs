//! Error handling utilities for repositories

use chat_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Decode failures are mapping errors; everything else is a store failure.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e {
        SqlxError::ColumnDecode { .. }
        | SqlxError::ColumnIndexOutOfBounds { .. }
        | SqlxError::ColumnNotFound(_)
        | SqlxError::Decode(_)
        | SqlxError::TypeNotFound { .. } => DomainError::Mapping(e.to_string()),
        _ => DomainError::DatabaseError(e.to_string()),
    }
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "chat not found" error
pub fn chat_not_found(id: i64) -> DomainError {
    DomainError::ChatNotFound(id)
}
