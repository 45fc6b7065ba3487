//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Chat not found: {0}")]
    ChatNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid id: {0}")]
    InvalidId(i64),

    #[error("Unknown user role: {0}")]
    InvalidRole(i32),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Query build error: {0}")]
    QueryBuild(String),

    #[error("Row mapping error: {0}")]
    Mapping(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for logs and RPC error details
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChatNotFound(_) => "UNKNOWN_CHAT",

            // Validation
            Self::InvalidId(_) => "INVALID_ID",
            Self::InvalidRole(_) => "INVALID_ROLE",

            // Infrastructure
            Self::QueryBuild(_) => "QUERY_BUILD_ERROR",
            Self::Mapping(_) => "MAPPING_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ChatNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidId(_) | Self::InvalidRole(_))
    }

    /// Check if this error must stay opaque to clients
    pub fn is_internal(&self) -> bool {
        !self.is_not_found() && !self.is_validation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::UserNotFound(1).code(), "UNKNOWN_USER");
        assert_eq!(DomainError::ChatNotFound(1).code(), "UNKNOWN_CHAT");
        assert_eq!(DomainError::InvalidId(0).code(), "INVALID_ID");
        assert_eq!(
            DomainError::Mapping("bad column".to_string()).code(),
            "MAPPING_ERROR"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(1).is_not_found());
        assert!(DomainError::ChatNotFound(1).is_not_found());
        assert!(!DomainError::InvalidId(0).is_not_found());
    }

    #[test]
    fn test_is_internal() {
        assert!(DomainError::QueryBuild("empty".to_string()).is_internal());
        assert!(DomainError::Mapping("bad".to_string()).is_internal());
        assert!(DomainError::DatabaseError("down".to_string()).is_internal());
        assert!(!DomainError::InvalidRole(7).is_internal());
        assert!(!DomainError::UserNotFound(3).is_internal());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::UserNotFound(123);
        assert_eq!(err.to_string(), "User not found: 123");

        let err = DomainError::InvalidId(-4);
        assert_eq!(err.to_string(), "Invalid id: -4");
    }
}
