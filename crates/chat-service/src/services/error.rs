//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use chat_core::DomainError;
use std::fmt;

/// Canonical gRPC status codes the services can produce
pub mod grpc_code {
    pub const INVALID_ARGUMENT: i32 = 3;
    pub const NOT_FOUND: i32 = 5;
    pub const INTERNAL: i32 = 13;
}

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Error raised by the domain or a repository
    Domain(DomainError),

    /// Resource not found
    NotFound { resource: &'static str, id: i64 },

    /// Validation error
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the gRPC status code for this error
    pub fn grpc_code(&self) -> i32 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    grpc_code::NOT_FOUND
                } else if e.is_validation() {
                    grpc_code::INVALID_ARGUMENT
                } else {
                    grpc_code::INTERNAL
                }
            }
            Self::NotFound { .. } => grpc_code::NOT_FOUND,
            Self::Validation(_) => grpc_code::INVALID_ARGUMENT,
        }
    }

    /// Get the error code for logs
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Check if the error text must not reach clients
    pub fn is_internal(&self) -> bool {
        self.grpc_code() == grpc_code::INTERNAL
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
