//! Error mapping from the service layer to gRPC statuses
//!
//! Not-found and validation failures keep their message. Every other failure
//! is logged here and reaches the client as a bare `INTERNAL`.

use chat_service::ServiceError;
use thiserror::Error;
use tonic::{Code, Status};
use tracing::error;

/// Message attached to every `INTERNAL` status
pub const INTERNAL_MESSAGE: &str = "internal server error";

/// RPC error type for consistent status responses
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("{0}")]
    Service(#[from] ServiceError),
}

impl RpcError {
    /// Get the gRPC status code for this error
    #[must_use]
    pub fn code(&self) -> Code {
        match self {
            Self::Service(e) => Code::from_i32(e.grpc_code()),
        }
    }

    /// Get the error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
        }
    }
}

impl From<RpcError> for Status {
    fn from(err: RpcError) -> Self {
        let code = err.code();

        if code == Code::Internal {
            error!(error = %err, code = err.error_code(), "RPC failed");
            return Status::internal(INTERNAL_MESSAGE);
        }

        Status::new(code, err.to_string())
    }
}
