//! Business logic services
//!
//! This module contains the service layer implementations that validate
//! requests and orchestrate repository calls.

pub mod chat;
pub mod context;
pub mod error;
pub mod user;

// Re-export all services for convenience
pub use chat::ChatService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
