//! # chat-service
//!
//! Application layer: the user directory and chat use cases, independent of
//! the RPC transport and of the storage backend behind the repository traits.

pub mod services;

pub use services::{ChatService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService};
