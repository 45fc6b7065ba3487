//! gRPC handlers
//!
//! Each handler owns a `ServiceContext` clone and builds the matching service
//! per call.

pub mod chat;
pub mod user;

pub use chat::ChatHandler;
pub use user::UserHandler;
