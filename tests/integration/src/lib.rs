//! Integration test utilities for the user and chat servers
//!
//! This crate provides helpers for running end-to-end tests against both
//! gRPC services over real TCP connections.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
