//! # chat-rpc
//!
//! gRPC surface of the user and chat services, built with tonic.
//!
//! Each service runs in its own process (`user-server`, `chat-server`);
//! both are thin adapters over `chat-service`.

pub mod convert;
pub mod handlers;
pub mod server;
pub mod status;

/// Generated protobuf types, servers and clients
pub mod proto {
    pub mod user_v1 {
        tonic::include_proto!("user_v1");
    }

    pub mod chat_v1 {
        tonic::include_proto!("chat_v1");
    }

    /// Encoded descriptors of both packages, served through gRPC reflection
    pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("chat_descriptor");
}

pub use handlers::{ChatHandler, UserHandler};
pub use server::{
    create_service_context, run_chat_server, run_user_server, serve_chat, serve_user, ServerError,
};
pub use status::RpcError;
