//! Server setup and initialization
//!
//! Builds the service context and runs one tonic service per process.

use std::future::Future;
use std::time::Duration;

use chat_common::AppConfig;
use chat_db::{create_pool, DatabaseConfig};
use chat_service::ServiceContext;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::info;

use crate::handlers::{ChatHandler, UserHandler};
use crate::proto::chat_v1::chat_v1_server::ChatV1Server;
use crate::proto::user_v1::user_v1_server::UserV1Server;
use crate::proto::FILE_DESCRIPTOR_SET;

/// Fully qualified name of the user service
pub const USER_SERVICE_NAME: &str = "user_v1.UserV1";

/// Fully qualified name of the chat service
pub const CHAT_SERVICE_NAME: &str = "chat_v1.ChatV1";

/// Errors that stop a server from starting or running
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to connect to PostgreSQL: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Reflection error: {0}")]
    Reflection(#[from] tonic_reflection::server::Error),
}

/// Connect to PostgreSQL and build the service context
pub async fn create_service_context(config: &AppConfig) -> Result<ServiceContext, ServerError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
    info!("PostgreSQL connection established");

    Ok(ServiceContext::from_pool(pool))
}

/// Serve `user_v1.UserV1` on an already bound listener until `shutdown` resolves
pub async fn serve_user<F>(
    ctx: ServiceContext,
    listener: TcpListener,
    request_timeout: Duration,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send,
{
    Server::builder()
        .timeout(request_timeout)
        .add_service(UserV1Server::new(UserHandler::new(ctx)))
        .add_service(reflection_builder(USER_SERVICE_NAME).build_v1()?)
        .add_service(reflection_builder(USER_SERVICE_NAME).build_v1alpha()?)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;

    Ok(())
}

/// Serve `chat_v1.ChatV1` on an already bound listener until `shutdown` resolves
pub async fn serve_chat<F>(
    ctx: ServiceContext,
    listener: TcpListener,
    request_timeout: Duration,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send,
{
    Server::builder()
        .timeout(request_timeout)
        .add_service(ChatV1Server::new(ChatHandler::new(ctx)))
        .add_service(reflection_builder(CHAT_SERVICE_NAME).build_v1()?)
        .add_service(reflection_builder(CHAT_SERVICE_NAME).build_v1alpha()?)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;

    Ok(())
}

/// Reflection over the compiled descriptors, listing only `service_name`
fn reflection_builder(service_name: &str) -> tonic_reflection::server::Builder<'static> {
    tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .with_service_name(service_name)
}

async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr).await.map_err(|source| ServerError::Bind {
        addr: addr.to_string(),
        source,
    })
}

/// Run the user server with configuration until Ctrl-C
pub async fn run_user_server(config: AppConfig) -> Result<(), ServerError> {
    let ctx = create_service_context(&config).await?;
    let addr = config.user_rpc.address();
    let listener = bind(&addr).await?;

    info!("User server listening on {}", addr);
    serve_user(ctx, listener, config.rpc.request_timeout(), shutdown_signal()).await?;
    info!("User server stopped");

    Ok(())
}

/// Run the chat server with configuration until Ctrl-C
pub async fn run_chat_server(config: AppConfig) -> Result<(), ServerError> {
    let ctx = create_service_context(&config).await?;
    let addr = config.chat_rpc.address();
    let listener = bind(&addr).await?;

    info!("Chat server listening on {}", addr);
    serve_chat(ctx, listener, config.rpc.request_timeout(), shutdown_signal()).await?;
    info!("Chat server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    } else {
        // Without a signal handler the server only stops with the process.
        std::future::pending::<()>().await;
    }
}
