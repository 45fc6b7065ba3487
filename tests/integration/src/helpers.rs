//! Test helpers for integration tests
//!
//! Provides utilities for spawning both gRPC servers on ephemeral ports and
//! connecting clients to them.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chat_rpc::proto::chat_v1::chat_v1_client::ChatV1Client;
use chat_rpc::proto::user_v1::user_v1_client::UserV1Client;
use chat_rpc::{serve_chat, serve_user};
use chat_service::ServiceContext;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tonic::transport::Channel;

/// Per-request timeout applied by the test servers
pub const TEST_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Both servers running over one service context
pub struct TestServers {
    pub user_addr: SocketAddr,
    pub chat_addr: SocketAddr,
    pub ctx: ServiceContext,
    shutdown: Vec<oneshot::Sender<()>>,
    _handles: Vec<JoinHandle<()>>,
}

impl TestServers {
    /// Start both servers over fresh in-memory repositories
    pub async fn start() -> Result<Self> {
        Self::start_with_context(ServiceContext::in_memory()).await
    }

    /// Start both servers over the given context
    pub async fn start_with_context(ctx: ServiceContext) -> Result<Self> {
        Self::start_with_timeout(ctx, TEST_REQUEST_TIMEOUT).await
    }

    /// Start both servers over the given context with a custom per-request timeout
    pub async fn start_with_timeout(ctx: ServiceContext, request_timeout: Duration) -> Result<Self> {
        let user_listener = TcpListener::bind("127.0.0.1:0").await?;
        let chat_listener = TcpListener::bind("127.0.0.1:0").await?;
        let user_addr = user_listener.local_addr()?;
        let chat_addr = chat_listener.local_addr()?;

        let (user_tx, user_rx) = oneshot::channel::<()>();
        let (chat_tx, chat_rx) = oneshot::channel::<()>();

        let user_ctx = ctx.clone();
        let user_handle = tokio::spawn(async move {
            serve_user(user_ctx, user_listener, request_timeout, async {
                user_rx.await.ok();
            })
            .await
            .ok();
        });

        let chat_ctx = ctx.clone();
        let chat_handle = tokio::spawn(async move {
            serve_chat(chat_ctx, chat_listener, request_timeout, async {
                chat_rx.await.ok();
            })
            .await
            .ok();
        });

        Ok(Self {
            user_addr,
            chat_addr,
            ctx,
            shutdown: vec![user_tx, chat_tx],
            _handles: vec![user_handle, chat_handle],
        })
    }

    /// Connect a client to the user server
    pub async fn user_client(&self) -> Result<UserV1Client<Channel>> {
        Ok(UserV1Client::connect(format!("http://{}", self.user_addr)).await?)
    }

    /// Connect a client to the chat server
    pub async fn chat_client(&self) -> Result<ChatV1Client<Channel>> {
        Ok(ChatV1Client::connect(format!("http://{}", self.chat_addr)).await?)
    }
}

impl Drop for TestServers {
    fn drop(&mut self) {
        for tx in self.shutdown.drain(..) {
            let _ = tx.send(());
        }
    }
}

/// Build a PostgreSQL-backed context when `DATABASE_URL` is set
///
/// Applies the schema before returning.
pub async fn database_context() -> Result<Option<ServiceContext>> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return Ok(None);
    };

    let pool = sqlx::PgPool::connect(&url).await?;
    sqlx::raw_sql(chat_db::SCHEMA).execute(&pool).await?;

    Ok(Some(ServiceContext::from_pool(pool)))
}

/// Assert that a call failed with the expected gRPC code
pub fn assert_code<T: std::fmt::Debug>(result: Result<T, tonic::Status>, expected: tonic::Code) {
    match result {
        Ok(value) => panic!("Expected status {expected:?}, got Ok({value:?})"),
        Err(status) => assert_eq!(
            status.code(),
            expected,
            "Expected status {expected:?}, got {:?}: {}",
            status.code(),
            status.message()
        ),
    }
}
