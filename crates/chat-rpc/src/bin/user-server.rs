//! User directory gRPC server
//!
//! Run with:
//! ```bash
//! cargo run -p chat-rpc --bin user-server
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use chat_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "User server failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        addr = %config.user_rpc.address(),
        "Starting User server..."
    );

    chat_rpc::run_user_server(config).await?;
    Ok(())
}
