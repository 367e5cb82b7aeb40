use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ledger_backend::config::Config;
use ledger_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state, config.cors_origin.as_deref())?;

    let addr = config.socket_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
