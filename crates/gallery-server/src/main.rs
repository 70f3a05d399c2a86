//! Prompt Gallery HTTP Server
//!
//! Serves the curl-to-function generator, the tool builder and the prompt
//! library over REST.

use anyhow::Result;
use gallery_server::{api, config::ServerConfig, state};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!("Loaded configuration: {:?}", config);

    // Initialize collaborators
    let app_state = state::init_state(&config).await?;
    info!("Application state initialized");

    let app = api::create_router(app_state);

    // Start server
    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Actions API: http://{}/prompt/actions", addr);
    info!("  Prompt library: http://{}/prompt/prompt-library", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(log_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "gallery_server={level},gallery_llm={level},gallery_repository={level},gallery_curl={level},tower_http=debug",
                    level = log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
