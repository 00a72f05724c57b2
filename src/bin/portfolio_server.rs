// Portfolio server entry point
//
// Usage: cargo run --bin portfolio_server
// Configuration comes from HOST, PORT, PORTFOLIO_DATA, ASSETS_DIR,
// SCROLL_ACTIVATION_OFFSET, SCROLL_THRESHOLD, VIEW_TTL_SECS, VIEW_CAPACITY.

use portfolio_site::{api_server, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=info,tower_http=debug,axum=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio server...");

    let config = ServerConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  ADDRESS: {}", config.socket_addr());
    match &config.portfolio_path {
        Some(path) => tracing::info!("  PORTFOLIO_DATA: {}", path.display()),
        None => tracing::info!("  PORTFOLIO_DATA: <embedded>"),
    }
    tracing::info!("  ASSETS_DIR: {}", config.assets_dir.display());
    tracing::info!(
        "  SCROLL: activation_offset={}px scrolled_threshold={}px",
        config.scroll.activation_offset,
        config.scroll.scrolled_threshold
    );
    tracing::info!(
        "  VIEWS: ttl={}s capacity={}",
        config.view_ttl.as_secs(),
        config.view_capacity
    );

    let state = AppState::from_config(&config)?;
    tracing::info!("Application state initialized successfully");

    api_server::serve(&config, state).await
}
