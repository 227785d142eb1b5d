use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
pub mod frontend;
pub mod state;
pub mod web;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(
            |_| "tower_http=debug,checkout_confirmation=debug".into(),
        )))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::info!(
        "Configuration loaded: addr={}, site_root={}",
        config.app_addr,
        config.site_root
    );

    let app_state = Arc::new(AppState::new(config));

    tracing::info!("Starting web server...");
    web::serve(app_state).await?;

    Ok(())
}
