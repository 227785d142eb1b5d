mod api;

use crate::frontend::app;
use crate::state::AppState;
use anyhow::Context;
use axum::{Router, routing::get};
use leptos::config::{LeptosOptions, get_configuration};
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Routes served outside of the Leptos app.
fn api_routes() -> Router {
    Router::new().route("/health", get(api::health))
}

/// Leptos pages, static site files and the API. Paths the app does not route
/// still render the shell so the router's fallback page is shown.
fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(app::App);

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || app::shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler(app::shell))
        .with_state(leptos_options)
        .merge(api_routes())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    // Leptos configuration
    let conf = get_configuration(Some("Cargo.toml")).context("failed to load Leptos options")?;
    let mut leptos_options = conf.leptos_options;
    leptos_options.site_root = state.config.site_root.clone().into();

    let app = router(leptos_options);

    let listener = tokio::net::TcpListener::bind(state.config.app_addr)
        .await
        .with_context(|| format!("failed to bind {}", state.config.app_addr))?;
    tracing::info!("Listening on http://{}", state.config.app_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
