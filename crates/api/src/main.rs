//! Verdura API - products and carts over JSON-file storage.
//!
//! This binary serves the public JSON API on port 8080.
//!
//! # Architecture
//!
//! - Axum web framework
//! - In-memory stores synchronized to flat JSON snapshot files
//! - Stores are constructed once at startup and injected into the router
//!   via application state; there is no global mutable state

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verdura_api::config::ApiConfig;
use verdura_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "verdura_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.socket_addr();

    // Build application state; a missing or damaged snapshot degrades to an
    // empty collection rather than failing startup
    let state = AppState::new(config);
    tracing::info!(
        data_dir = %state.config().data_dir.display(),
        "stores opened"
    );

    let app = verdura_api::app(state);

    // Start server
    tracing::info!("api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
