//! Integration tests for Verdura.
//!
//! Each test boots the full API router on an ephemeral port with a fresh
//! temporary data directory, then drives it over HTTP with reqwest.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p verdura-integration-tests
//! ```
//!
//! No external services are required; the stores write into a [`TempDir`]
//! that is removed when the test finishes.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::path::PathBuf;

use tempfile::TempDir;

use verdura_api::config::ApiConfig;
use verdura_api::state::AppState;

/// A running test server plus the temporary directory backing its stores.
pub struct TestServer {
    /// Address the server is listening on.
    pub addr: SocketAddr,
    /// Data directory holding `products.json` and `carts.json`.
    pub data_dir: PathBuf,
    _tempdir: TempDir,
}

impl TestServer {
    /// Boot the API on an ephemeral port with a fresh data directory.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound; tests have no way to
    /// recover from that.
    pub async fn spawn() -> Self {
        let tempdir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = tempdir.path().to_path_buf();

        let config = ApiConfig {
            host: "127.0.0.1".parse().expect("valid bind address"),
            port: 0,
            data_dir: data_dir.clone(),
        };
        let state = AppState::new(config);
        let app = verdura_api::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("listener has a local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            addr,
            data_dir,
            _tempdir: tempdir,
        }
    }

    /// Base URL of the running server.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}
