//! Verdura API library.
//!
//! This crate provides the API functionality as a library, allowing the
//! router to be built in-process for tests and reused by other binaries.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router with all routes and middleware attached.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
