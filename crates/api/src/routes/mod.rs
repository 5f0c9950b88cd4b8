//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Health check
//!
//! # Products
//! GET    /api/products?limit=N         - Product listing
//! GET    /api/products/{id}            - Product detail
//! POST   /api/products                 - Create product
//! PUT    /api/products/{id}            - Update product
//! DELETE /api/products/{id}            - Delete product
//!
//! # Carts
//! POST /api/carts                      - Create cart
//! GET  /api/carts/{id}                 - Cart line items
//! POST /api/carts/{id}/product/{pid}   - Add product to cart
//! ```

pub mod carts;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not touch the stores.
async fn health() -> &'static str {
    "ok"
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(carts::create))
        .route("/{id}", get(carts::show))
        .route("/{id}/product/{product_id}", post(carts::add_product))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/products", product_routes())
        .nest("/api/carts", cart_routes())
}
