//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::store::{CartStore, ProductStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the two stores. Stores are constructed once at process
/// start with their snapshot paths injected and live for the whole process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    products: ProductStore,
    carts: CartStore,
}

impl AppState {
    /// Create a new application state, opening both stores from the paths
    /// named by `config`.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let products = ProductStore::open(config.products_path());
        let carts = CartStore::open(config.carts_path());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                products,
                carts,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the product store.
    #[must_use]
    pub fn products(&self) -> &ProductStore {
        &self.inner.products
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }
}
