//! Product domain type.

use serde::{Deserialize, Serialize};

use verdura_core::{Price, ProductCode, ProductId};

/// A catalog product.
///
/// The field order matches the persisted snapshot layout; `id` is assigned
/// by the store and never supplied by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned sequential ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Merchant-assigned code, unique across the catalog.
    pub code: ProductCode,
    /// Unit price.
    pub price: Price,
    /// Whether the product is active. Defaults to `true` at creation.
    pub status: bool,
    /// Units in stock.
    pub stock: u32,
    /// Category name.
    pub category: String,
    /// Image references. Defaults to empty at creation.
    pub thumbnails: Vec<String>,
}
