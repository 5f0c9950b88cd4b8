//! Cart domain types.

use serde::{Deserialize, Serialize};

use verdura_core::{CartId, ProductId};

/// A shopping cart: an ordered list of line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Store-assigned sequential ID.
    pub id: CartId,
    /// Line items, unique by product. Serialized as `products` to match
    /// the snapshot layout.
    #[serde(rename = "products")]
    pub items: Vec<CartItem>,
}

/// A (product, quantity) line item inside a cart.
///
/// Holds the product's integer ID by value - a back-reference, not an
/// ownership link into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Referenced product.
    pub product: ProductId,
    /// Number of units, always at least 1.
    pub quantity: u32,
}
