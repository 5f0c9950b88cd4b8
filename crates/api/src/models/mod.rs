//! Domain models for the catalog and carts.
//!
//! These are the records held in memory by the stores and serialized
//! verbatim into the JSON snapshot files.

pub mod cart;
pub mod product;

pub use cart::{Cart, CartItem};
pub use product::Product;
