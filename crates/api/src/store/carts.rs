//! Cart store: carts and their line items.

use std::path::PathBuf;

use parking_lot::Mutex;

use verdura_core::{CartId, ProductId};

use super::snapshot::Snapshot;
use super::{ProductStore, StoreError};
use crate::models::{Cart, CartItem};

struct CartsInner {
    carts: Vec<Cart>,
    next_id: i32,
}

/// Authoritative collection of carts backed by one snapshot file.
///
/// Carts reference products by integer id only; the catalog is consulted
/// through an injected [`ProductStore`] when items are added, never held.
pub struct CartStore {
    snapshot: Snapshot,
    inner: Mutex<CartsInner>,
}

impl CartStore {
    /// Open the store backed by the snapshot file at `path`.
    ///
    /// A missing or damaged snapshot yields an empty collection with the id
    /// counter at 1; this is never a startup failure.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let snapshot = Snapshot::new(path);
        let carts: Vec<Cart> = snapshot.load();
        let next_id = carts.iter().map(|c| c.id.as_i32()).max().unwrap_or(0) + 1;

        Self {
            snapshot,
            inner: Mutex::new(CartsInner { carts, next_id }),
        }
    }

    /// Allocate the next sequential id, append an empty cart and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the snapshot write fails after
    /// the in-memory append.
    pub fn create(&self) -> Result<Cart, StoreError> {
        let mut inner = self.inner.lock();

        let id = CartId::new(inner.next_id);
        inner.next_id += 1;

        let cart = Cart {
            id,
            items: Vec::new(),
        };
        inner.carts.push(cart.clone());
        self.snapshot.save(&inner.carts)?;
        Ok(cart)
    }

    /// Look up a cart by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no cart has this id.
    pub fn get(&self, id: CartId) -> Result<Cart, StoreError> {
        self.inner
            .lock()
            .carts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "cart",
                id: id.as_i32(),
            })
    }

    /// Add `quantity` units of a product to a cart and persist.
    ///
    /// The product must exist in `products` at insertion time. If the cart
    /// already holds a line for this product its quantity is incremented;
    /// otherwise a new line is appended. Quantities below 1 are treated
    /// as 1.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the cart or the product does not
    /// exist (no mutation happens), or [`StoreError::Storage`] if the
    /// snapshot write fails after the in-memory change.
    pub fn add_item(
        &self,
        products: &ProductStore,
        cart_id: CartId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Cart, StoreError> {
        // Catalog probe takes the product lock briefly; the cart lock is
        // only acquired afterwards, so the two stores never deadlock.
        if !products.contains(product_id) {
            return Err(StoreError::NotFound {
                entity: "product",
                id: product_id.as_i32(),
            });
        }

        let mut inner = self.inner.lock();
        let Some(cart) = inner.carts.iter_mut().find(|c| c.id == cart_id) else {
            return Err(StoreError::NotFound {
                entity: "cart",
                id: cart_id.as_i32(),
            });
        };

        let quantity = quantity.max(1);
        match cart.items.iter_mut().find(|item| item.product == product_id) {
            Some(item) => item.quantity += quantity,
            None => cart.items.push(CartItem {
                product: product_id,
                quantity,
            }),
        }
        let updated = cart.clone();

        self.snapshot.save(&inner.carts)?;
        Ok(updated)
    }
}
