//! Product store: the authoritative catalog collection.
//!
//! All product mutations pass through [`ProductStore`]. Each mutating call
//! validates its input, applies the change under the store lock, and
//! rewrites the backing snapshot before returning.

use std::path::PathBuf;

use parking_lot::Mutex;
use serde::Deserialize;

use verdura_core::{Price, ProductCode, ProductId};

use super::snapshot::Snapshot;
use super::{FieldErrors, StoreError};
use crate::models::Product;

/// Client-supplied product fields, prior to validation.
///
/// Everything is optional at this layer; [`validate`](Self::validate) turns
/// a draft into a typed record or a list of field-level failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<Price>,
    pub stock: Option<u32>,
    pub category: Option<String>,
    pub status: Option<bool>,
    pub thumbnails: Option<Vec<String>>,
}

/// A draft that passed validation: every required field present and
/// well-formed. `status` and `thumbnails` stay optional; the store decides
/// their defaults per operation.
#[derive(Debug, Clone)]
struct ValidatedProduct {
    title: String,
    description: String,
    code: ProductCode,
    price: Price,
    stock: u32,
    category: String,
    status: Option<bool>,
    thumbnails: Option<Vec<String>>,
}

impl ProductDraft {
    /// Validate all required fields, accumulating every failure rather than
    /// stopping at the first.
    fn validate(self) -> Result<ValidatedProduct, StoreError> {
        let mut errors = FieldErrors::default();

        let title = require_text(&mut errors, "title", self.title);
        let description = require_text(&mut errors, "description", self.description);
        let category = require_text(&mut errors, "category", self.category);

        let code = match self.code.as_deref() {
            None => {
                errors.push("code", "is required");
                None
            }
            Some(raw) => match ProductCode::parse(raw) {
                Ok(code) => Some(code),
                Err(err) => {
                    errors.push("code", err.to_string());
                    None
                }
            },
        };

        let price = self.price;
        if price.is_none() {
            errors.push("price", "is required");
        }

        let stock = self.stock;
        if stock.is_none() {
            errors.push("stock", "is required");
        }

        let (Some(title), Some(description), Some(code), Some(price), Some(stock), Some(category)) =
            (title, description, code, price, stock, category)
        else {
            return Err(StoreError::Validation(errors));
        };

        Ok(ValidatedProduct {
            title,
            description,
            code,
            price,
            stock,
            category,
            status: self.status,
            thumbnails: self.thumbnails,
        })
    }
}

fn require_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s),
        Some(_) => {
            errors.push(field, "must not be empty");
            None
        }
        None => {
            errors.push(field, "is required");
            None
        }
    }
}

/// The in-memory catalog plus its id counter.
///
/// `next_id` only ever grows while the store is alive, so ids are never
/// reused across deletes.
struct Catalog {
    products: Vec<Product>,
    next_id: i32,
}

/// Authoritative collection of products backed by one snapshot file.
///
/// One mutex serializes access to the collection and its file, so two
/// mutations can never interleave a partial write.
pub struct ProductStore {
    snapshot: Snapshot,
    inner: Mutex<Catalog>,
}

impl ProductStore {
    /// Open the store backed by the snapshot file at `path`.
    ///
    /// A missing or damaged snapshot yields an empty catalog with the id
    /// counter at 1; this is never a startup failure.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let snapshot = Snapshot::new(path);
        let products: Vec<Product> = snapshot.load();
        let next_id = products.iter().map(|p| p.id.as_i32()).max().unwrap_or(0) + 1;

        Self {
            snapshot,
            inner: Mutex::new(Catalog { products, next_id }),
        }
    }

    /// All products in insertion order, truncated to the first `limit`
    /// entries when provided.
    pub fn list(&self, limit: Option<usize>) -> Vec<Product> {
        let catalog = self.inner.lock();
        match limit {
            Some(n) => catalog.products.iter().take(n).cloned().collect(),
            None => catalog.products.clone(),
        }
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no product has this id.
    pub fn get(&self, id: ProductId) -> Result<Product, StoreError> {
        self.inner
            .lock()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "product",
                id: id.as_i32(),
            })
    }

    /// Whether a product with this id exists. Used by the cart store for
    /// referential checks.
    pub fn contains(&self, id: ProductId) -> bool {
        self.inner.lock().products.iter().any(|p| p.id == id)
    }

    /// Validate `draft`, assign the next sequential id, append the product
    /// and persist the catalog.
    ///
    /// `status` defaults to `true` and `thumbnails` to empty when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for missing or malformed fields,
    /// [`StoreError::DuplicateCode`] if the code is already taken (both
    /// before any mutation), or [`StoreError::Storage`] if the snapshot
    /// write fails after the in-memory append.
    pub fn add(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let fields = draft.validate()?;
        let mut catalog = self.inner.lock();

        if catalog.products.iter().any(|p| p.code == fields.code) {
            return Err(StoreError::DuplicateCode(fields.code));
        }

        let id = ProductId::new(catalog.next_id);
        catalog.next_id += 1;

        let product = Product {
            id,
            title: fields.title,
            description: fields.description,
            code: fields.code,
            price: fields.price,
            status: fields.status.unwrap_or(true),
            stock: fields.stock,
            category: fields.category,
            thumbnails: fields.thumbnails.unwrap_or_default(),
        };

        catalog.products.push(product.clone());
        self.snapshot.save(&catalog.products)?;
        Ok(product)
    }

    /// Validate `draft` and overwrite the product's mutable fields in place
    /// (the id never changes), then persist the catalog.
    ///
    /// Absent `status` and `thumbnails` keep their current values.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for missing or malformed fields,
    /// [`StoreError::DuplicateCode`] if the new code belongs to a different
    /// product, [`StoreError::NotFound`] if the id is unknown (all before
    /// any mutation), or [`StoreError::Storage`] if the snapshot write
    /// fails afterwards.
    pub fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StoreError> {
        let fields = draft.validate()?;
        let mut catalog = self.inner.lock();

        // Unknown id wins over a code collision with some other product
        if !catalog.products.iter().any(|p| p.id == id) {
            return Err(StoreError::NotFound {
                entity: "product",
                id: id.as_i32(),
            });
        }

        if catalog
            .products
            .iter()
            .any(|p| p.id != id && p.code == fields.code)
        {
            return Err(StoreError::DuplicateCode(fields.code));
        }

        let Some(record) = catalog.products.iter_mut().find(|p| p.id == id) else {
            return Err(StoreError::NotFound {
                entity: "product",
                id: id.as_i32(),
            });
        };

        record.title = fields.title;
        record.description = fields.description;
        record.code = fields.code;
        record.price = fields.price;
        record.stock = fields.stock;
        record.category = fields.category;
        if let Some(status) = fields.status {
            record.status = status;
        }
        if let Some(thumbnails) = fields.thumbnails {
            record.thumbnails = thumbnails;
        }
        let updated = record.clone();

        self.snapshot.save(&catalog.products)?;
        Ok(updated)
    }

    /// Remove the product and persist the catalog, returning the removed
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is unknown, or
    /// [`StoreError::Storage`] if the snapshot write fails after removal.
    pub fn delete(&self, id: ProductId) -> Result<Product, StoreError> {
        let mut catalog = self.inner.lock();

        let Some(index) = catalog.products.iter().position(|p| p.id == id) else {
            return Err(StoreError::NotFound {
                entity: "product",
                id: id.as_i32(),
            });
        };

        let removed = catalog.products.remove(index);
        self.snapshot.save(&catalog.products)?;
        Ok(removed)
    }
}
