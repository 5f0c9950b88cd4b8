//! In-memory stores synchronized with JSON snapshot files.
//!
//! Each store owns one collection and its backing file. All mutations pass
//! through the store, which re-persists the whole collection before
//! returning (write-through, full-snapshot persistence).

use core::fmt;

use thiserror::Error;

use verdura_core::ProductCode;

pub mod carts;
pub mod products;
pub mod snapshot;

pub use carts::CartStore;
pub use products::{ProductDraft, ProductStore};
pub use snapshot::SnapshotError;

/// Errors produced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// One or more client-supplied fields are missing or malformed.
    /// Detected before any mutation.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// The supplied product code belongs to another product.
    /// Detected before any mutation.
    #[error("product code '{0}' already exists")]
    DuplicateCode(ProductCode),

    /// Lookup by id failed.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind, `"product"` or `"cart"`.
        entity: &'static str,
        /// The id that was looked up.
        id: i32,
    },

    /// The backing file could not be written. The in-memory mutation has
    /// already happened at this point; there is no rollback.
    #[error("storage error: {0}")]
    Storage(#[from] SnapshotError),
}

/// A single field-level validation failure.
#[derive(Debug, Clone)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable reason.
    pub reason: String,
}

/// Accumulated field-level validation failures.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Record a failure for `field`.
    pub fn push(&mut self, field: &'static str, reason: impl Into<String>) {
        self.0.push(FieldError {
            field,
            reason: reason.into(),
        });
    }

    /// True when no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the recorded failures.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{} {}", err.field, err.reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_display() {
        let mut errors = FieldErrors::default();
        errors.push("title", "is required");
        errors.push("price", "is required");
        assert_eq!(errors.to_string(), "title is required; price is required");
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound {
            entity: "product",
            id: 9,
        };
        assert_eq!(err.to_string(), "product 9 not found");
    }
}
