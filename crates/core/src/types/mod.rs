//! Core types for Verdura.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod code;
pub mod id;
pub mod price;

pub use code::{CodeError, ProductCode};
pub use id::*;
pub use price::{Price, PriceError};
