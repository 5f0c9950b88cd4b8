//! Verdura Core - Shared types library.
//!
//! This crate provides common types used across all Verdura components:
//! - `api` - HTTP service exposing the product and cart collections
//! - `cli` - Command-line tools for catalog management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, product codes, and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
