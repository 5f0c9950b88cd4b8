//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use verdura_core::ProductId;

use crate::error::Result;
use crate::state::AppState;
use crate::store::ProductDraft;

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Maximum number of products to return. Parsed leniently: a value
    /// that is not a non-negative integer behaves as if absent.
    pub limit: Option<String>,
}

impl ListQuery {
    fn limit(&self) -> Option<usize> {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
    }
}

/// List products in insertion order, optionally truncated by `limit`.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Value> {
    let products = state.products().list(query.limit());
    Json(json!({ "products": products }))
}

/// Fetch a single product by id.
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let product = state.products().get(ProductId::new(id))?;
    Ok(Json(json!({ "product": product })))
}

/// Create a product from the request body.
///
/// # Errors
///
/// Returns 400 for missing or malformed fields and 409 when the code is
/// already taken.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Value>)> {
    let product = state.products().add(draft)?;
    Ok((StatusCode::CREATED, Json(json!({ "product": product }))))
}

/// Update a product's mutable fields.
///
/// # Errors
///
/// Returns 400 for missing or malformed fields, 404 if the product does
/// not exist, and 409 when the new code belongs to another product.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Value>> {
    let product = state.products().update(ProductId::new(id), draft)?;
    Ok(Json(json!({ "product": product })))
}

/// Delete a product.
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    state.products().delete(ProductId::new(id))?;
    Ok(Json(json!({ "message": "product deleted" })))
}
