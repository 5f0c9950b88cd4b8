//! Cart route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use verdura_core::{CartId, ProductId};

use crate::error::Result;
use crate::state::AppState;

/// Optional request body for adding a product to a cart.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddItemPayload {
    /// Requested quantity. Parsed leniently: absent, non-numeric, or
    /// below 1 all mean 1.
    pub quantity: Option<Value>,
}

impl AddItemPayload {
    fn quantity(&self) -> u32 {
        match self.quantity.as_ref() {
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .filter(|&n| n >= 1)
                .unwrap_or(1),
            Some(Value::String(s)) => s.trim().parse::<u32>().ok().filter(|&n| n >= 1).unwrap_or(1),
            _ => 1,
        }
    }
}

/// Create an empty cart.
///
/// # Errors
///
/// Returns 500 if the snapshot write fails.
pub async fn create(State(state): State<AppState>) -> Result<(StatusCode, Json<Value>)> {
    let cart = state.carts().create()?;
    Ok((StatusCode::CREATED, Json(json!({ "cart": cart }))))
}

/// Fetch a cart's line items.
///
/// # Errors
///
/// Returns 404 if the cart does not exist.
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let cart = state.carts().get(CartId::new(id))?;
    Ok(Json(json!({ "products": cart.items })))
}

/// Add a product to a cart, accumulating quantity for repeated products.
///
/// # Errors
///
/// Returns 404 if the cart or the product does not exist.
pub async fn add_product(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(i32, i32)>,
    payload: Option<Json<AddItemPayload>>,
) -> Result<(StatusCode, Json<Value>)> {
    let quantity = payload.map_or(1, |Json(body)| body.quantity());

    let cart = state.carts().add_item(
        state.products(),
        CartId::new(cart_id),
        ProductId::new(product_id),
        quantity,
    )?;
    Ok((StatusCode::CREATED, Json(json!({ "cart": cart }))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(quantity: Value) -> AddItemPayload {
        AddItemPayload {
            quantity: Some(quantity),
        }
    }

    #[test]
    fn test_quantity_lenient_parsing() {
        assert_eq!(payload(json!(3)).quantity(), 3);
        assert_eq!(payload(json!("4")).quantity(), 4);
        assert_eq!(payload(json!(0)).quantity(), 1);
        assert_eq!(payload(json!(-2)).quantity(), 1);
        assert_eq!(payload(json!("many")).quantity(), 1);
        assert_eq!(payload(Value::Null).quantity(), 1);
        assert_eq!(AddItemPayload::default().quantity(), 1);
    }
}
