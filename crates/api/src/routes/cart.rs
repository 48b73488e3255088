//! Cart endpoints for the order being rung up.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use domain::{LineEntry, Order};
use serde::{Deserialize, Serialize};
use till::ReceiptRenderer;

use super::AppState;
use crate::error::ApiError;

// -- Request types --

#[derive(Deserialize)]
pub struct AddItemRequest {
    pub category: String,
    pub name: String,
}

// -- Response types --

#[derive(Serialize)]
pub struct CartLineResponse {
    pub name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

#[derive(Serialize)]
pub struct CartResponse {
    pub order_id: String,
    pub lines: Vec<CartLineResponse>,
    pub item_count: u32,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub total: String,
}

impl From<&LineEntry> for CartLineResponse {
    fn from(line: &LineEntry) -> Self {
        Self {
            name: line.name().to_string(),
            quantity: line.quantity(),
            unit_price_cents: line.unit_price().cents(),
            line_total_cents: line.line_total().cents(),
        }
    }
}

impl From<&Order> for CartResponse {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id().to_string(),
            lines: order.lines().map(CartLineResponse::from).collect(),
            item_count: order.total_quantity(),
            subtotal_cents: order.subtotal().cents(),
            tax_cents: order.tax().cents(),
            total_cents: order.total().cents(),
            total: order.total().to_string(),
        }
    }
}

// -- Handlers --

/// GET /cart: the current order with running totals.
pub async fn get<R: ReceiptRenderer + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<CartResponse> {
    let till = state.till.lock().await;
    Json(CartResponse::from(till.current_order()))
}

/// POST /cart/items: add one unit of a menu item.
#[tracing::instrument(skip(state, req), fields(category = %req.category, name = %req.name))]
pub async fn add_item<R: ReceiptRenderer + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    let mut till = state.till.lock().await;
    till.add(&req.category, &req.name)?;
    Ok(Json(CartResponse::from(till.current_order())))
}

/// DELETE /cart/items/{name}: take one unit off the cart. Unknown names are
/// ignored.
#[tracing::instrument(skip(state))]
pub async fn remove_item<R: ReceiptRenderer + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(name): Path<String>,
) -> Json<CartResponse> {
    let mut till = state.till.lock().await;
    till.remove(&name);
    Json(CartResponse::from(till.current_order()))
}

/// DELETE /cart: empty the cart, keeping the order number.
#[tracing::instrument(skip(state))]
pub async fn clear<R: ReceiptRenderer + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<CartResponse> {
    let mut till = state.till.lock().await;
    till.clear_cart();
    Json(CartResponse::from(till.current_order()))
}
