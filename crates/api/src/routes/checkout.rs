//! Checkout endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::{PaymentMethod, ReceiptLine};
use serde::{Deserialize, Serialize};
use till::{CheckoutOutcome, ReceiptRenderer};

use super::AppState;
use crate::error::ApiError;

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub payment_method: String,
}

#[derive(Serialize)]
pub struct ReceiptLineResponse {
    pub name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

#[derive(Serialize)]
pub struct CheckoutResponse {
    pub order_id: String,
    pub lines: Vec<ReceiptLineResponse>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub tax_rate: String,
    pub total_cents: i64,
    pub total: String,
    pub payment_method: String,
    pub receipt: String,
    pub finalized_at: String,
    pub next_order_id: String,
}

impl From<&ReceiptLine> for ReceiptLineResponse {
    fn from(line: &ReceiptLine) -> Self {
        Self {
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price_cents: line.unit_price.cents(),
            line_total_cents: line.line_total.cents(),
        }
    }
}

impl CheckoutResponse {
    fn new(outcome: CheckoutOutcome, next_order_id: String) -> Self {
        let receipt = outcome.receipt;
        Self {
            order_id: receipt.order_id.to_string(),
            lines: receipt.lines.iter().map(ReceiptLineResponse::from).collect(),
            subtotal_cents: receipt.subtotal.cents(),
            tax_cents: receipt.tax.cents(),
            tax_rate: receipt.tax_rate.to_string(),
            total_cents: receipt.total.cents(),
            total: receipt.total.to_string(),
            payment_method: receipt.payment_method.to_string(),
            receipt: outcome.document.reference,
            finalized_at: outcome.finalized_at.to_rfc3339(),
            next_order_id,
        }
    }
}

/// POST /checkout: pay for the current order and print its receipt.
#[tracing::instrument(skip(state, req), fields(payment_method = %req.payment_method))]
pub async fn checkout<R: ReceiptRenderer + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<CheckoutResponse>), ApiError> {
    let label = req.payment_method.trim();
    if label.is_empty() {
        return Err(ApiError::BadRequest(
            "payment_method must not be blank".to_string(),
        ));
    }

    let mut till = state.till.lock().await;
    let outcome = till.checkout(PaymentMethod::new(label))?;
    let next_order_id = till.current_order().id().to_string();

    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse::new(outcome, next_order_id)),
    ))
}
