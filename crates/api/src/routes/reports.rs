//! Read-side endpoints: completed orders and sales figures.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use projections::{HistoryEntry, SalesSummary};
use till::ReceiptRenderer;

use super::AppState;

/// GET /history: completed orders, oldest first.
pub async fn history<R: ReceiptRenderer + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<Vec<HistoryEntry>> {
    let till = state.till.lock().await;
    Json(till.history().entries().to_vec())
}

/// GET /analytics: sales totals across all completed orders.
pub async fn analytics<R: ReceiptRenderer + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<SalesSummary> {
    let till = state.till.lock().await;
    Json(till.analytics().summary())
}
