//! Menu browsing endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use domain::{Category, Item};
use serde::Serialize;
use till::ReceiptRenderer;

use super::AppState;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct MenuItemResponse {
    pub name: String,
    pub price_cents: i64,
    pub price: String,
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub name: String,
    pub items: Vec<MenuItemResponse>,
}

impl From<&Item> for MenuItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name().to_string(),
            price_cents: item.price().cents(),
            price: item.price().to_string(),
        }
    }
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name().to_string(),
            items: category.items().iter().map(MenuItemResponse::from).collect(),
        }
    }
}

/// GET /menu: every category with its items, in menu order.
pub async fn list<R: ReceiptRenderer + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<Vec<CategoryResponse>> {
    let till = state.till.lock().await;
    let categories = till
        .catalog()
        .category_list()
        .iter()
        .map(CategoryResponse::from)
        .collect();
    Json(categories)
}

/// GET /menu/{category}: one category.
#[tracing::instrument(skip(state))]
pub async fn category<R: ReceiptRenderer + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(category): Path<String>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let till = state.till.lock().await;
    till.catalog()
        .category_list()
        .iter()
        .find(|c| c.name() == category)
        .map(|c| Json(CategoryResponse::from(c)))
        .ok_or_else(|| ApiError::NotFound(format!("Category {category} not found")))
}
