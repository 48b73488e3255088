//! HTTP kiosk server for the café till.
//!
//! Exposes the menu, the cart, checkout and the sales read models as JSON,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};
use domain::Catalog;
use metrics_exporter_prometheus::PrometheusHandle;
use till::{ReceiptRenderer, TillSession};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: ReceiptRenderer + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/menu", get(routes::menu::list::<R>))
        .route("/menu/{category}", get(routes::menu::category::<R>))
        .route(
            "/cart",
            get(routes::cart::get::<R>).delete(routes::cart::clear::<R>),
        )
        .route("/cart/items", post(routes::cart::add_item::<R>))
        .route("/cart/items/{name}", delete(routes::cart::remove_item::<R>))
        .route("/checkout", post(routes::checkout::checkout::<R>))
        .route("/history", get(routes::reports::history::<R>))
        .route("/analytics", get(routes::reports::analytics::<R>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Opens a till session over `catalog` and wraps it in shared state.
pub fn create_state<R: ReceiptRenderer>(catalog: Catalog, renderer: R) -> Arc<AppState<R>> {
    Arc::new(AppState::new(TillSession::new(Arc::new(catalog), renderer)))
}
