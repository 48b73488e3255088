//! Read models fed by order events.
//!
//! This crate provides the query side of the till:
//! - [`Projection`] trait for folding events into read models
//! - [`OrderHistoryView`]: append-only log of completed orders
//! - [`SalesAnalyticsView`]: order count and revenue figures

pub mod projection;
pub mod views;

pub use projection::{Projection, ProjectionPosition};
pub use views::{
    HistoryEntry, OrderHistoryView, PaymentMethodTotals, SalesAnalyticsView, SalesSummary,
};
