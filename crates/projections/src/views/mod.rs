//! Read model views for the till operator.

pub mod order_history;
pub mod sales_analytics;

pub use order_history::{HistoryEntry, OrderHistoryView};
pub use sales_analytics::{PaymentMethodTotals, SalesAnalyticsView, SalesSummary};
