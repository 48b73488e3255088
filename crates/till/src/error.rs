//! Till error types.

use domain::OrderError;
use thiserror::Error;

use crate::receipt::ReceiptError;

/// Errors that can occur during till operations.
#[derive(Debug, Error)]
pub enum TillError {
    /// The selected item is not on the menu under that category.
    #[error("Item not found: {name} in category {category}")]
    ItemNotFound { category: String, name: String },

    /// The order refused the operation.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// The receipt could not be produced; the checkout was abandoned.
    #[error("Receipt error: {0}")]
    Receipt(#[from] ReceiptError),
}

/// Convenience type alias for till results.
pub type Result<T> = std::result::Result<T, TillError>;
