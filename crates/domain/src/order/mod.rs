//! Order aggregate and related types.

mod aggregate;
mod events;
mod line;
mod receipt;
mod value_objects;

pub use aggregate::Order;
pub use events::{
    CartClearedData, ItemAddedData, ItemRemovedData, OrderEvent, OrderFinalizedData,
};
pub use line::{Decrement, LineEntry};
pub use receipt::{FinalizedOrder, ReceiptData, ReceiptLine};
pub use value_objects::PaymentMethod;

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Checkout was attempted on an order with no lines.
    #[error("Order has no items")]
    EmptyOrder,
}

/// A refused [`Order::finalize`], carrying the order back to the caller.
#[derive(Debug, Error)]
#[error("Checkout rejected: {reason}")]
pub struct RejectedCheckout {
    reason: OrderError,
    order: Order,
}

impl RejectedCheckout {
    fn new(reason: OrderError, order: Order) -> Self {
        Self { reason, order }
    }

    /// Returns why the checkout was refused.
    pub fn reason(&self) -> &OrderError {
        &self.reason
    }

    /// Returns the untouched order.
    pub fn into_order(self) -> Order {
        self.order
    }

    /// Splits into the reason and the order.
    pub fn into_parts(self) -> (OrderError, Order) {
        (self.reason, self.order)
    }
}
