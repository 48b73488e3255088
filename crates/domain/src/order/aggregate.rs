//! Order aggregate implementation.

use chrono::{DateTime, Utc};
use common::OrderId;

use crate::catalog::Item;
use crate::money::{Money, TAX_RATE};

use super::line::Decrement;
use super::{
    FinalizedOrder, LineEntry, OrderError, OrderEvent, PaymentMethod, ReceiptData, ReceiptLine,
    RejectedCheckout,
};

/// Order aggregate root: the cart for one in-progress transaction.
///
/// Lines are keyed by item name and kept in the order they were first
/// added. Totals are derived from the lines on every call.
///
/// An order is consumed by [`Order::finalize`]; the till starts a fresh one
/// for the next customer.
#[derive(Debug)]
pub struct Order {
    id: OrderId,
    created_at: DateTime<Utc>,
    lines: Vec<LineEntry>,
}

impl Order {
    /// Opens a new, empty order.
    pub fn new() -> Self {
        Self::with_id(OrderId::new(), Utc::now())
    }

    /// Opens an empty order with a known identity.
    pub fn with_id(id: OrderId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            lines: Vec::new(),
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// Query methods
impl Order {
    /// Returns the order ID.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns when the order was opened.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the lines in display order.
    pub fn lines(&self) -> impl Iterator<Item = &LineEntry> {
        self.lines.iter()
    }

    /// Returns the line for an item name.
    pub fn line(&self, name: &str) -> Option<&LineEntry> {
        self.lines.iter().find(|line| line.name() == name)
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the number of units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(LineEntry::quantity).sum()
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price × quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(LineEntry::line_total).sum()
    }

    /// Tax on the subtotal at the fixed rate.
    pub fn tax(&self) -> Money {
        TAX_RATE.apply(self.subtotal())
    }

    /// Subtotal plus tax.
    pub fn total(&self) -> Money {
        let subtotal = self.subtotal();
        subtotal + TAX_RATE.apply(subtotal)
    }

    /// Takes a detached snapshot for the receipt renderer.
    pub fn to_receipt_data(&self, payment_method: &PaymentMethod) -> ReceiptData {
        let lines = self
            .lines
            .iter()
            .map(|line| ReceiptLine {
                name: line.name().to_string(),
                unit_price: line.unit_price(),
                quantity: line.quantity(),
                line_total: line.line_total(),
            })
            .collect();
        let subtotal = self.subtotal();
        let tax = TAX_RATE.apply(subtotal);

        ReceiptData {
            order_id: self.id,
            lines,
            subtotal,
            tax,
            tax_rate: TAX_RATE,
            total: subtotal + tax,
            payment_method: payment_method.clone(),
        }
    }
}

// Mutations
impl Order {
    /// Adds one unit of `item`, starting a new line if needed.
    pub fn add_item(&mut self, item: &Item) -> OrderEvent {
        let quantity = match self.position(item.name()) {
            Some(index) => self.lines[index].increment(),
            None => {
                self.lines.push(LineEntry::new(item.clone()));
                1
            }
        };

        OrderEvent::item_added(self.id, item.name(), item.price(), quantity)
    }

    /// Takes one unit of `name` off the cart.
    ///
    /// Unknown names are ignored. A line whose last unit is removed is
    /// dropped.
    pub fn remove_item(&mut self, name: &str) -> Option<OrderEvent> {
        let index = self.position(name)?;

        let remaining = match self.lines[index].decrement() {
            Decrement::Remaining(remaining) => remaining.get(),
            Decrement::Exhausted => {
                self.lines.remove(index);
                0
            }
        };

        Some(OrderEvent::item_removed(self.id, name, remaining))
    }

    /// Empties the cart. The order keeps its ID and creation time.
    pub fn clear(&mut self) -> Option<OrderEvent> {
        if self.lines.is_empty() {
            return None;
        }
        let lines_removed = self.lines.len();
        self.lines.clear();
        Some(OrderEvent::cart_cleared(self.id, lines_removed))
    }

    /// Closes the order for payment.
    ///
    /// An empty order is handed back inside the error, unchanged.
    pub fn finalize(
        self,
        payment_method: PaymentMethod,
    ) -> Result<FinalizedOrder, RejectedCheckout> {
        if self.is_empty() {
            return Err(RejectedCheckout::new(OrderError::EmptyOrder, self));
        }

        Ok(FinalizedOrder {
            receipt: self.to_receipt_data(&payment_method),
            created_at: self.created_at,
            finalized_at: Utc::now(),
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.name() == name)
    }
}
