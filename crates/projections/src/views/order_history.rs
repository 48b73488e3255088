//! Order history read model: one summary per completed checkout.

use chrono::{DateTime, Utc};
use common::OrderId;
use domain::{Money, OrderEvent, PaymentMethod};
use serde::Serialize;

use crate::projection::{Projection, ProjectionPosition};

/// Summary of a completed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub order_id: OrderId,
    pub total: Money,
    pub payment_method: PaymentMethod,
    pub item_count: u32,
    pub finalized_at: DateTime<Utc>,
}

/// Append-only log of completed orders, in completion order.
///
/// Entries are written once per `OrderFinalized` event and never changed
/// or removed. The log lives as long as the till process.
#[derive(Debug, Clone, Default)]
pub struct OrderHistoryView {
    entries: Vec<HistoryEntry>,
    position: ProjectionPosition,
}

impl OrderHistoryView {
    /// Creates a new empty order history view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every entry, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Gets the entry for a specific order.
    pub fn get(&self, order_id: OrderId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.order_id == order_id)
    }

    /// Returns the most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns the number of completed orders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no order has been completed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Projection for OrderHistoryView {
    fn name(&self) -> &'static str {
        "OrderHistoryView"
    }

    fn handle(&mut self, event: &OrderEvent) {
        if let OrderEvent::OrderFinalized(data) = event
            && self.get(data.receipt.order_id).is_none()
        {
            self.entries.push(HistoryEntry {
                order_id: data.receipt.order_id,
                total: data.receipt.total,
                payment_method: data.receipt.payment_method.clone(),
                item_count: data.receipt.lines.iter().map(|l| l.quantity).sum(),
                finalized_at: data.finalized_at,
            });
        }

        self.position = self.position.advance();
    }

    fn position(&self) -> ProjectionPosition {
        self.position
    }
}
