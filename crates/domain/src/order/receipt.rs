//! Receipt snapshot handed to renderers and the history log.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::money::{Money, TaxRate};

use super::{OrderEvent, OrderFinalizedData, PaymentMethod};

/// One printed line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// Everything a receipt renderer needs, detached from the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptData {
    pub order_id: OrderId,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub tax: Money,
    pub tax_rate: TaxRate,
    pub total: Money,
    pub payment_method: PaymentMethod,
}

/// An order that has been paid for. No further changes are possible.
#[derive(Debug, Clone)]
pub struct FinalizedOrder {
    pub(super) receipt: ReceiptData,
    pub(super) created_at: DateTime<Utc>,
    pub(super) finalized_at: DateTime<Utc>,
}

impl FinalizedOrder {
    /// Returns the order ID.
    pub fn order_id(&self) -> OrderId {
        self.receipt.order_id
    }

    /// Returns the amount paid.
    pub fn total(&self) -> Money {
        self.receipt.total
    }

    /// Returns the receipt snapshot.
    pub fn receipt(&self) -> &ReceiptData {
        &self.receipt
    }

    /// Returns when the order was opened.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the order was closed.
    pub fn finalized_at(&self) -> DateTime<Utc> {
        self.finalized_at
    }

    /// Converts into the event recorded by the read side.
    pub fn into_event(self) -> OrderEvent {
        OrderEvent::OrderFinalized(OrderFinalizedData {
            receipt: self.receipt,
            created_at: self.created_at,
            finalized_at: self.finalized_at,
        })
    }
}
