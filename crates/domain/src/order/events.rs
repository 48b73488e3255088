//! Order domain events.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::event::DomainEvent;
use crate::money::Money;

use super::ReceiptData;

/// Events emitted by the order aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    /// One unit of an item was added to the cart.
    ItemAdded(ItemAddedData),

    /// One unit of an item was taken off the cart.
    ItemRemoved(ItemRemovedData),

    /// Every line was removed from the cart.
    CartCleared(CartClearedData),

    /// The order was paid for and closed.
    OrderFinalized(OrderFinalizedData),
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::ItemAdded(_) => "ItemAdded",
            OrderEvent::ItemRemoved(_) => "ItemRemoved",
            OrderEvent::CartCleared(_) => "CartCleared",
            OrderEvent::OrderFinalized(_) => "OrderFinalized",
        }
    }

    fn order_id(&self) -> OrderId {
        match self {
            OrderEvent::ItemAdded(data) => data.order_id,
            OrderEvent::ItemRemoved(data) => data.order_id,
            OrderEvent::CartCleared(data) => data.order_id,
            OrderEvent::OrderFinalized(data) => data.receipt.order_id,
        }
    }
}

/// Data for ItemAdded event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemAddedData {
    pub order_id: OrderId,
    pub item_name: String,
    pub unit_price: Money,

    /// Quantity on the line after the addition.
    pub quantity: u32,
}

/// Data for ItemRemoved event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRemovedData {
    pub order_id: OrderId,
    pub item_name: String,

    /// Units left on the line; zero means the line was dropped.
    pub remaining: u32,
}

/// Data for CartCleared event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartClearedData {
    pub order_id: OrderId,
    pub lines_removed: usize,
    pub cleared_at: DateTime<Utc>,
}

/// Data for OrderFinalized event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFinalizedData {
    /// Snapshot handed to the receipt renderer.
    pub receipt: ReceiptData,

    /// When the order was opened.
    pub created_at: DateTime<Utc>,

    /// When the order was closed.
    pub finalized_at: DateTime<Utc>,
}

impl OrderEvent {
    /// Creates an ItemAdded event.
    pub fn item_added(
        order_id: OrderId,
        item_name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Self {
        OrderEvent::ItemAdded(ItemAddedData {
            order_id,
            item_name: item_name.into(),
            unit_price,
            quantity,
        })
    }

    /// Creates an ItemRemoved event.
    pub fn item_removed(order_id: OrderId, item_name: impl Into<String>, remaining: u32) -> Self {
        OrderEvent::ItemRemoved(ItemRemovedData {
            order_id,
            item_name: item_name.into(),
            remaining,
        })
    }

    /// Creates a CartCleared event.
    pub fn cart_cleared(order_id: OrderId, lines_removed: usize) -> Self {
        OrderEvent::CartCleared(CartClearedData {
            order_id,
            lines_removed,
            cleared_at: Utc::now(),
        })
    }
}
