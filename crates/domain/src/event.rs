//! Domain event trait.

use common::OrderId;
use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events record facts that have already happened to an order.
/// They are immutable and named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name, used for log fields and metric labels.
    fn event_type(&self) -> &'static str;

    /// Returns the order the event belongs to.
    fn order_id(&self) -> OrderId;
}
