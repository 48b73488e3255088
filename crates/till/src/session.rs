//! Till session: the one live order plus the operator's read models.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::{Catalog, DomainEvent, Order, OrderError, OrderEvent, PaymentMethod, ReceiptData};
use projections::{OrderHistoryView, Projection, SalesAnalyticsView};

use crate::error::{Result, TillError};
use crate::receipt::{ReceiptRenderer, RenderedReceipt};

/// What a successful checkout hands back to the kiosk.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// Snapshot the receipt was rendered from.
    pub receipt: ReceiptData,

    /// Reference returned by the renderer.
    pub document: RenderedReceipt,

    /// When the order was closed.
    pub finalized_at: DateTime<Utc>,
}

/// Drives one kiosk: resolves menu selections, owns the current order and
/// runs checkouts.
///
/// Checkout renders the receipt first and only finalizes the order once the
/// renderer succeeded. A failed render leaves the cart, the order ID and the
/// history exactly as they were.
pub struct TillSession<R: ReceiptRenderer> {
    catalog: Arc<Catalog>,
    order: Order,
    renderer: R,
    history: OrderHistoryView,
    analytics: SalesAnalyticsView,
}

impl<R: ReceiptRenderer> TillSession<R> {
    /// Opens a session with an empty cart.
    pub fn new(catalog: Arc<Catalog>, renderer: R) -> Self {
        let order = Order::new();
        tracing::info!(order_id = %order.id(), items = catalog.item_count(), "till session opened");
        Self {
            catalog,
            order,
            renderer,
            history: OrderHistoryView::new(),
            analytics: SalesAnalyticsView::new(),
        }
    }

    /// Returns the menu.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the order being rung up.
    pub fn current_order(&self) -> &Order {
        &self.order
    }

    /// Returns the receipt renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the completed-order log.
    pub fn history(&self) -> &OrderHistoryView {
        &self.history
    }

    /// Returns the sales figures.
    pub fn analytics(&self) -> &SalesAnalyticsView {
        &self.analytics
    }

    /// Adds one unit of a menu item to the cart.
    #[tracing::instrument(skip(self))]
    pub fn add(&mut self, category: &str, name: &str) -> Result<()> {
        let item = self
            .catalog
            .find_by_name(category, name)
            .ok_or_else(|| TillError::ItemNotFound {
                category: category.to_string(),
                name: name.to_string(),
            })?;

        let event = self.order.add_item(item);
        metrics::counter!("till_items_added_total").increment(1);
        self.record(event);
        Ok(())
    }

    /// Takes one unit of `name` off the cart. Returns false if the item was
    /// not in the cart.
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, name: &str) -> bool {
        match self.order.remove_item(name) {
            Some(event) => {
                metrics::counter!("till_items_removed_total").increment(1);
                self.record(event);
                true
            }
            None => {
                tracing::debug!(order_id = %self.order.id(), "nothing to remove");
                false
            }
        }
    }

    /// Empties the cart without starting a new order.
    #[tracing::instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        if let Some(event) = self.order.clear() {
            metrics::counter!("till_carts_cleared_total").increment(1);
            tracing::info!(order_id = %self.order.id(), "cart cleared");
            self.record(event);
        }
    }

    /// Pays for the current order.
    ///
    /// On success the order is recorded in history and a fresh, empty order
    /// takes its place.
    #[tracing::instrument(skip(self), fields(order_id = %self.order.id()))]
    pub fn checkout(&mut self, payment_method: PaymentMethod) -> Result<CheckoutOutcome> {
        if self.order.is_empty() {
            metrics::counter!("till_checkouts_rejected_total", "reason" => "empty_order")
                .increment(1);
            tracing::warn!("checkout rejected: cart is empty");
            return Err(OrderError::EmptyOrder.into());
        }

        let snapshot = self.order.to_receipt_data(&payment_method);
        let document = match self.renderer.render(&snapshot) {
            Ok(document) => document,
            Err(err) => {
                metrics::counter!("till_checkouts_rejected_total", "reason" => "render_failed")
                    .increment(1);
                tracing::warn!(error = %err, "checkout abandoned: receipt not rendered");
                return Err(err.into());
            }
        };

        let order = std::mem::take(&mut self.order);
        let finalized = match order.finalize(payment_method) {
            Ok(finalized) => finalized,
            // Unreachable after the emptiness check above; kept so the order
            // is never dropped.
            Err(rejected) => {
                let (reason, order) = rejected.into_parts();
                self.order = order;
                return Err(reason.into());
            }
        };

        let outcome = CheckoutOutcome {
            receipt: finalized.receipt().clone(),
            document,
            finalized_at: finalized.finalized_at(),
        };

        metrics::counter!("till_orders_finalized_total").increment(1);
        match u64::try_from(outcome.receipt.total.cents()) {
            Ok(cents) => metrics::counter!("till_revenue_cents_total").increment(cents),
            Err(_) => tracing::warn!(
                total = %outcome.receipt.total,
                "negative order total left out of revenue counter"
            ),
        }
        tracing::info!(
            total = %outcome.receipt.total,
            payment_method = %outcome.receipt.payment_method,
            document = %outcome.document.reference,
            next_order_id = %self.order.id(),
            "order finalized"
        );

        self.record(finalized.into_event());
        Ok(outcome)
    }

    fn record(&mut self, event: OrderEvent) {
        tracing::debug!(
            event_type = event.event_type(),
            order_id = %event.order_id(),
            "order event"
        );
        self.history.handle(&event);
        self.analytics.handle(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::InMemoryReceiptRenderer;
    use domain::Money;

    fn session() -> TillSession<InMemoryReceiptRenderer> {
        TillSession::new(Arc::new(Catalog::cafe_menu()), InMemoryReceiptRenderer::new())
    }

    #[test]
    fn test_add_resolves_through_catalog() {
        let mut till = session();
        till.add("Coffee", "Latte").unwrap();
        till.add("Coffee", "Latte").unwrap();

        assert_eq!(till.current_order().line("Latte").unwrap().quantity(), 2);
        assert_eq!(till.current_order().subtotal(), Money::from_rupees(270));
    }

    #[test]
    fn test_add_unknown_item_fails() {
        let mut till = session();
        let result = till.add("Tea", "Latte");

        assert!(matches!(result, Err(TillError::ItemNotFound { .. })));
        assert!(till.current_order().is_empty());
    }

    #[test]
    fn test_remove() {
        let mut till = session();
        till.add("Tea", "Green Tea").unwrap();

        assert!(till.remove("Green Tea"));
        assert!(!till.remove("Green Tea"));
        assert!(till.current_order().is_empty());
    }

    #[test]
    fn test_clear_cart_keeps_order_id() {
        let mut till = session();
        let order_id = till.current_order().id();
        till.add("Add-ons", "Soy Milk").unwrap();

        till.clear_cart();

        assert!(till.current_order().is_empty());
        assert_eq!(till.current_order().id(), order_id);
    }

    #[test]
    fn test_checkout_starts_new_order() {
        let mut till = session();
        let order_id = till.current_order().id();
        till.add("Coffee", "Mocha").unwrap();

        let outcome = till.checkout(PaymentMethod::cash()).unwrap();

        assert_eq!(outcome.receipt.order_id, order_id);
        assert_ne!(till.current_order().id(), order_id);
        assert!(till.current_order().is_empty());
        assert_eq!(till.history().len(), 1);
        assert_eq!(till.renderer().rendered_count(), 1);
    }

    #[test]
    fn test_empty_checkout_rejected() {
        let mut till = session();
        let order_id = till.current_order().id();

        let result = till.checkout(PaymentMethod::card());

        assert!(matches!(result, Err(TillError::Order(OrderError::EmptyOrder))));
        assert_eq!(till.current_order().id(), order_id);
        assert!(till.history().is_empty());
        assert_eq!(till.renderer().rendered_count(), 0);
    }

    #[test]
    fn test_render_failure_keeps_cart() {
        let mut till = session();
        let order_id = till.current_order().id();
        till.add("Coffee", "Espresso").unwrap();
        till.renderer().set_fail_on_render(true);

        let result = till.checkout(PaymentMethod::upi());

        assert!(matches!(result, Err(TillError::Receipt(_))));
        assert_eq!(till.current_order().id(), order_id);
        assert_eq!(till.current_order().line_count(), 1);
        assert!(till.history().is_empty());
        assert_eq!(till.analytics().order_count(), 0);
    }
}
