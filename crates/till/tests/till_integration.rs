//! End-to-end till scenarios.

use std::sync::Arc;

use domain::{Catalog, Money, OrderError, PaymentMethod};
use till::{InMemoryReceiptRenderer, TextReceiptRenderer, TillError, TillSession};

fn memory_till() -> TillSession<InMemoryReceiptRenderer> {
    TillSession::new(Arc::new(Catalog::cafe_menu()), InMemoryReceiptRenderer::new())
}

#[test]
fn test_latte_with_extra_milk_paid_by_upi() {
    let mut till = memory_till();
    let order_id = till.current_order().id();

    till.add("Coffee", "Latte").unwrap();
    till.add("Add-ons", "Extra Milk").unwrap();
    let outcome = till.checkout(PaymentMethod::upi()).unwrap();

    assert_eq!(outcome.receipt.order_id, order_id);
    assert_eq!(outcome.receipt.subtotal, Money::from_rupees(147));
    assert_eq!(outcome.receipt.tax, Money::from_cents(735));
    assert_eq!(outcome.receipt.total, Money::from_cents(15435));
    assert_eq!(outcome.document.reference, "memory://receipt/1");

    assert_ne!(till.current_order().id(), order_id);
    assert!(till.current_order().is_empty());

    let entry = till.history().latest().unwrap();
    assert_eq!(till.history().len(), 1);
    assert_eq!(entry.order_id, order_id);
    assert_eq!(entry.total, Money::from_cents(15435));
    assert_eq!(entry.payment_method.as_str(), "UPI");
}

#[test]
fn test_empty_checkout_changes_nothing() {
    let mut till = memory_till();
    let order_id = till.current_order().id();

    let err = till.checkout(PaymentMethod::cash()).unwrap_err();

    assert!(matches!(err, TillError::Order(OrderError::EmptyOrder)));
    assert_eq!(till.current_order().id(), order_id);
    assert!(till.history().is_empty());
    assert_eq!(till.analytics().order_count(), 0);
}

#[test]
fn test_render_failure_then_retry() {
    let mut till = memory_till();
    let order_id = till.current_order().id();
    till.add("Coffee", "Espresso").unwrap();
    till.add("Coffee", "Espresso").unwrap();
    till.add("Tea", "Masala Chai").unwrap();

    till.renderer().set_fail_on_render(true);
    let err = till.checkout(PaymentMethod::card()).unwrap_err();
    assert!(matches!(err, TillError::Receipt(_)));
    assert_eq!(till.current_order().id(), order_id);
    assert_eq!(till.current_order().total_quantity(), 3);
    assert!(till.history().is_empty());

    till.renderer().set_fail_on_render(false);
    let outcome = till.checkout(PaymentMethod::card()).unwrap();
    assert_eq!(outcome.receipt.order_id, order_id);
    assert_eq!(outcome.receipt.total, Money::from_cents(26775));
    assert_eq!(till.renderer().rendered_count(), 1);
}

#[test]
fn test_catalog_miss_reports_item() {
    let mut till = memory_till();

    let err = till.add("Snacks", "Bagel").unwrap_err();

    match err {
        TillError::ItemNotFound { category, name } => {
            assert_eq!(category, "Snacks");
            assert_eq!(name, "Bagel");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_analytics_accumulate_across_orders() {
    let mut till = memory_till();

    till.add("Coffee", "Latte").unwrap();
    till.add("Add-ons", "Extra Milk").unwrap();
    till.checkout(PaymentMethod::upi()).unwrap();

    till.add("Coffee", "Espresso").unwrap();
    till.add("Coffee", "Espresso").unwrap();
    till.add("Tea", "Masala Chai").unwrap();
    till.checkout(PaymentMethod::cash()).unwrap();

    let analytics = till.analytics();
    assert_eq!(analytics.order_count(), 2);
    assert_eq!(analytics.units_sold(), 5);
    assert_eq!(analytics.total_revenue(), Money::from_cents(15435 + 26775));
    assert_eq!(till.history().len(), 2);
}

#[test]
fn test_text_renderer_writes_receipt_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut till = TillSession::new(
        Arc::new(Catalog::cafe_menu()),
        TextReceiptRenderer::new(dir.path().join("receipts")),
    );

    till.add("Coffee", "Latte").unwrap();
    till.add("Add-ons", "Extra Milk").unwrap();
    let outcome = till.checkout(PaymentMethod::upi()).unwrap();

    let contents = std::fs::read_to_string(&outcome.document.reference).unwrap();
    assert!(contents.contains("Payment Method: UPI"));
    assert!(contents.contains("Rs.154.35"));
}
