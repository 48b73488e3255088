use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Catalog, Order, OrderEvent, PaymentMethod};
use projections::{OrderHistoryView, Projection, SalesAnalyticsView};

/// Builds N finalized-order events with a couple of lines each.
fn finalized_events(n: usize) -> Vec<OrderEvent> {
    let catalog = Catalog::cafe_menu();
    let methods = [PaymentMethod::cash(), PaymentMethod::upi(), PaymentMethod::card()];
    let coffee = catalog.items_in("Coffee");
    let add_ons = catalog.items_in("Add-ons");

    (0..n)
        .map(|i| {
            let mut order = Order::new();
            order.add_item(&coffee[i % coffee.len()]);
            order.add_item(&add_ons[i % add_ons.len()]);
            order
                .finalize(methods[i % methods.len()].clone())
                .unwrap()
                .into_event()
        })
        .collect()
}

fn bench_history_1000_orders(c: &mut Criterion) {
    let events = finalized_events(1000);

    c.bench_function("projections/history_1000_orders", |b| {
        b.iter(|| {
            let mut view = OrderHistoryView::new();
            for event in &events {
                view.handle(event);
            }
            std::hint::black_box(view.len());
        });
    });
}

fn bench_analytics_1000_orders(c: &mut Criterion) {
    let events = finalized_events(1000);

    c.bench_function("projections/analytics_1000_orders", |b| {
        b.iter(|| {
            let mut view = SalesAnalyticsView::new();
            for event in &events {
                view.handle(event);
            }
            std::hint::black_box(view.summary());
        });
    });
}

criterion_group!(benches, bench_history_1000_orders, bench_analytics_1000_orders);
criterion_main!(benches);
