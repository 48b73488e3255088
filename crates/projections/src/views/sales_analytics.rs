//! Sales analytics read model: order count and revenue.

use domain::{Money, OrderEvent, PaymentMethod};
use serde::Serialize;

use crate::projection::{Projection, ProjectionPosition};

/// Revenue collected through one payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethodTotals {
    pub payment_method: PaymentMethod,
    pub order_count: u64,
    pub revenue: Money,
}

/// Point-in-time copy of the analytics figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub order_count: u64,
    pub units_sold: u64,
    pub total_revenue: Money,
    pub average_order_value: Option<Money>,
    pub by_payment_method: Vec<PaymentMethodTotals>,
}

/// Running totals over completed orders.
#[derive(Debug, Clone, Default)]
pub struct SalesAnalyticsView {
    order_count: u64,
    units_sold: u64,
    total_revenue: Money,
    by_payment_method: Vec<PaymentMethodTotals>,
    position: ProjectionPosition,
}

impl SalesAnalyticsView {
    /// Creates an empty analytics view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed orders.
    pub fn order_count(&self) -> u64 {
        self.order_count
    }

    /// Number of units sold across all completed orders.
    pub fn units_sold(&self) -> u64 {
        self.units_sold
    }

    /// Sum of order totals, tax included.
    pub fn total_revenue(&self) -> Money {
        self.total_revenue
    }

    /// Revenue per order, rounded half up to the cent. `None` before the
    /// first sale.
    pub fn average_order_value(&self) -> Option<Money> {
        let count = i64::try_from(self.order_count).ok().filter(|c| *c > 0)?;
        let cents = self.total_revenue.cents();
        Some(Money::from_cents((cents + count / 2) / count))
    }

    /// Totals per payment method, in order of first use.
    pub fn revenue_by_payment_method(&self) -> &[PaymentMethodTotals] {
        &self.by_payment_method
    }

    /// Returns a serializable copy of every figure.
    pub fn summary(&self) -> SalesSummary {
        SalesSummary {
            order_count: self.order_count,
            units_sold: self.units_sold,
            total_revenue: self.total_revenue,
            average_order_value: self.average_order_value(),
            by_payment_method: self.by_payment_method.clone(),
        }
    }
}

impl Projection for SalesAnalyticsView {
    fn name(&self) -> &'static str {
        "SalesAnalyticsView"
    }

    fn handle(&mut self, event: &OrderEvent) {
        if let OrderEvent::OrderFinalized(data) = event {
            let receipt = &data.receipt;
            self.order_count += 1;
            self.units_sold += receipt
                .lines
                .iter()
                .map(|l| u64::from(l.quantity))
                .sum::<u64>();
            self.total_revenue += receipt.total;

            match self
                .by_payment_method
                .iter_mut()
                .find(|t| t.payment_method == receipt.payment_method)
            {
                Some(totals) => {
                    totals.order_count += 1;
                    totals.revenue += receipt.total;
                }
                None => self.by_payment_method.push(PaymentMethodTotals {
                    payment_method: receipt.payment_method.clone(),
                    order_count: 1,
                    revenue: receipt.total,
                }),
            }
        }

        self.position = self.position.advance();
    }

    fn position(&self) -> ProjectionPosition {
        self.position
    }
}
