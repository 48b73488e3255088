//! In-memory receipt renderer for tests and headless tills.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use domain::ReceiptData;

use super::{ReceiptError, ReceiptRenderer, RenderedReceipt};

#[derive(Debug, Default)]
struct InMemoryRendererState {
    rendered: Vec<ReceiptData>,
    fail_on_render: bool,
}

/// Keeps every rendered snapshot in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReceiptRenderer {
    state: Arc<Mutex<InMemoryRendererState>>,
}

impl InMemoryReceiptRenderer {
    /// Creates a new in-memory renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the renderer to fail on every render call.
    pub fn set_fail_on_render(&self, fail: bool) {
        self.lock().fail_on_render = fail;
    }

    /// Returns the number of receipts rendered.
    pub fn rendered_count(&self) -> usize {
        self.lock().rendered.len()
    }

    /// Returns copies of every rendered snapshot, oldest first.
    pub fn rendered(&self) -> Vec<ReceiptData> {
        self.lock().rendered.clone()
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryRendererState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReceiptRenderer for InMemoryReceiptRenderer {
    fn render(&self, receipt: &ReceiptData) -> Result<RenderedReceipt, ReceiptError> {
        let mut state = self.lock();

        if state.fail_on_render {
            return Err(ReceiptError::Unavailable("printer offline".to_string()));
        }

        state.rendered.push(receipt.clone());
        Ok(RenderedReceipt {
            reference: format!("memory://receipt/{}", state.rendered.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Item, Money, Order, PaymentMethod};

    fn receipt() -> ReceiptData {
        let mut order = Order::new();
        order.add_item(&Item::new("Mocha", Money::from_rupees(155)).unwrap());
        order.to_receipt_data(&PaymentMethod::card())
    }

    #[test]
    fn test_render_keeps_snapshot() {
        let renderer = InMemoryReceiptRenderer::new();
        let snapshot = receipt();

        let rendered = renderer.render(&snapshot).unwrap();

        assert_eq!(rendered.reference, "memory://receipt/1");
        assert_eq!(renderer.rendered_count(), 1);
        assert_eq!(renderer.rendered()[0], snapshot);
    }

    #[test]
    fn test_fail_on_render() {
        let renderer = InMemoryReceiptRenderer::new();
        renderer.set_fail_on_render(true);

        let result = renderer.render(&receipt());

        assert!(matches!(result, Err(ReceiptError::Unavailable(_))));
        assert_eq!(renderer.rendered_count(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let renderer = InMemoryReceiptRenderer::new();
        let handle = renderer.clone();

        renderer.render(&receipt()).unwrap();

        assert_eq!(handle.rendered_count(), 1);
    }
}
