//! HTTP handlers, grouped by resource.

pub mod cart;
pub mod checkout;
pub mod health;
pub mod menu;
pub mod metrics;
pub mod reports;

use tokio::sync::Mutex;
use till::{ReceiptRenderer, TillSession};

/// Shared application state accessible from all handlers.
///
/// One kiosk, one session: every request that touches the cart takes the
/// lock for the whole operation.
pub struct AppState<R: ReceiptRenderer> {
    pub till: Mutex<TillSession<R>>,
}

impl<R: ReceiptRenderer> AppState<R> {
    pub fn new(till: TillSession<R>) -> Self {
        Self {
            till: Mutex::new(till),
        }
    }
}
