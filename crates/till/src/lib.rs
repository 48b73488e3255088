//! Till session for the café kiosk.
//!
//! A [`TillSession`] owns the single order being rung up, resolves menu
//! selections against the [`Catalog`](domain::Catalog), and runs checkout:
//! 1. Reject an empty cart
//! 2. Render the receipt from an immutable snapshot
//! 3. Finalize the order and record it in history and analytics
//! 4. Open a fresh order for the next customer
//!
//! If rendering fails the checkout stops before step 3 and nothing changes.

pub mod error;
pub mod receipt;
pub mod session;

pub use error::{Result, TillError};
pub use receipt::{
    InMemoryReceiptRenderer, ReceiptError, ReceiptRenderer, RenderedReceipt, TextReceiptRenderer,
    format_receipt,
};
pub use session::{CheckoutOutcome, TillSession};
