//! Receipt rendering collaborators.
//!
//! Renderers only ever see a [`ReceiptData`] snapshot. They never touch the
//! live order.

mod memory;
mod text;

pub use memory::InMemoryReceiptRenderer;
pub use text::{TextReceiptRenderer, format_receipt};

use domain::ReceiptData;
use thiserror::Error;

/// Reference to a rendered receipt document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReceipt {
    /// Where the document can be found, e.g. a file path.
    pub reference: String,
}

/// Errors raised while rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing the document failed.
    #[error("Failed to write receipt: {0}")]
    Io(#[from] std::io::Error),

    /// The renderer is not accepting work.
    #[error("Receipt renderer unavailable: {0}")]
    Unavailable(String),
}

/// Trait for turning a receipt snapshot into a printable document.
pub trait ReceiptRenderer: Send + Sync {
    /// Renders the receipt and returns a reference to the document.
    fn render(&self, receipt: &ReceiptData) -> Result<RenderedReceipt, ReceiptError>;
}
