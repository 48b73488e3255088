//! Plain-text receipts written to a directory.

use std::path::{Path, PathBuf};

use chrono::Local;
use domain::ReceiptData;

use super::{ReceiptError, ReceiptRenderer, RenderedReceipt};

const WIDTH: usize = 42;
const TITLE: &str = "Café Receipt";

/// Writes each receipt as `receipt_<timestamp>_<order>.txt` under a directory.
#[derive(Debug, Clone)]
pub struct TextReceiptRenderer {
    output_dir: PathBuf,
}

impl TextReceiptRenderer {
    /// Creates a renderer writing into `output_dir`, created on first use.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn file_name(receipt: &ReceiptData) -> String {
        format!(
            "receipt_{}_{}.txt",
            Local::now().format("%Y%m%d_%H%M%S"),
            receipt.order_id.short()
        )
    }
}

impl ReceiptRenderer for TextReceiptRenderer {
    fn render(&self, receipt: &ReceiptData) -> Result<RenderedReceipt, ReceiptError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(Self::file_name(receipt));
        std::fs::write(&path, format_receipt(receipt))?;

        tracing::debug!(path = %path.display(), order_id = %receipt.order_id, "receipt written");
        Ok(RenderedReceipt {
            reference: path.display().to_string(),
        })
    }
}

/// Lays out a receipt as fixed-width text.
pub fn format_receipt(receipt: &ReceiptData) -> String {
    let rule = "-".repeat(WIDTH);
    let mut out = Vec::with_capacity(receipt.lines.len() + 9);

    out.push(TITLE.to_string());
    out.push(format!("Order ID: {}", receipt.order_id.short()));
    out.push(format!("Payment Method: {}", receipt.payment_method));
    out.push(rule.clone());
    for line in &receipt.lines {
        out.push(row(
            &format!("{} x{}", line.name, line.quantity),
            &line.line_total.to_string(),
        ));
    }
    out.push(rule);
    out.push(row("Subtotal:", &receipt.subtotal.to_string()));
    out.push(row(
        &format!("GST ({}):", receipt.tax_rate),
        &receipt.tax.to_string(),
    ));
    out.push(row("Total:", &receipt.total.to_string()));

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn row(left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = WIDTH.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}
