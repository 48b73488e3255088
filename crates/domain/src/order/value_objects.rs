//! Value objects for the order domain.

use serde::{Deserialize, Serialize};

/// How the customer paid.
///
/// The till treats this as an opaque label. `Cash`, `UPI` and `Card` are the
/// methods the kiosk offers, but any label is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethod(String);

impl PaymentMethod {
    /// Creates a payment method from any label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Cash payment.
    pub fn cash() -> Self {
        Self::new("Cash")
    }

    /// UPI transfer.
    pub fn upi() -> Self {
        Self::new("UPI")
    }

    /// Card payment.
    pub fn card() -> Self {
        Self::new("Card")
    }

    /// Returns the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PaymentMethod {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PaymentMethod {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PaymentMethod {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_methods() {
        assert_eq!(PaymentMethod::cash().as_str(), "Cash");
        assert_eq!(PaymentMethod::upi().as_str(), "UPI");
        assert_eq!(PaymentMethod::card().as_str(), "Card");
    }

    #[test]
    fn test_free_text_label_is_kept_verbatim() {
        let method: PaymentMethod = "Gift Voucher".into();
        assert_eq!(method.to_string(), "Gift Voucher");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&PaymentMethod::card()).unwrap();
        assert_eq!(json, "\"Card\"");
    }
}
