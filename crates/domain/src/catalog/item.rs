//! Menu item value type.

use serde::Serialize;

use crate::money::Money;

use super::CatalogError;

/// A purchasable menu item.
///
/// Items are immutable once built. For cart purposes an item is identified
/// by its name alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    name: String,
    price: Money,
}

impl Item {
    /// Highest accepted unit price: Rs.10,00,000.00.
    pub const MAX_PRICE: Money = Money::from_rupees(1_000_000);

    /// Creates an item, rejecting blank names and prices outside
    /// `0..=MAX_PRICE`.
    pub fn new(name: impl Into<String>, price: Money) -> Result<Self, CatalogError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::EmptyItemName);
        }
        if price.is_negative() {
            return Err(CatalogError::NegativePrice {
                name: trimmed.to_string(),
                price,
            });
        }
        if price > Self::MAX_PRICE {
            return Err(CatalogError::PriceTooHigh {
                name: trimmed.to_string(),
                price,
            });
        }
        Ok(Self {
            name: trimmed.to_string(),
            price,
        })
    }

    /// Builds an item from the compiled-in menu table, which is checked by
    /// the catalog tests instead of at runtime.
    pub(super) fn from_static(name: &str, price: Money) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }

    /// Returns the item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn price(&self) -> Money {
        self.price
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item() {
        let item = Item::new("Espresso", Money::from_rupees(120)).unwrap();
        assert_eq!(item.name(), "Espresso");
        assert_eq!(item.price(), Money::from_rupees(120));
    }

    #[test]
    fn test_name_is_trimmed() {
        let item = Item::new("  Latte ", Money::from_rupees(135)).unwrap();
        assert_eq!(item.name(), "Latte");
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Item::new("   ", Money::from_rupees(10));
        assert!(matches!(result, Err(CatalogError::EmptyItemName)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Item::new("Refund", Money::from_cents(-1));
        assert!(matches!(result, Err(CatalogError::NegativePrice { .. })));
    }

    #[test]
    fn test_price_ceiling() {
        assert!(Item::new("Platter", Item::MAX_PRICE).is_ok());

        let result = Item::new("Platter", Item::MAX_PRICE + Money::from_cents(1));
        assert!(matches!(result, Err(CatalogError::PriceTooHigh { .. })));
    }

    #[test]
    fn test_zero_price_allowed() {
        let item = Item::new("Tap Water", Money::zero()).unwrap();
        assert!(item.price().is_zero());
    }

    #[test]
    fn test_display() {
        let item = Item::new("Mocha", Money::from_rupees(155)).unwrap();
        assert_eq!(item.to_string(), "Mocha - Rs.155.00");
    }
}
