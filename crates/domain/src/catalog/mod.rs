//! Static menu catalog.
//!
//! The catalog is reference data: it is built once at startup, validated,
//! and never mutated afterwards. Lookups by category and by name are the
//! only operations.

mod item;
mod menu;

pub use item::Item;
pub use menu::CAFE_MENU;

use serde::Deserialize;
use thiserror::Error;

use crate::money::Money;

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A category name was blank.
    #[error("Category name must not be empty")]
    EmptyCategoryName,

    /// An item name was blank.
    #[error("Item name must not be empty")]
    EmptyItemName,

    /// An item had a negative price.
    #[error("Invalid price for {name}: {price} (must not be negative)")]
    NegativePrice { name: String, price: Money },

    /// An item was priced above [`Item::MAX_PRICE`].
    #[error("Invalid price for {name}: {price} (must not exceed {max})", max = Item::MAX_PRICE)]
    PriceTooHigh { name: String, price: Money },

    /// Two items in one category share a name.
    #[error("Duplicate item {name} in category {category}")]
    DuplicateItem { category: String, name: String },

    /// A menu file could not be parsed.
    #[error("Menu parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One row of a menu table: an item and the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub category: String,
    pub name: String,
    pub price_cents: i64,
}

impl CatalogEntry {
    /// Creates a menu row.
    pub fn new(category: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            price_cents: price.cents(),
        }
    }
}

/// A named group of items, in menu order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    items: Vec<Item>,
}

impl Category {
    /// Returns the category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the items in menu order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// Read-only table of purchasable items grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog from menu rows.
    ///
    /// Categories keep the order of their first appearance and items keep
    /// their row order.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let mut categories: Vec<Category> = Vec::new();

        for entry in entries {
            let category_name = entry.category.trim();
            if category_name.is_empty() {
                return Err(CatalogError::EmptyCategoryName);
            }
            let item = Item::new(entry.name, Money::from_cents(entry.price_cents))?;

            let index = match categories.iter().position(|c| c.name == category_name) {
                Some(index) => index,
                None => {
                    categories.push(Category {
                        name: category_name.to_string(),
                        items: Vec::new(),
                    });
                    categories.len() - 1
                }
            };

            let category = &mut categories[index];
            if category.items.iter().any(|i| i.name() == item.name()) {
                return Err(CatalogError::DuplicateItem {
                    category: category.name.clone(),
                    name: item.name().to_string(),
                });
            }
            category.items.push(item);
        }

        Ok(Self { categories })
    }

    /// Parses a JSON array of `{category, name, price_cents}` rows.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Returns the built-in café menu.
    pub fn cafe_menu() -> Self {
        let categories = CAFE_MENU
            .iter()
            .map(|(name, items)| Category {
                name: (*name).to_string(),
                items: items
                    .iter()
                    .map(|(item, rupees)| Item::from_static(item, Money::from_rupees(*rupees)))
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    /// Returns the category names in menu order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Returns every category with its items.
    pub fn category_list(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the items of a category, or an empty slice when the category
    /// is unknown.
    pub fn items_in(&self, category: &str) -> &[Item] {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    /// Looks up an item by name within a category.
    pub fn find_by_name(&self, category: &str, name: &str) -> Option<&Item> {
        self.items_in(category).iter().find(|i| i.name() == name)
    }

    /// Returns the total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Returns true if the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, name: &str, rupees: i64) -> CatalogEntry {
        CatalogEntry::new(category, name, Money::from_rupees(rupees))
    }

    #[test]
    fn test_from_entries_groups_by_category_in_order() {
        let catalog = Catalog::from_entries(vec![
            entry("Tea", "Green Tea", 20),
            entry("Coffee", "Latte", 135),
            entry("Tea", "Masala Chai", 15),
        ])
        .unwrap();

        let categories: Vec<_> = catalog.categories().collect();
        assert_eq!(categories, vec!["Tea", "Coffee"]);

        let teas: Vec<_> = catalog.items_in("Tea").iter().map(Item::name).collect();
        assert_eq!(teas, vec!["Green Tea", "Masala Chai"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = Catalog::cafe_menu();
        assert!(catalog.items_in("Pastries").is_empty());
    }

    #[test]
    fn test_find_by_name() {
        let catalog = Catalog::cafe_menu();
        let latte = catalog.find_by_name("Coffee", "Latte").unwrap();
        assert_eq!(latte.price(), Money::from_rupees(135));

        assert!(catalog.find_by_name("Tea", "Latte").is_none());
        assert!(catalog.find_by_name("Nope", "Latte").is_none());
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let result = Catalog::from_entries(vec![
            entry("Coffee", "Latte", 135),
            entry("Coffee", "Latte", 140),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateItem { ref name, .. }) if name == "Latte"
        ));
    }

    #[test]
    fn test_same_name_in_different_categories_allowed() {
        let catalog = Catalog::from_entries(vec![
            entry("Coffee", "Latte", 135),
            entry("Cold Beverages", "Latte", 55),
        ])
        .unwrap();
        assert_eq!(catalog.item_count(), 2);
    }

    #[test]
    fn test_blank_category_rejected() {
        let result = Catalog::from_entries(vec![entry(" ", "Latte", 135)]);
        assert!(matches!(result, Err(CatalogError::EmptyCategoryName)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Catalog::from_entries(vec![CatalogEntry {
            category: "Coffee".to_string(),
            name: "Latte".to_string(),
            price_cents: -100,
        }]);
        assert!(matches!(result, Err(CatalogError::NegativePrice { .. })));
    }

    #[test]
    fn test_oversized_price_rejected() {
        let json = format!(
            r#"[{{"category": "Coffee", "name": "Gold Latte", "price_cents": {}}}]"#,
            i64::MAX / 2 + 1
        );
        let result = Catalog::from_json_str(&json);
        assert!(matches!(
            result,
            Err(CatalogError::PriceTooHigh { ref name, .. }) if name == "Gold Latte"
        ));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"category": "Coffee", "name": "Espresso", "price_cents": 12000},
            {"category": "Add-ons", "name": "Extra Milk", "price_cents": 1200}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(
            catalog.find_by_name("Add-ons", "Extra Milk").unwrap().price(),
            Money::from_rupees(12)
        );
    }

    #[test]
    fn test_from_json_str_malformed() {
        let result = Catalog::from_json_str("{\"category\": 1}");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_cafe_menu_passes_validation() {
        let rows = CAFE_MENU.iter().flat_map(|(category, items)| {
            items
                .iter()
                .map(move |(name, rupees)| entry(category, name, *rupees))
        });
        let validated = Catalog::from_entries(rows).unwrap();
        assert_eq!(validated, Catalog::cafe_menu());
    }

    #[test]
    fn test_cafe_menu_contents() {
        let catalog = Catalog::cafe_menu();
        let categories: Vec<_> = catalog.categories().collect();
        assert_eq!(
            categories,
            vec!["Coffee", "Tea", "Cold Beverages", "Non-Coffee Drinks", "Add-ons"]
        );
        assert_eq!(catalog.item_count(), 17);
        assert_eq!(
            catalog.find_by_name("Tea", "Masala Chai").unwrap().price(),
            Money::from_rupees(15)
        );
    }
}
