//! Built-in café menu.

/// Menu rows as `(category, [(item, price in rupees)])`, in display order.
pub const CAFE_MENU: &[(&str, &[(&str, i64)])] = &[
    (
        "Coffee",
        &[
            ("Espresso", 120),
            ("Latte", 135),
            ("Cappuccino", 113),
            ("Americano", 140),
            ("Mocha", 155),
        ],
    ),
    (
        "Tea",
        &[("Masala Chai", 15), ("Green Tea", 20), ("Lemon Tea", 25)],
    ),
    (
        "Cold Beverages",
        &[("Cold Coffee", 40), ("Iced Latte", 55), ("Milkshake", 65)],
    ),
    (
        "Non-Coffee Drinks",
        &[
            ("Hot Chocolate", 80),
            ("Matcha Latte", 88),
            ("Fresh Lime Soda", 33),
        ],
    ),
    (
        "Add-ons",
        &[("Extra Milk", 12), ("Soy Milk", 41), ("Whipped Cream", 32)],
    ),
];
