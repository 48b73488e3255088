//! Domain layer for the café till.
//!
//! This crate provides:
//! - [`Catalog`] of menu items grouped by category
//! - [`Money`] and the fixed [`TAX_RATE`]
//! - the [`Order`] cart aggregate with its [`LineEntry`] lines
//! - [`ReceiptData`] snapshots and [`OrderEvent`]s for the read side

pub mod catalog;
pub mod event;
pub mod money;
pub mod order;

pub use catalog::{CAFE_MENU, Catalog, CatalogEntry, CatalogError, Category, Item};
pub use event::DomainEvent;
pub use money::{CURRENCY_PREFIX, Money, TAX_RATE, TaxRate};
pub use order::{
    CartClearedData, Decrement, FinalizedOrder, ItemAddedData, ItemRemovedData, LineEntry, Order,
    OrderError, OrderEvent, OrderFinalizedData, PaymentMethod, ReceiptData, ReceiptLine,
    RejectedCheckout,
};
