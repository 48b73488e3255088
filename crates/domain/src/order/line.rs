//! Cart line entries.

use std::num::NonZeroU32;

use serde::Serialize;

use crate::catalog::Item;
use crate::money::Money;

/// An item in the cart together with how many were ordered.
///
/// The quantity is never zero: [`LineEntry::decrement`] reports exhaustion
/// instead of producing an empty line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineEntry {
    item: Item,
    quantity: NonZeroU32,
}

/// Outcome of taking one unit off a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decrement {
    /// The line still holds this many units.
    Remaining(NonZeroU32),
    /// The last unit was taken; the line must be dropped.
    Exhausted,
}

impl LineEntry {
    /// Starts a line with a single unit of `item`.
    pub fn new(item: Item) -> Self {
        Self {
            item,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Returns the item.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Returns the item name, which keys the line in an order.
    pub fn name(&self) -> &str {
        self.item.name()
    }

    /// Returns the unit price.
    pub fn unit_price(&self) -> Money {
        self.item.price()
    }

    /// Returns the number of units.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Returns unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.item.price().multiply(self.quantity.get())
    }

    /// Adds one unit and returns the new quantity.
    pub fn increment(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_add(1);
        self.quantity.get()
    }

    /// Takes one unit off the line.
    ///
    /// A line holding a single unit is left untouched and reported as
    /// [`Decrement::Exhausted`]; the owner removes it.
    pub fn decrement(&mut self) -> Decrement {
        match NonZeroU32::new(self.quantity.get() - 1) {
            Some(remaining) => {
                self.quantity = remaining;
                Decrement::Remaining(remaining)
            }
            None => Decrement::Exhausted,
        }
    }
}
