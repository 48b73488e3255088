//! Money and tax value objects.

use serde::{Deserialize, Serialize};

/// Currency prefix printed in front of every amount.
pub const CURRENCY_PREFIX: &str = "Rs.";

/// Money amount represented in hundredths to avoid floating point issues.
///
/// `Money::from_cents(15435)` displays as `Rs.154.35`. Arithmetic saturates
/// at the `i64` bounds rather than overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from hundredths.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from a whole rupee value.
    pub const fn from_rupees(rupees: i64) -> Self {
        Self {
            cents: rupees * 100,
        }
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in hundredths.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the whole-rupee portion.
    pub fn rupees(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the hundredths remaining after the whole-rupee portion.
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents.saturating_mul(i64::from(quantity)),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{CURRENCY_PREFIX}{}.{:02}",
            self.rupees().abs(),
            self.cents_part()
        )
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents.saturating_sub(rhs.cents),
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents = self.cents.saturating_add(rhs.cents);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// A tax rate expressed in basis points (1/100 of a percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate {
    bps: u32,
}

/// Goods and services tax charged on every order: 5%.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(500);

impl TaxRate {
    const BPS_PER_UNIT: i64 = 10_000;

    /// Creates a tax rate from basis points (`500` is 5%).
    pub const fn from_bps(bps: u32) -> Self {
        Self { bps }
    }

    /// Returns the rate in basis points.
    pub fn bps(&self) -> u32 {
        self.bps
    }

    /// Computes the tax owed on `amount`, rounded half away from zero to the
    /// nearest hundredth.
    pub fn apply(&self, amount: Money) -> Money {
        let scaled = i128::from(amount.cents()) * i128::from(self.bps);
        let unit = i128::from(Self::BPS_PER_UNIT);
        let half = unit / 2;
        let rounded = if scaled >= 0 {
            (scaled + half) / unit
        } else {
            (scaled - half) / unit
        };
        // |amount × bps / 10_000| never exceeds |amount| for rates up to 100%.
        Money::from_cents(i64::try_from(rounded).unwrap_or(i64::MAX))
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.bps / 100;
        let frac = self.bps % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}
