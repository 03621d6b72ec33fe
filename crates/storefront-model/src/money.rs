#![forbid(unsafe_code)]

//! Prices in integer minor units.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// An amount of lempiras stored as centavos.
///
/// Arithmetic saturates instead of wrapping.
///
/// ```
/// use storefront_model::Money;
///
/// let shirt = Money::from_major(2250);
/// assert_eq!(shirt.times(2).to_string(), "L 4500.00");
/// assert_eq!(Money::from_minor(1005).to_string(), "L 10.05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Create from minor units (centavos).
    #[inline]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Create from whole lempiras.
    #[inline]
    pub const fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(100))
    }

    /// The amount in minor units.
    #[inline]
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Multiply by a quantity.
    #[inline]
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L {}.{:02}", self.0 / 100, self.0 % 100)
    }
}
