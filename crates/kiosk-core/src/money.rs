//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Whole Won
//! The kiosk prices everything in won, which has no fractional subunit in
//! everyday use. A `Money` is therefore a plain signed integer count of won:
//! option modifiers may be negative (e.g. "no shot, -500"), totals never
//! involve rounding.
//!
//! ## Usage
//! ```rust
//! use kiosk_core::money::Money;
//!
//! let latte = Money::from_won(4000);
//! let iced = Money::from_won(500);
//!
//! assert_eq!((latte + iced).won(), 4500);
//! assert_eq!((latte * 2).won(), 8000);
//! assert_eq!(latte.to_string(), "4,000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole won.
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──┬──► VendingCard.total_price (price + modifiers)
///                  │
///                  └──► CartLine.subtotal ((price + modifiers) × qty)
///                                │
///                                ▼
///                       Cart.total_amount ──► Order.total_amount
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole won.
    #[inline]
    pub const fn from_won(won: i64) -> Self {
        Money(won)
    }

    /// Returns the value in won.
    #[inline]
    pub const fn won(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let unit = Money::from_won(5500);
    /// assert_eq!(unit.multiply_quantity(2).won(), 11000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount with thousands separators and no currency marker.
///
/// Currency placement ("4,500원" vs "₩4,500") is a presentation concern
/// handled by the application's config.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.0 < 0 {
            write!(f, "-{}", grouped)
        } else {
            write!(f, "{}", grouped)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_won() {
        let money = Money::from_won(4500);
        assert_eq!(money.won(), 4500);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_won(0).to_string(), "0");
        assert_eq!(Money::from_won(500).to_string(), "500");
        assert_eq!(Money::from_won(4500).to_string(), "4,500");
        assert_eq!(Money::from_won(11000).to_string(), "11,000");
        assert_eq!(Money::from_won(1234567).to_string(), "1,234,567");
        assert_eq!(Money::from_won(-1000).to_string(), "-1,000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_won(4000);
        let b = Money::from_won(500);

        assert_eq!((a + b).won(), 4500);
        assert_eq!((a - b).won(), 3500);
        assert_eq!((a * 3).won(), 12000);

        let mut c = a;
        c += b;
        c -= Money::from_won(1500);
        assert_eq!(c.won(), 3000);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::from_won(4500), Money::from_won(3000)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.won(), 7500);

        let empty: Vec<Money> = Vec::new();
        let total: Money = empty.into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_negative_modifier() {
        let base = Money::from_won(3000);
        let no_shot = Money::from_won(-500);
        let total = base + no_shot;
        assert_eq!(total.won(), 2500);
        assert!(no_shot.is_negative());
    }
}
