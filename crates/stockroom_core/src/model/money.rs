//! Fixed-point money amount.
//!
//! Amounts are stored as signed minor units (cents) so arithmetic is exact.
//! Serialized as the raw integer.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

const MINOR_PER_MAJOR: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Builds an amount from minor units, e.g. `Money::from_minor(15075)` is `150.75`.
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Builds an amount from whole major units.
    pub const fn from_major(major: i64) -> Self {
        Self(major * MINOR_PER_MAJOR)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// `None` when the result leaves the `i64` range of minor units.
    pub const fn checked_sub(self, rhs: Money) -> Option<Money> {
        match self.0.checked_sub(rhs.0) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }
}

// Operators saturate at the `i64` bounds; use `checked_sub` to detect that.

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = MINOR_PER_MAJOR.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / per, abs % per)
    }
}

#[cfg(test)]
mod tests {
    use super::Money;

    #[test]
    fn display_pads_minor_units() {
        assert_eq!(Money::from_minor(15075).to_string(), "150.75");
        assert_eq!(Money::from_minor(30000).to_string(), "300.00");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
    }

    #[test]
    fn display_keeps_sign_for_negative_amounts() {
        assert_eq!(Money::from_minor(-250).to_string(), "-2.50");
        assert_eq!(Money::from_minor(-5).to_string(), "-0.05");
    }

    #[test]
    fn arithmetic_is_exact() {
        let balance = Money::from_major(1000) - Money::from_minor(15075);
        assert_eq!(balance, Money::from_minor(84925));
        assert_eq!(balance + Money::from_minor(75), Money::from_major(850));
    }

    #[test]
    fn extreme_amounts_saturate_instead_of_overflowing() {
        let floor = Money::from_minor(i64::MIN + 1);
        assert_eq!(floor - Money::from_major(1), Money::from_minor(i64::MIN));
        assert_eq!(floor.checked_sub(Money::from_major(1)), None);
        assert_eq!(
            Money::from_minor(i64::MAX) + Money::from_minor(1),
            Money::from_minor(i64::MAX)
        );
        assert_eq!(
            Money::from_major(5).checked_sub(Money::from_major(2)),
            Some(Money::from_major(3))
        );
    }
}
