//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of stored monetary
//! outcomes using rust_decimal, so that amounts like 0.10 are exact and
//! discount caps compare without floating-point drift.
//!
//! Intermediate products (price times quantity, subtotal times rate) are
//! plain `Decimal` values carrying full precision. Only values that are
//! stored back onto a record become `Money`, and every `Money` holds
//! exactly two fractional digits rounded half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of fractional digits carried by every stored amount
pub const MONEY_SCALE: u32 = 2;

/// Rounds a value to exactly two fractional digits, half away from zero
///
/// The result is rescaled so that `30` becomes `30.00`.
///
/// # Example
///
/// ```rust
/// use core_kernel::round2;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round2(dec!(2.345)).to_string(), "2.35");
/// assert_eq!(round2(dec!(-2.345)).to_string(), "-2.35");
/// assert_eq!(round2(dec!(30)).to_string(), "30.00");
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Negative amount cannot be stored: {0}")]
    NegativeAmount(Decimal),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A stored monetary amount
///
/// Invariants: the amount is never negative and always has exactly
/// two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a Money value, rounding to two fractional digits
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::NegativeAmount` if the rounded amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        let mut rounded = round2(amount);
        if rounded < Decimal::ZERO {
            return Err(MoneyError::NegativeAmount(rounded));
        }
        // -0.00 can come out of rounding a tiny negative product
        rounded.set_sign_positive(true);
        Ok(Self { amount: rounded })
    }

    /// Creates Money from minor units (cents)
    pub fn from_minor(minor_units: i64) -> Result<Self, MoneyError> {
        Self::new(Decimal::new(minor_units, MONEY_SCALE))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0.00) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        !self.amount.is_zero()
    }

    /// Checked addition
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        let sum = self.amount.checked_add(other.amount).ok_or(MoneyError::Overflow)?;
        Self::new(sum)
    }

    /// Checked subtraction
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::NegativeAmount` if `other` exceeds `self`.
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        let difference = self.amount.checked_sub(other.amount).ok_or(MoneyError::Overflow)?;
        Self::new(difference)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.amount)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.amount
    }
}

/// A rate expressed as a decimal fraction (0.05 is 5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// The zero rate
    pub fn zero() -> Self {
        Self { value: Decimal::ZERO }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Returns true if the rate lies within [0, 1]
    pub fn is_fraction(&self) -> bool {
        self.value >= Decimal::ZERO && self.value <= Decimal::ONE
    }

    /// Applies this rate to a money amount
    ///
    /// The product is returned un-rounded; callers round when storing.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the product exceeds the decimal range.
    pub fn apply(&self, money: &Money) -> Result<Decimal, MoneyError> {
        money
            .amount()
            .checked_mul(self.value)
            .ok_or(MoneyError::Overflow)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.5)).unwrap();
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.to_string(), "100.50");
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050).unwrap();
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_negative_money_rejected() {
        assert_eq!(
            Money::new(dec!(-0.01)),
            Err(MoneyError::NegativeAmount(dec!(-0.01)))
        );
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let m = Money::new(dec!(-0.004)).unwrap();
        assert!(m.is_zero());
        assert!(!m.amount().is_sign_negative());
    }

    #[test]
    fn test_checked_sub_below_zero() {
        let a = Money::new(dec!(10)).unwrap();
        let b = Money::new(dec!(10.01)).unwrap();
        assert!(matches!(a.checked_sub(&b), Err(MoneyError::NegativeAmount(_))));
        assert_eq!(b.checked_sub(&a).unwrap().amount(), dec!(0.01));
    }

    #[test]
    fn test_rate_application_is_unrounded() {
        let rate = Rate::new(dec!(0.333));
        let amount = Money::new(dec!(10.00)).unwrap();
        assert_eq!(rate.apply(&amount).unwrap(), dec!(3.33000));
        assert_eq!(Rate::from_percentage(dec!(5)).as_decimal(), dec!(0.05));
    }

    #[test]
    fn test_rate_application_overflow() {
        let amount = Money::new(Decimal::MAX).unwrap();
        assert_eq!(Rate::new(dec!(2)).apply(&amount), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new(dec!(0.30)).to_string(), "30%");
        assert_eq!(Rate::new(dec!(0.125)).to_string(), "12.5%");
    }
}
