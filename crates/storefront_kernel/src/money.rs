//! Non-negative amounts and positive quantities
//!
//! Prices, stock-independent totals, and line-item quantities are the only
//! numeric fields of the storefront schemas that carry invariants. Both types
//! here refuse to hold a value that breaks them, so an entity built from them
//! is valid by construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use crate::error::KernelError;

/// A non-negative monetary amount
///
/// The storefront is single-currency, so only the decimal amount is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a new amount, rejecting negative values
    pub fn new(amount: Decimal) -> Result<Self, KernelError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(KernelError::NegativeAmount(amount));
        }
        Ok(Self(amount))
    }

    /// Creates an amount from whole currency units
    pub fn from_whole(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds two amounts, returning `None` on overflow
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Multiplies a unit price by a quantity, returning `None` on overflow
    pub fn checked_times(&self, quantity: Quantity) -> Option<Money> {
        self.0.checked_mul(Decimal::from(quantity.get())).map(Self)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = KernelError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

/// A positive line-item quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// Creates a quantity, rejecting zero
    pub fn new(value: u32) -> Result<Self, KernelError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(KernelError::ZeroQuantity)
    }

    /// Creates a quantity, clamping zero up to one
    pub fn at_least_one(value: u32) -> Self {
        Self::new(value).unwrap_or(Self::ONE)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = KernelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> u32 {
        quantity.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(
            Money::new(dec!(-0.01)),
            Err(KernelError::NegativeAmount(dec!(-0.01)))
        );
    }

    #[test]
    fn test_negative_zero_accepted() {
        let money = Money::new(-Decimal::ZERO).unwrap();
        assert!(money.is_zero());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        assert_eq!(Quantity::new(0), Err(KernelError::ZeroQuantity));
        assert_eq!(Quantity::at_least_one(0), Quantity::ONE);
    }

    #[test]
    fn test_line_total() {
        let price = Money::new(dec!(29.99)).unwrap();
        let total = price.checked_times(Quantity::new(2).unwrap()).unwrap();
        assert_eq!(total.amount(), dec!(59.98));
    }
}
