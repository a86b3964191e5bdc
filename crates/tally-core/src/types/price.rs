//! Price type for instrument quotes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// An instrument price in an arbitrary-precision decimal amount.
///
/// No sign restriction is applied: price sources decide what they quote.
///
/// # Example
///
/// ```rust
/// use tally_core::types::Price;
/// use rust_decimal_macros::dec;
///
/// let open = Price::new(dec!(98.50));
/// let close = Price::new(dec!(101.25));
/// assert_eq!(close - open, dec!(2.75));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of exactly zero.
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Creates a new price.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the price as a decimal amount.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Sub for Price {
    type Output = Decimal;

    /// Returns the price change from `rhs` to `self`.
    fn sub(self, rhs: Price) -> Self::Output {
        self.0 - rhs.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
