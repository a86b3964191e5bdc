//! Per-instrument price change over a period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_core::types::Price;

/// Price change of one instrument between two dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentDelta {
    /// Instrument name.
    pub name: String,
    /// Price on the start date.
    pub start_price: Price,
    /// Price on the end date.
    pub end_price: Price,
}

impl InstrumentDelta {
    /// Creates a new delta.
    #[must_use]
    pub fn new(name: impl Into<String>, start_price: Price, end_price: Price) -> Self {
        Self {
            name: name.into(),
            start_price,
            end_price,
        }
    }

    /// Absolute profit: end price minus start price.
    #[must_use]
    pub fn profit(&self) -> Decimal {
        self.end_price - self.start_price
    }

    /// Fractional return `(end - start) / start`.
    ///
    /// Returns None when the start price is zero.
    #[must_use]
    pub fn simple_return(&self) -> Option<Decimal> {
        self.profit().checked_div(self.start_price.value())
    }
}
