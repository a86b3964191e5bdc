//! Price sources backed by in-memory data.
//!
//! - [`PriceTable`]: exact-date lookup table of recorded prices

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::traits::PriceSource;
use crate::types::{Date, Price};

/// A named instrument whose prices are recorded per date.
///
/// Lookups are exact: a date with no recorded observation fails with
/// `CoreError::PriceNotFound`, even when neighbouring dates are known.
///
/// # Example
///
/// ```rust
/// use tally_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let d1 = Date::from_ymd(2021, 1, 1).unwrap();
/// let d2 = Date::from_ymd(2021, 1, 2).unwrap();
/// let table = PriceTable::from_observations(
///     "GOOGL",
///     [(d1, Price::new(dec!(0))), (d2, Price::new(dec!(3)))],
/// );
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.first_date(), Some(d1));
/// assert_eq!(table.price(d2).unwrap().value(), dec!(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    name: String,
    prices: BTreeMap<Date, Price>,
}

impl PriceTable {
    /// Creates an empty table for the named instrument.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prices: BTreeMap::new(),
        }
    }

    /// Creates a table from `(date, price)` observations.
    ///
    /// Later observations for the same date replace earlier ones.
    #[must_use]
    pub fn from_observations(
        name: impl Into<String>,
        observations: impl IntoIterator<Item = (Date, Price)>,
    ) -> Self {
        Self {
            name: name.into(),
            prices: observations.into_iter().collect(),
        }
    }

    /// Records a price and returns the table.
    #[must_use]
    pub fn with_price(mut self, date: Date, price: Price) -> Self {
        self.prices.insert(date, price);
        self
    }

    /// Records a price, returning the one it replaced, if any.
    pub fn insert(&mut self, date: Date, price: Price) -> Option<Price> {
        self.prices.insert(date, price)
    }

    /// Returns the number of recorded observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if no prices are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Returns the earliest recorded date.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.prices.keys().next().copied()
    }

    /// Returns the latest recorded date.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.prices.keys().next_back().copied()
    }

    /// Iterates over observations in date order.
    pub fn observations(&self) -> impl Iterator<Item = (Date, Price)> + '_ {
        self.prices.iter().map(|(date, price)| (*date, *price))
    }
}

impl PriceSource for PriceTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self, date: Date) -> CoreResult<Price> {
        self.prices
            .get(&date)
            .copied()
            .ok_or_else(|| CoreError::price_not_found(&self.name, date))
    }
}
