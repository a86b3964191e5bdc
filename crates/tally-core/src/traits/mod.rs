//! Core traits for the Tally library.
//!
//! - [`PriceSource`]: anything that can quote its price on a given date

use std::rc::Rc;
use std::sync::Arc;

use crate::error::CoreResult;
use crate::types::{Date, Price};

/// Trait for instruments that can report a price on a date.
///
/// Implementations own their price history; the portfolio only reads it.
/// A lookup for an unknown date must fail with
/// [`CoreError::PriceNotFound`](crate::CoreError::PriceNotFound) rather than
/// substitute a default, and repeated lookups of the same date should return
/// the same price.
///
/// # Example
///
/// ```rust
/// use tally_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// struct Flat(Price);
///
/// impl PriceSource for Flat {
///     fn name(&self) -> &str {
///         "FLAT"
///     }
///
///     fn price(&self, _date: Date) -> CoreResult<Price> {
///         Ok(self.0)
///     }
/// }
///
/// let flat = Flat(Price::new(dec!(10)));
/// assert_eq!(flat.price(Date::from_ymd(2021, 1, 1).unwrap()).unwrap().value(), dec!(10));
/// ```
pub trait PriceSource {
    /// Returns the instrument name (typically a ticker).
    fn name(&self) -> &str;

    /// Returns the price of the instrument on `date`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::PriceNotFound` if no price is known for `date`.
    fn price(&self, date: Date) -> CoreResult<Price>;
}

impl<T: PriceSource + ?Sized> PriceSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn price(&self, date: Date) -> CoreResult<Price> {
        (**self).price(date)
    }
}

impl<T: PriceSource + ?Sized> PriceSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn price(&self, date: Date) -> CoreResult<Price> {
        (**self).price(date)
    }
}

impl<T: PriceSource + ?Sized> PriceSource for Rc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn price(&self, date: Date) -> CoreResult<Price> {
        (**self).price(date)
    }
}

impl<T: PriceSource + ?Sized> PriceSource for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn price(&self, date: Date) -> CoreResult<Price> {
        (**self).price(date)
    }
}
