//! Absolute profit and valuation across instruments.

use rust_decimal::Decimal;
use tally_core::traits::PriceSource;
use tally_core::types::Date;

use crate::types::InstrumentDelta;
use crate::{PortfolioError, PortfolioResult};

/// Sums `price(end) - price(start)` over all instruments.
///
/// An empty slice yields zero. The first failed price lookup aborts the sum.
pub fn total_profit<S: PriceSource>(
    instruments: &[S],
    start: Date,
    end: Date,
) -> PortfolioResult<Decimal> {
    instruments.iter().try_fold(Decimal::ZERO, |total, source| {
        let delta = source.price(end)? - source.price(start)?;
        total
            .checked_add(delta)
            .ok_or_else(|| PortfolioError::undefined("profit", "decimal overflow while summing"))
    })
}

/// Sums the price of every instrument on `date`.
///
/// An empty slice yields zero.
pub fn total_value<S: PriceSource>(instruments: &[S], date: Date) -> PortfolioResult<Decimal> {
    instruments.iter().try_fold(Decimal::ZERO, |total, source| {
        let price = source.price(date)?;
        total
            .checked_add(price.value())
            .ok_or_else(|| PortfolioError::undefined("value", "decimal overflow while summing"))
    })
}

/// Collects each instrument's start and end price, in portfolio order.
pub fn price_deltas<S: PriceSource>(
    instruments: &[S],
    start: Date,
    end: Date,
) -> PortfolioResult<Vec<InstrumentDelta>> {
    instruments
        .iter()
        .map(|source| -> PortfolioResult<InstrumentDelta> {
            let end_price = source.price(end)?;
            let start_price = source.price(start)?;
            Ok(InstrumentDelta::new(source.name(), start_price, end_price))
        })
        .collect()
}
