//! Portfolio struct and core methods.

use rust_decimal::Decimal;
use tally_core::traits::PriceSource;
use tally_core::types::{Date, DateRange};
use tracing::debug;

use crate::analytics;
use crate::types::{InstrumentDelta, ProfitConfig};
use crate::PortfolioResult;

/// An ordered collection of instruments that can quote prices.
///
/// The portfolio owns its instruments and never mutates them. Use a concrete
/// `S` for homogeneous portfolios, or `Box<dyn PriceSource>` to mix
/// instrument types.
///
/// # Example
///
/// ```rust
/// use tally_core::prelude::*;
/// use tally_portfolio::Portfolio;
/// use rust_decimal_macros::dec;
///
/// let start = Date::from_ymd(2021, 1, 1).unwrap();
/// let end = Date::from_ymd(2021, 1, 2).unwrap();
///
/// let portfolio = Portfolio::new(vec![
///     PriceTable::new("AAPL")
///         .with_price(start, Price::new(dec!(0)))
///         .with_price(end, Price::new(dec!(3))),
///     PriceTable::new("GOOGL")
///         .with_price(start, Price::new(dec!(0)))
///         .with_price(end, Price::new(dec!(3))),
/// ]);
///
/// assert_eq!(portfolio.profit(start, end).unwrap(), dec!(6));
/// ```
#[derive(Debug, Clone)]
pub struct Portfolio<S> {
    pub(crate) name: Option<String>,
    pub(crate) instruments: Vec<S>,
    pub(crate) config: ProfitConfig,
}

impl<S: PriceSource> Portfolio<S> {
    /// Creates an unnamed portfolio with the default config.
    #[must_use]
    pub fn new(instruments: Vec<S>) -> Self {
        Self {
            name: None,
            instruments,
            config: ProfitConfig::default(),
        }
    }

    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder() -> super::PortfolioBuilder<S> {
        super::PortfolioBuilder::new()
    }

    /// Returns the portfolio name, if one was given.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the profit configuration.
    #[must_use]
    pub fn config(&self) -> &ProfitConfig {
        &self.config
    }

    /// Returns the instruments in portfolio order.
    #[must_use]
    pub fn instruments(&self) -> &[S] {
        &self.instruments
    }

    /// Returns the number of instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Returns true if the portfolio has no instruments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Total profit: the sum over instruments of `price(end) - price(start)`.
    ///
    /// An empty portfolio has a profit of exactly zero. No check is made that
    /// `end` follows `start`.
    ///
    /// # Errors
    ///
    /// Returns the first price lookup failure, unchanged.
    pub fn profit(&self, start: Date, end: Date) -> PortfolioResult<Decimal> {
        debug!(
            portfolio = self.name(),
            instruments = self.len(),
            %start,
            %end,
            "computing profit"
        );
        analytics::total_profit(&self.instruments, start, end).map(|p| self.config.finish(p))
    }

    /// Total profit over a [`DateRange`].
    pub fn profit_over(&self, period: &DateRange) -> PortfolioResult<Decimal> {
        self.profit(period.start, period.end)
    }

    /// Compound annual profit rate over `start..end`.
    ///
    /// Each instrument's return `(end - start) / start` is annualized as
    /// `(1 + r)^(1 / years)` with `years = days / days_per_year`; the factors
    /// are multiplied and one is subtracted. `0.10` means +10% per year.
    ///
    /// # Errors
    ///
    /// - `UndefinedComputation` for a zero-length period, a zero start price,
    ///   negative growth, or decimal overflow
    /// - `EmptyPortfolio` when there are no instruments
    /// - the first price lookup failure, unchanged
    pub fn annual_profit(&self, start: Date, end: Date) -> PortfolioResult<Decimal> {
        debug!(
            portfolio = self.name(),
            instruments = self.len(),
            %start,
            %end,
            days_per_year = %self.config.days_per_year,
            "computing annual profit"
        );
        analytics::annualized_profit(&self.instruments, start, end, &self.config)
            .map(|rate| self.config.finish(rate))
    }

    /// Compound annual profit rate over a [`DateRange`].
    pub fn annual_profit_over(&self, period: &DateRange) -> PortfolioResult<Decimal> {
        self.annual_profit(period.start, period.end)
    }

    /// Start price, end price and delta for each instrument, in portfolio order.
    pub fn price_deltas(&self, start: Date, end: Date) -> PortfolioResult<Vec<InstrumentDelta>> {
        analytics::price_deltas(&self.instruments, start, end)
    }

    /// Sum of every instrument's price on `date`.
    pub fn value(&self, date: Date) -> PortfolioResult<Decimal> {
        analytics::total_value(&self.instruments, date).map(|v| self.config.finish(v))
    }
}

impl<S: PriceSource> FromIterator<S> for Portfolio<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
