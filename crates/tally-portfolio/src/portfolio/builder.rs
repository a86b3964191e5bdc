//! Portfolio builder for fluent construction.

use tally_core::traits::PriceSource;

use crate::types::ProfitConfig;
use crate::{Portfolio, PortfolioResult};

/// Builder for constructing a [`Portfolio`].
///
/// # Example
///
/// ```rust
/// use tally_core::prelude::*;
/// use tally_portfolio::prelude::*;
///
/// let portfolio = PortfolioBuilder::<Box<dyn PriceSource>>::new()
///     .name("Growth")
///     .config(ProfitConfig::new().with_result_scale(4))
///     .add_instrument(Box::new(PriceTable::new("AAPL")))
///     .add_instrument(Box::new(PriceTable::new("GOOGL")))
///     .build()
///     .unwrap();
///
/// assert_eq!(portfolio.name(), Some("Growth"));
/// assert_eq!(portfolio.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PortfolioBuilder<S> {
    name: Option<String>,
    config: ProfitConfig,
    instruments: Vec<S>,
}

impl<S> Default for PortfolioBuilder<S> {
    fn default() -> Self {
        Self {
            name: None,
            config: ProfitConfig::default(),
            instruments: Vec::new(),
        }
    }
}

impl<S: PriceSource> PortfolioBuilder<S> {
    /// Creates a new portfolio builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the profit configuration.
    #[must_use]
    pub fn config(mut self, config: ProfitConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds an instrument to the portfolio.
    #[must_use]
    pub fn add_instrument(mut self, instrument: S) -> Self {
        self.instruments.push(instrument);
        self
    }

    /// Adds multiple instruments to the portfolio.
    #[must_use]
    pub fn add_instruments(mut self, instruments: impl IntoIterator<Item = S>) -> Self {
        self.instruments.extend(instruments);
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidConfig` if the config fails validation.
    pub fn build(self) -> PortfolioResult<Portfolio<S>> {
        self.config.validate()?;

        Ok(Portfolio {
            name: self.name,
            instruments: self.instruments,
            config: self.config,
        })
    }
}
