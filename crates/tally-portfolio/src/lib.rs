//! # Tally Portfolio
//!
//! Profit analytics over a portfolio of priced instruments.
//!
//! A [`Portfolio`] holds any number of [`PriceSource`] instruments and reports:
//!
//! - **Profit**: the sum of each instrument's price change between two dates
//! - **Annual profit**: the compound annual growth rate, combined across
//!   instruments by multiplying their annualized growth factors
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every calculation reads prices and returns a value or
//!   the first failure, never a partial aggregate
//! - **Decimal arithmetic**: `rust_decimal` throughout, including the
//!   fractional powers used for annualization
//! - **Explicit failure**: missing prices and undefined arithmetic are errors
//!
//! ## Quick Start
//!
//! ```rust
//! use tally_core::prelude::*;
//! use tally_portfolio::prelude::*;
//!
//! let start = Date::from_ymd(2020, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 1, 1).unwrap();
//!
//! let aapl = PriceTable::new("AAPL")
//!     .with_price(start, Price::new(dec!(100)))
//!     .with_price(end, Price::new(dec!(146.41)));
//!
//! let portfolio = PortfolioBuilder::new()
//!     .name("Growth")
//!     .config(ProfitConfig::new().with_result_scale(6))
//!     .add_instrument(aapl)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(portfolio.profit(start, end).unwrap(), dec!(46.41));
//! assert_eq!(portfolio.annual_profit(start, end).unwrap(), dec!(0.1));
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Profit, value and annualized profit over price sources
//! - [`portfolio`] - Portfolio and builder types
//! - [`types`] - Config and per-instrument results
//!
//! [`PriceSource`]: tally_core::PriceSource

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod error;
pub mod portfolio;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use portfolio::{Portfolio, PortfolioBuilder};
pub use types::{InstrumentDelta, ProfitConfig};

// Re-export analytics functions
pub use analytics::{annualized_profit, price_deltas, total_profit, total_value};

/// Prelude module for convenient imports.
///
/// ```rust
/// use tally_portfolio::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Portfolio
    pub use crate::portfolio::{Portfolio, PortfolioBuilder};

    // Config and results
    pub use crate::types::{InstrumentDelta, ProfitConfig};

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
    pub use tally_core::types::{Date, DateRange, Price};
    pub use tally_core::PriceSource;
}
