//! Profit analytics over collections of price sources.
//!
//! All functions are pure: they read prices through [`PriceSource`] and
//! return a result or the first failure, never a partial aggregate.
//!
//! [`PriceSource`]: tally_core::PriceSource

mod annual;
mod profit;

pub use annual::annualized_profit;
pub use profit::{price_deltas, total_profit, total_value};
