//! # Tally Core
//!
//! Core types and the price source contract for the Tally profit library.
//!
//! This crate provides the building blocks the portfolio crate aggregates over:
//!
//! - **Types**: [`Date`], [`DateRange`] and [`Price`]
//! - **Traits**: [`PriceSource`], the capability of quoting a price on a date
//! - **Sources**: [`PriceTable`], a lookup-table-backed price source
//!
//! ## Design Philosophy
//!
//! - **Decimal money**: every amount is a `rust_decimal::Decimal`, never `f64`
//! - **Fallible lookups**: a missing price is an error, not a zero
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use tally_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let start = Date::from_ymd(2021, 1, 1).unwrap();
//! let end = Date::from_ymd(2021, 1, 2).unwrap();
//!
//! let aapl = PriceTable::new("AAPL")
//!     .with_price(start, Price::new(dec!(130.00)))
//!     .with_price(end, Price::new(dec!(132.50)));
//!
//! assert_eq!(aapl.price(end).unwrap() - aapl.price(start).unwrap(), dec!(2.50));
//! assert!(aapl.price(Date::from_ymd(2021, 1, 3).unwrap()).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod sources;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::sources::PriceTable;
    pub use crate::traits::PriceSource;
    pub use crate::types::{Date, DateRange, Price};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use sources::PriceTable;
pub use traits::PriceSource;
pub use types::{Date, DateRange, Price};
