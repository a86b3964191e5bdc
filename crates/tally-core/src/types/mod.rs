//! Domain value types.
//!
//! - [`Date`]: Calendar date used to key price lookups
//! - [`DateRange`]: Holding period with elapsed days and years
//! - [`Price`]: Decimal price quote

mod date;
mod price;
mod range;

pub use date::Date;
pub use price::Price;
pub use range::{DateRange, DAYS_PER_YEAR};
