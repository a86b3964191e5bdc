//! Date range used as the holding period of a profit calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Average Gregorian year length in days.
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// A `(start, end)` pair of dates.
///
/// No ordering is enforced: a reversed range yields a negative day count.
/// Callers that need a forward range can check [`DateRange::is_forward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First date of the period.
    pub start: Date,
    /// Last date of the period.
    pub end: Date,
}

impl DateRange {
    /// Creates a new range.
    #[must_use]
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Calendar days from `start` to `end`.
    #[must_use]
    pub fn days(&self) -> i64 {
        self.start.days_between(&self.end)
    }

    /// Elapsed years given a year length in days.
    ///
    /// Returns `None` when `days_per_year` is zero.
    #[must_use]
    pub fn years(&self, days_per_year: Decimal) -> Option<Decimal> {
        Decimal::from(self.days()).checked_div(days_per_year)
    }

    /// Returns true if `end` is strictly after `start`.
    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.end > self.start
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
