//! Error types for the Tally core crate.
//!
//! Price sources report failures through [`CoreError`]; the portfolio crate
//! wraps it without translation.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No price is recorded for the requested date.
    #[error("Price not found for '{instrument}' on {date}")]
    PriceNotFound {
        /// Name of the instrument that was queried.
        instrument: String,
        /// The date that could not be resolved.
        date: Date,
    },

    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl CoreError {
    /// Creates a price not found error.
    #[must_use]
    pub fn price_not_found(instrument: impl Into<String>, date: Date) -> Self {
        Self::PriceNotFound {
            instrument: instrument.into(),
            date,
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Returns true if this is a missing price error.
    #[must_use]
    pub fn is_price_not_found(&self) -> bool {
        matches!(self, Self::PriceNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_not_found_names_date() {
        let date = Date::from_ymd(2021, 1, 3).unwrap();
        let err = CoreError::price_not_found("AAPL", date);
        let msg = err.to_string();
        assert!(msg.contains("AAPL"));
        assert!(msg.contains("2021-01-03"));
        assert!(err.is_price_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
        assert!(!err.is_price_not_found());
    }
}
