//! Error types for portfolio analytics.
//!
//! This module defines the error types used throughout the portfolio crate.

use tally_core::CoreError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// A contained price source failed; the source error is passed through as is.
    #[error(transparent)]
    Source(#[from] CoreError),

    /// Arithmetic with no well-defined result.
    #[error("Undefined computation in {operation}: {reason}")]
    UndefinedComputation {
        /// The operation that failed.
        operation: String,
        /// Why the result is undefined.
        reason: String,
    },

    /// Empty portfolio.
    #[error("Portfolio has no instruments")]
    EmptyPortfolio,

    /// Invalid configuration value.
    #[error("Invalid config field '{field}': {reason}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// The reason the value is invalid.
        reason: String,
    },
}

impl PortfolioError {
    /// Create an undefined computation error.
    #[must_use]
    pub fn undefined(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UndefinedComputation {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if a price source had no price for a queried date.
    #[must_use]
    pub fn is_price_not_found(&self) -> bool {
        matches!(self, Self::Source(err) if err.is_price_not_found())
    }

    /// Returns true if this is an undefined computation error.
    #[must_use]
    pub fn is_undefined_computation(&self) -> bool {
        matches!(self, Self::UndefinedComputation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::Date;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::undefined("annual_profit", "zero-length period");
        assert!(err.to_string().contains("annual_profit"));
        assert!(err.to_string().contains("zero-length period"));
        assert!(err.is_undefined_computation());
        assert!(!err.is_price_not_found());

        let err = PortfolioError::invalid_config("days_per_year", "must be positive");
        assert!(err.to_string().contains("days_per_year"));
    }

    #[test]
    fn test_source_error_is_transparent() {
        let date = Date::from_ymd(2021, 1, 3).unwrap();
        let core = CoreError::price_not_found("AAPL", date);
        let err: PortfolioError = core.clone().into();

        assert_eq!(err.to_string(), core.to_string());
        assert!(err.is_price_not_found());
        assert_eq!(err, PortfolioError::Source(core));
    }

    #[test]
    fn test_error_clone() {
        let err = PortfolioError::EmptyPortfolio;
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
