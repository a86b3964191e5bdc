//! Configuration for profit computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_core::types::DAYS_PER_YEAR;

use crate::{PortfolioError, PortfolioResult};

/// Configuration for profit computation.
///
/// Controls the year length used for annualization and optional rounding of
/// results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitConfig {
    /// Days in a year when converting elapsed days to years.
    /// Defaults to 365.25 to average over leap years.
    pub days_per_year: Decimal,

    /// Decimal places to round results to (banker's rounding).
    /// If None, results keep full precision.
    pub result_scale: Option<u32>,
}

impl Default for ProfitConfig {
    fn default() -> Self {
        Self {
            days_per_year: DAYS_PER_YEAR,
            result_scale: None,
        }
    }
}

impl ProfitConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON and validates it.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PortfolioError::invalid_config("<json>", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the year length in days.
    #[must_use]
    pub fn with_days_per_year(mut self, days: Decimal) -> Self {
        self.days_per_year = days;
        self
    }

    /// Sets the number of decimal places results are rounded to.
    #[must_use]
    pub fn with_result_scale(mut self, scale: u32) -> Self {
        self.result_scale = Some(scale);
        self
    }

    /// Validates the config.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.days_per_year <= Decimal::ZERO {
            return Err(PortfolioError::invalid_config(
                "days_per_year",
                format!("must be positive, got {}", self.days_per_year),
            ));
        }
        Ok(())
    }

    /// Applies the configured rounding to a result.
    #[must_use]
    pub fn finish(&self, value: Decimal) -> Decimal {
        match self.result_scale {
            Some(scale) => value.round_dp(scale),
            None => value,
        }
    }
}
