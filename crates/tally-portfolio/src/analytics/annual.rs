//! Annualized (compound) profit across instruments.
//!
//! Each instrument contributes a growth factor `(1 + r)^(1 / years)` with
//! `r = (end - start) / start`. The portfolio rate is the product of the
//! factors minus one.

use rust_decimal::{Decimal, MathematicalOps};
use tally_core::traits::PriceSource;
use tally_core::types::{Date, DateRange};
use tracing::warn;

use crate::types::ProfitConfig;
use crate::{PortfolioError, PortfolioResult};

const OPERATION: &str = "annual_profit";

/// Computes the compound annual profit rate of the instruments over
/// `start..end`.
///
/// # Errors
///
/// - `PortfolioError::InvalidConfig` if `config.days_per_year` is not positive
/// - `PortfolioError::UndefinedComputation` if the period is zero days long,
///   a start price is zero, a growth factor has no real root, or the
///   arithmetic overflows
/// - `PortfolioError::EmptyPortfolio` if `instruments` is empty
/// - `PortfolioError::Source` if a price lookup fails
pub fn annualized_profit<S: PriceSource>(
    instruments: &[S],
    start: Date,
    end: Date,
    config: &ProfitConfig,
) -> PortfolioResult<Decimal> {
    config.validate()?;
    let exponent = annualization_exponent(&DateRange::new(start, end), config)?;

    if instruments.is_empty() {
        return Err(PortfolioError::EmptyPortfolio);
    }

    let mut growth = Decimal::ONE;
    for source in instruments {
        let end_price = source.price(end)?;
        let start_price = source.price(start)?;
        let factor = growth_factor(
            source.name(),
            start_price.value(),
            end_price.value(),
            exponent,
        )?;
        growth = growth.checked_mul(factor).ok_or_else(|| {
            PortfolioError::undefined(OPERATION, "decimal overflow combining growth factors")
        })?;
    }

    Ok(growth - Decimal::ONE)
}

/// Returns `1 / years` for the period.
fn annualization_exponent(period: &DateRange, config: &ProfitConfig) -> PortfolioResult<Decimal> {
    let days = period.days();
    if days == 0 {
        warn!(%period, "annualizing over a zero-length period");
        return Err(PortfolioError::undefined(
            OPERATION,
            format!("period {period} spans zero years"),
        ));
    }

    config
        .days_per_year
        .checked_div(Decimal::from(days))
        .ok_or_else(|| PortfolioError::undefined(OPERATION, "decimal overflow computing years"))
}

/// Annualized growth factor `(1 + r)^exponent` for one instrument.
fn growth_factor(
    name: &str,
    start_price: Decimal,
    end_price: Decimal,
    exponent: Decimal,
) -> PortfolioResult<Decimal> {
    if start_price.is_zero() {
        warn!(instrument = name, "start price is zero, return is undefined");
        return Err(PortfolioError::undefined(
            OPERATION,
            format!("'{name}' has a zero start price"),
        ));
    }

    let overflow = || PortfolioError::undefined(OPERATION, format!("decimal overflow for '{name}'"));

    let simple_return = end_price
        .checked_sub(start_price)
        .and_then(|delta| delta.checked_div(start_price))
        .ok_or_else(overflow)?;
    let base = Decimal::ONE.checked_add(simple_return).ok_or_else(overflow)?;

    if base.is_sign_negative() && !base.is_zero() {
        warn!(instrument = name, %base, "negative growth has no real annualized root");
        return Err(PortfolioError::undefined(
            OPERATION,
            format!("'{name}' has negative growth {base}"),
        ));
    }

    if base.is_zero() {
        if exponent.is_sign_negative() {
            return Err(PortfolioError::undefined(
                OPERATION,
                format!("'{name}' has zero growth over a reversed period"),
            ));
        }
        return Ok(Decimal::ZERO);
    }

    base.checked_powd(exponent).ok_or_else(overflow)
}
