//! Integration tests for the price source contract.
//!
//! These tests exercise `PriceTable` the way a portfolio uses it: through the
//! `PriceSource` trait, behind references and trait objects.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_core::prelude::*;

// =============================================================================
// FIXTURES
// =============================================================================

/// Builds a daily price series that starts at zero on `start` and ends at
/// `profit` on `end`, with deterministic filler prices in between.
fn daily_series(name: &str, profit: Decimal, start: Date, end: Date) -> PriceTable {
    let mut table = PriceTable::new(name).with_price(start, Price::ZERO);
    let mut date = start.add_days(1);
    let mut step = 0u64;
    while date < end {
        let filler = Decimal::new(i64::try_from(simple_hash(step) % 100_000).unwrap(), 2);
        table.insert(date, Price::new(filler));
        date = date.add_days(1);
        step += 1;
    }
    table.with_price(end, Price::new(profit))
}

/// Simple deterministic hash for test data generation.
fn simple_hash(i: u64) -> u64 {
    let mut x = i.wrapping_add(1).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

// =============================================================================
// TESTS
// =============================================================================

#[test]
fn test_series_over_single_day() {
    let start = Date::from_ymd(2021, 1, 1).unwrap();
    let end = Date::from_ymd(2021, 1, 2).unwrap();
    let table = daily_series("AAPL", dec!(2.00), start, end);

    let observations: Vec<(Date, Price)> = table.observations().collect();
    assert_eq!(
        observations,
        vec![(start, Price::ZERO), (end, Price::new(dec!(2.00)))]
    );
}

#[test]
fn test_series_over_month() {
    let start = Date::from_ymd(2021, 1, 1).unwrap();
    let end = Date::from_ymd(2021, 2, 1).unwrap();
    let table = daily_series("AAPL", dec!(7), start, end);

    assert_eq!(table.len(), 32);
    assert_eq!(table.price(start).unwrap(), Price::ZERO);
    assert_eq!(table.price(end).unwrap().value(), dec!(7));
    assert!(table.price(Date::from_ymd(2021, 1, 15).unwrap()).is_ok());
}

#[test]
fn test_lookup_through_trait_object() {
    let start = Date::from_ymd(2021, 1, 1).unwrap();
    let end = Date::from_ymd(2021, 1, 2).unwrap();
    let source: Box<dyn PriceSource> = Box::new(daily_series("AAPL", dec!(2), start, end));

    assert_eq!(source.name(), "AAPL");
    assert_eq!(source.price(start).unwrap(), Price::ZERO);
    assert_eq!(source.price(end).unwrap().value(), dec!(2));
}

#[test]
fn test_unknown_date_reports_instrument_and_date() {
    let start = Date::from_ymd(2021, 1, 1).unwrap();
    let end = Date::from_ymd(2021, 1, 2).unwrap();
    let table = daily_series("AAPL", dec!(2), start, end);
    let missing = Date::parse("2021-01-03").unwrap();

    match table.price(missing) {
        Err(CoreError::PriceNotFound { instrument, date }) => {
            assert_eq!(instrument, "AAPL");
            assert_eq!(date, missing);
        }
        other => panic!("expected PriceNotFound, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn prop_lookups_are_repeatable(day in 0i64..60, cents in -1_000_000i64..1_000_000) {
        let date = Date::from_ymd(2021, 1, 1).unwrap().add_days(day);
        let price = Price::new(Decimal::new(cents, 2));
        let table = PriceTable::new("X").with_price(date, price);

        prop_assert_eq!(table.price(date).unwrap(), price);
        prop_assert_eq!(table.price(date).unwrap(), price);
        prop_assert!(table.price(date.add_days(1)).unwrap_err().is_price_not_found());
    }
}
