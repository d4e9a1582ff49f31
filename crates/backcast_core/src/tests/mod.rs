//! Integration tests for the resampling engine
//!
//! Tests are organized by topic:
//! - `series` - Series construction and window extraction
//! - `selection` - Candidate start-date selection (both tiers, failure)
//! - `simulation` - The seeded trial loop

use jiff::civil::{Date, Weekday};

use crate::model::{HistoricalSeries, Observation};

mod series;

/// Build a weekday series with New Year's Day (and its Monday observation)
/// removed. Close enough to an exchange calendar that the first trading day
/// of each year matches real anchor dates like 2016-01-04 and 2017-01-03.
pub(crate) fn trading_day_series(first: Date, last: Date) -> HistoricalSeries {
    let mut observations = Vec::new();
    let mut value = 100.0;
    let mut d = first;
    while d <= last {
        let weekend = matches!(d.weekday(), Weekday::Saturday | Weekday::Sunday);
        let new_years = d.month() == 1 && d.day() == 1;
        let observed_new_years =
            d.month() == 1 && d.day() == 2 && d.weekday() == Weekday::Monday;
        if !(weekend || new_years || observed_new_years) {
            observations.push(Observation { date: d, value });
            value += 0.25;
        }
        d = d.tomorrow().expect("date within jiff range");
    }
    HistoricalSeries::new(observations).expect("generated dates are strictly increasing")
}
