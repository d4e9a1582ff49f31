//! Tests for series construction and window extraction

use jiff::civil::date;

use crate::error::SeriesError;
use crate::model::{HistoricalSeries, Observation, ResampleWindow};

fn obs(year: i16, month: i8, day: i8) -> Observation {
    Observation {
        date: date(year, month, day),
        value: 1.0,
    }
}

#[test]
fn test_empty_series_rejected() {
    let result = HistoricalSeries::new(vec![]);
    assert!(matches!(result, Err(SeriesError::Empty)));
}

#[test]
fn test_out_of_order_series_rejected() {
    let result = HistoricalSeries::new(vec![obs(2020, 1, 3), obs(2020, 1, 2)]);
    assert!(
        matches!(result, Err(SeriesError::OutOfOrder { index: 1, .. })),
        "descending dates must be rejected"
    );
}

#[test]
fn test_duplicate_dates_rejected() {
    let result = HistoricalSeries::new(vec![obs(2020, 1, 2), obs(2020, 1, 2)]);
    assert!(matches!(result, Err(SeriesError::OutOfOrder { .. })));
}

#[test]
fn test_accessors() {
    let series = HistoricalSeries::new(vec![
        obs(2020, 1, 2),
        obs(2020, 1, 3),
        obs(2020, 1, 6),
    ])
    .unwrap();

    assert_eq!(series.len(), 3);
    assert!(!series.is_empty());
    assert_eq!(series.first_date(), date(2020, 1, 2));
    assert_eq!(series.last_date(), date(2020, 1, 6));
}

#[test]
fn test_window_is_half_open() {
    let series = HistoricalSeries::new(vec![
        obs(2020, 1, 2),
        obs(2020, 1, 3),
        obs(2020, 1, 6),
        obs(2020, 1, 7),
    ])
    .unwrap();

    let window = ResampleWindow {
        start: date(2020, 1, 3),
        end: date(2020, 1, 7),
    };
    let segment = series.window(window);

    assert_eq!(segment.len(), 2);
    assert_eq!(segment[0].date, date(2020, 1, 3));
    assert_eq!(segment[1].date, date(2020, 1, 6));
}

#[test]
fn test_window_start_between_observations() {
    let series = HistoricalSeries::new(vec![
        obs(2020, 1, 2),
        obs(2020, 1, 6),
        obs(2020, 1, 7),
    ])
    .unwrap();

    // Start falls on a non-trading day; slice begins at the next observation
    let window = ResampleWindow {
        start: date(2020, 1, 4),
        end: date(2020, 1, 8),
    };
    let segment = series.window(window);

    assert_eq!(segment.len(), 2);
    assert_eq!(segment[0].date, date(2020, 1, 6));
}

#[test]
fn test_window_outside_range_is_empty() {
    let series = HistoricalSeries::new(vec![obs(2020, 1, 2), obs(2020, 1, 3)]).unwrap();

    let before = ResampleWindow {
        start: date(2019, 1, 1),
        end: date(2020, 1, 1),
    };
    let after = ResampleWindow {
        start: date(2021, 1, 1),
        end: date(2022, 1, 1),
    };

    assert!(series.window(before).is_empty());
    assert!(series.window(after).is_empty());
}

#[test]
fn test_window_extending_past_last_date() {
    let series = HistoricalSeries::new(vec![obs(2020, 1, 2), obs(2020, 1, 3)]).unwrap();

    let window = ResampleWindow {
        start: date(2020, 1, 2),
        end: date(2025, 1, 2),
    };
    assert_eq!(series.window(window).len(), 2);
}
