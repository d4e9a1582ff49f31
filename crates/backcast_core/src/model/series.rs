//! Historical series storage and window extraction.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;
use crate::model::ResampleWindow;

/// One trading-day observation: a date and its value (price or return).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: Date,
    pub value: f64,
}

/// An ordered sequence of trading-day observations, strictly increasing by
/// date. Validated once at construction; everything downstream relies on
/// the ordering invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalSeries {
    observations: Vec<Observation>,
}

impl HistoricalSeries {
    /// Build a series from observations sorted ascending by date.
    ///
    /// Rejects an empty vector and any non-increasing date pair (duplicates
    /// included).
    pub fn new(observations: Vec<Observation>) -> Result<Self, SeriesError> {
        if observations.is_empty() {
            return Err(SeriesError::Empty);
        }
        for (i, pair) in observations.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(SeriesError::OutOfOrder {
                    index: i + 1,
                    prev: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(Self { observations })
    }

    /// Earliest trading day in the series.
    #[must_use]
    pub fn first_date(&self) -> Date {
        self.observations[0].date
    }

    /// Latest trading day in the series.
    #[must_use]
    pub fn last_date(&self) -> Date {
        self.observations[self.observations.len() - 1].date
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Extract the observations falling inside a half-open window
    /// `[start, end)`.
    ///
    /// Binary-searches the sorted observations, so the slice is O(log n) to
    /// locate and borrows from the series without copying.
    #[must_use]
    pub fn window(&self, window: ResampleWindow) -> &[Observation] {
        let lo = self
            .observations
            .partition_point(|o| o.date < window.start);
        let hi = self.observations.partition_point(|o| o.date < window.end);
        &self.observations[lo..hi]
    }
}
