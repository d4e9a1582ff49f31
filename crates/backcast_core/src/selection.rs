//! Start-date selection for rolling-window resampling.
//!
//! A trial window of `horizon_years` must fit entirely inside the available
//! history, so only dates at or before `last_possible_start` are eligible.
//! Candidates come in two tiers: the first trading day of each calendar
//! year (the canonical "start the simulation on Jan 1st of year Y" anchor),
//! falling back to every trading day when no anchor fits. The fallback
//! trades the sparse one-per-year granularity for a dense one, so trial
//! distributions differ between tiers; both are kept as-is.

use jiff::civil::Date;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::date_math::{add_years, sub_years};
use crate::error::SelectionError;
use crate::model::{HistoricalSeries, ResampleWindow};

/// Which candidate tier a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateTier {
    /// First trading day of each calendar year
    YearAnchors,
    /// Every trading day with enough remaining history
    AllTradingDays,
}

/// The set of dates eligible to begin a full-horizon window.
///
/// Non-empty and sorted ascending by construction; every member is a
/// trading day of the source series at or before `last_possible_start`.
#[derive(Debug, Clone)]
pub struct CandidateStarts {
    dates: Vec<Date>,
    tier: CandidateTier,
}

impl CandidateStarts {
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn earliest(&self) -> Date {
        self.dates[0]
    }

    #[must_use]
    pub fn latest(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    #[must_use]
    pub fn tier(&self) -> CandidateTier {
        self.tier
    }

    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Draw one start date uniformly, with replacement across calls.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Date {
        self.dates[rng.random_range(0..self.dates.len())]
    }
}

/// The latest date such that `date + horizon_years` still lands inside the
/// series. Calendar-aware, not a fixed 365-day offset.
#[must_use]
pub fn last_possible_start(series: &HistoricalSeries, horizon_years: i16) -> Date {
    sub_years(series.last_date(), horizon_years)
}

/// First trading day of each calendar year present in the series.
pub(crate) fn year_anchors(series: &HistoricalSeries) -> Vec<Date> {
    let mut anchors = Vec::new();
    let mut current_year = None;
    for obs in series.observations() {
        if current_year != Some(obs.date.year()) {
            current_year = Some(obs.date.year());
            anchors.push(obs.date);
        }
    }
    anchors
}

/// Every trading day at or before the cutoff.
pub(crate) fn fallback_candidates(series: &HistoricalSeries, cutoff: Date) -> Vec<Date> {
    series
        .observations()
        .iter()
        .map(|o| o.date)
        .take_while(|d| *d <= cutoff)
        .collect()
}

/// Select the eligible start dates for a window of `horizon_years`.
///
/// Year anchors that fit the horizon win; otherwise any trading day that
/// fits is used. Fails with [`SelectionError::InsufficientHistory`] when no
/// date leaves room for a full window.
pub fn select_candidates(
    series: &HistoricalSeries,
    horizon_years: i16,
) -> Result<CandidateStarts, SelectionError> {
    let cutoff = last_possible_start(series, horizon_years);

    let mut anchors = year_anchors(series);
    anchors.retain(|d| *d <= cutoff);
    if !anchors.is_empty() {
        return Ok(CandidateStarts {
            dates: anchors,
            tier: CandidateTier::YearAnchors,
        });
    }

    let fallback = fallback_candidates(series, cutoff);
    if fallback.is_empty() {
        return Err(SelectionError::InsufficientHistory {
            horizon_years,
            last_date: series.last_date(),
        });
    }
    Ok(CandidateStarts {
        dates: fallback,
        tier: CandidateTier::AllTradingDays,
    })
}

/// Derive the calendar window anchored at a validated start date.
///
/// No bounds re-check: `start` already satisfied `last_possible_start`.
#[must_use]
pub fn derive_window(start: Date, horizon_years: i16) -> ResampleWindow {
    ResampleWindow {
        start,
        end: add_years(start, horizon_years),
    }
}
