//! Resampling results
//!
//! Output types from running the trial loop: one calendar window per trial,
//! each anchored at a sampled historical start date.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One resampled historical window, half-open: `[start, start + horizon)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResampleWindow {
    pub start: Date,
    pub end: Date,
}

impl ResampleWindow {
    /// Whether a date falls inside the window.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }
}

/// Complete results from one resampling run: one window per trial, in
/// trial order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResampleResult {
    pub windows: Vec<ResampleWindow>,
}

impl ResampleResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    #[must_use]
    pub fn windows(&self) -> &[ResampleWindow] {
        &self.windows
    }

    /// How many trials drew each start date, keyed in date order.
    ///
    /// Sampling is with replacement, so counts above one are expected.
    #[must_use]
    pub fn start_date_counts(&self) -> BTreeMap<Date, usize> {
        let mut counts = BTreeMap::new();
        for window in &self.windows {
            *counts.entry(window.start).or_insert(0) += 1;
        }
        counts
    }
}
