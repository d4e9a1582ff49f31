use std::fmt;

use jiff::civil::Date;

/// Errors raised when constructing a historical series
#[derive(Debug, Clone)]
pub enum SeriesError {
    /// The series has no observations
    Empty,
    /// Observation dates are not strictly increasing
    OutOfOrder { index: usize, prev: Date, next: Date },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::Empty => write!(f, "historical series has no observations"),
            SeriesError::OutOfOrder { index, prev, next } => {
                write!(
                    f,
                    "observation dates must be strictly increasing: \
                     {next} at index {index} follows {prev}"
                )
            }
        }
    }
}

impl std::error::Error for SeriesError {}

/// Errors raised during start-date selection
#[derive(Debug, Clone)]
pub enum SelectionError {
    /// The series is too short to fit a window of the requested horizon.
    ///
    /// Unrecoverable here: the caller must either shorten the horizon or
    /// supply a longer series.
    InsufficientHistory { horizon_years: i16, last_date: Date },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InsufficientHistory {
                horizon_years,
                last_date,
            } => {
                write!(
                    f,
                    "historical data range is too short for the requested horizon: \
                     history must extend at least {horizon_years} years before {last_date}; \
                     reduce the horizon or supply a longer series"
                )
            }
        }
    }
}

impl std::error::Error for SelectionError {}
