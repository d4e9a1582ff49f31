//! Rolling-window historical Monte Carlo resampling library
//!
//! This crate selects valid start dates for rolling-window resampling of a
//! historical price/return series and draws randomized windows for
//! backtesting. It supports:
//! - Two-tier candidate selection: first trading day of each calendar year,
//!   with an any-trading-day fallback
//! - Calendar-aware horizon arithmetic (leap years, month lengths)
//! - Seeded, parallel trial generation with uniform start-date sampling
//!
//! # Example
//!
//! ```ignore
//! use backcast_core::{HistoricalSeries, ResampleConfig, run_resample};
//!
//! let series = HistoricalSeries::new(observations)?;
//! let config = ResampleConfig {
//!     num_trials: 1_000,
//!     horizon_years: 10,
//!     verbose: true,
//! };
//! let result = run_resample(&series, &config, 42)?;
//! for window in result.windows() {
//!     let segment = series.window(*window);
//!     // feed segment into one backtest trial
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
pub mod date_math;
pub mod error;
pub mod selection;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::ResampleConfig;
pub use error::{SelectionError, SeriesError};
pub use model::{HistoricalSeries, Observation, ResampleResult, ResampleWindow};
pub use selection::{
    CandidateStarts, CandidateTier, derive_window, last_possible_start, select_candidates,
};
pub use simulation::run_resample;
