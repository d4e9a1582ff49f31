use serde::{Deserialize, Serialize};

/// Parameters for one resampling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResampleConfig {
    /// Number of Monte Carlo trials to draw
    pub num_trials: usize,
    /// Simulation horizon in calendar years; each trial window spans
    /// exactly this many years from its start date
    pub horizon_years: i16,
    /// Emit run diagnostics (trial count, candidate range) at info level
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            num_trials: 1000,
            horizon_years: 10,
            verbose: false,
        }
    }
}
