mod results;
mod series;

pub use results::{ResampleResult, ResampleWindow};
pub use series::{HistoricalSeries, Observation};
