use std::fs;
use std::path::Path;

use backcast_core::{HistoricalSeries, Observation};
use color_eyre::eyre::WrapErr;

/// Load a historical series from a JSON array of `{date, value}`
/// observations, sorted ascending by date.
///
/// ```json
/// [
///   {"date": "2015-01-02", "value": 2058.2},
///   {"date": "2015-01-05", "value": 2020.58}
/// ]
/// ```
pub fn load_series(path: &Path) -> color_eyre::Result<HistoricalSeries> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let observations: Vec<Observation> = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("failed to parse observations from {}", path.display()))?;
    let series = HistoricalSeries::new(observations)
        .wrap_err_with(|| format!("invalid series in {}", path.display()))?;
    Ok(series)
}
