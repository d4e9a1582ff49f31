use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::ensure;

use backcast_core::{ResampleConfig, run_resample};

mod input;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "backcast")]
#[command(about = "Rolling-window historical Monte Carlo resampler for backtesting")]
struct Args {
    /// Path to a JSON array of {date, value} observations, sorted by date
    data: PathBuf,

    /// Number of Monte Carlo trials
    #[arg(short = 'n', long, default_value_t = 1000)]
    trials: usize,

    /// Simulation horizon in calendar years
    #[arg(short = 'y', long, default_value_t = 10)]
    years: i16,

    /// Seed for reproducible start-date draws
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Emit run diagnostics (trial count, candidate range)
    #[arg(short, long)]
    verbose: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init_logging(&args.log_level);

    ensure!(args.trials > 0, "--trials must be a positive integer");
    ensure!(args.years > 0, "--years must be a positive integer");

    let series = input::load_series(&args.data)?;
    tracing::debug!(
        observations = series.len(),
        first = %series.first_date(),
        last = %series.last_date(),
        "loaded historical series"
    );

    let config = ResampleConfig {
        num_trials: args.trials,
        horizon_years: args.years,
        verbose: args.verbose,
    };
    let result = run_resample(&series, &config, args.seed)?;

    println!(
        "{} windows of {} years resampled from {} observations ({} - {})",
        result.len(),
        args.years,
        series.len(),
        series.first_date(),
        series.last_date(),
    );
    for (start, count) in result.start_date_counts() {
        println!("  {start}: {count} trials");
    }

    Ok(())
}
