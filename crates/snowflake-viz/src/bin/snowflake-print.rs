//! Prints a sampled tour as text.

use std::process::ExitCode;

use snowflake_viz::{TourConfig, init_logging, render_text, run};
use tracing::error;

fn main() -> ExitCode {
    let config = match TourConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config.log_level);

    match run(&config) {
        Ok(tour_run) => {
            print!("{}", render_text(&tour_run.tour, config.precision as usize));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
