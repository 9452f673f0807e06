//! CLI entry point.
//!
//! # Responsibility
//! - Compute totals for the fixed demonstration collection and print them.
//! - Keep stdout limited to the two result lines; diagnostics go to stderr.

use log::{error, info};
use shapecalc_core::{
    default_log_level, demo_figures, flush_logging, init_logging, summarize, GeometrySummary,
    ShapeValidationError,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging(default_log_level(), None) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=app_start module=cli status=ok version={}",
        shapecalc_core::core_version()
    );

    let code = match run() {
        Ok(summary) => {
            println!("Total area: {}", summary.total_area);
            println!("Total volume: {}", summary.total_volume);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    };
    flush_logging();
    code
}

fn run() -> Result<GeometrySummary, ShapeValidationError> {
    let figures = demo_figures()?;
    Ok(summarize(&figures))
}
