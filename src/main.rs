mod bcf_record;
mod bins;
mod classify;
mod cli;
mod diagnostics;
mod errors;
mod globals;
mod logger;
mod os_utils;
mod run_stats;
mod size_histogram;
mod support_histogram;
mod sv_length;
mod sv_support;
mod sv_type;
mod variant_record;

use std::{error, process};

use hhmmss::Hhmmss;
use log::info;

use crate::cli::Commands;
use crate::globals::{PROGRAM_NAME, PROGRAM_VERSION};
use crate::logger::setup_stderr_logger;
use crate::size_histogram::run_sv_sizes;
use crate::support_histogram::run_sv_supports;

fn run(settings: &cli::Settings) -> Result<(), Box<dyn error::Error>> {
    info!("Starting {PROGRAM_NAME} {PROGRAM_VERSION}");
    info!(
        "cmdline: {}",
        std::env::args().collect::<Vec<_>>().join(" ")
    );

    let start = std::time::Instant::now();

    match &settings.command {
        Commands::SvSizes(x) => {
            run_sv_sizes(&settings.shared, x)?;
        }
        Commands::SvSupports(x) => {
            run_sv_supports(&settings.shared, x)?;
        }
    }

    info!(
        "{PROGRAM_NAME} completed. Total Runtime: {}",
        start.elapsed().hhmmssxxx()
    );
    Ok(())
}

fn main() {
    let settings = cli::validate_and_fix_settings(cli::parse_settings());

    setup_stderr_logger(settings.shared.debug);

    if let Err(err) = run(&settings) {
        log::error!("{err}");
        process::exit(2);
    }
}
