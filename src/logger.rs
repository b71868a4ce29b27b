//! Methods specific to the svstats logger
//!

use crate::globals::PROGRAM_NAME;

/// Setup the default logger to write to stderr
///
/// If debug is true set the default logger to the more verbose debug level
///
fn setup_logger(debug: bool) -> Result<(), fern::InitError> {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                PROGRAM_NAME,
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

/// Setup logger, exiting on failure
///
/// #Arguments
/// * `debug` - If true use debug log level, and info level otherwise
///
pub fn setup_stderr_logger(debug: bool) {
    // No logger is available to report this error
    if let Err(err) = setup_logger(debug) {
        eprintln!("Failed to initialize logger: {err}");
        std::process::exit(exitcode::SOFTWARE);
    }
}
