mod defaults;
mod shared;
mod sv_sizes;
mod sv_supports;
mod utils;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use simple_error::SimpleResult;

pub use self::shared::SharedSettings;
use self::sv_sizes::validate_and_fix_sv_sizes_settings;
pub use self::sv_sizes::SvSizesSettings;
use self::sv_supports::validate_and_fix_sv_supports_settings;
pub use self::sv_supports::SvSupportsSettings;

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize SV calls as a histogram of SV length by type
    SvSizes(SvSizesSettings),

    /// Summarize SV calls as a cumulative histogram of supporting read count by type
    SvSupports(SvSupportsSettings),
}

#[derive(Parser)]
#[command(
    version,
    about,
    after_help = format!("Copyright (C) 2018-{}
This program comes with ABSOLUTELY NO WARRANTY.", chrono::Utc::now().year()),
    help_template = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}"
)]
#[clap(propagate_version = true, rename_all = "kebab_case")]
pub struct Settings {
    #[command(flatten)]
    pub shared: SharedSettings,

    #[command(subcommand)]
    pub command: Commands,
}

/// Validate settings and update parameters that can't be processed by clap
///
pub fn validate_and_fix_settings_impl(mut settings: Settings) -> SimpleResult<Settings> {
    settings.command = match settings.command {
        Commands::SvSizes(x) => {
            let x = validate_and_fix_sv_sizes_settings(x)?;
            Commands::SvSizes(x)
        }
        Commands::SvSupports(x) => {
            let x = validate_and_fix_sv_supports_settings(x)?;
            Commands::SvSupports(x)
        }
    };

    Ok(settings)
}

/// Validate settings and update to parameters that can't be processed automatically by clap.
///
pub fn validate_and_fix_settings(settings: Settings) -> Settings {
    match validate_and_fix_settings_impl(settings) {
        Ok(x) => x,
        Err(msg) => {
            eprintln!("Invalid command-line setting: {}", msg);
            std::process::exit(exitcode::USAGE);
        }
    }
}

pub fn parse_settings() -> Settings {
    Settings::parse()
}
