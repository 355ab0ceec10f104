//! Command-line argument parsing and processing.
//!
//! Arguments are declared with clap and then reduced to a [`CliAction`] so the
//! main application logic never touches clap types. Help, version and usage
//! errors become their own actions instead of exiting from inside the parser.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::geo::{CalendarDate, Zenith};
use crate::logger::Log;

#[derive(Parser, Debug)]
#[command(name = "sunalmanac")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
#[command(version)]
struct Cli {
    /// Latitude in degrees, positive north
    #[arg(long, global = true, allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Longitude in degrees, positive east
    #[arg(long, global = true, allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// Local clock offset from UTC in hours
    #[arg(long, global = true, allow_negative_numbers = true)]
    utc_offset: Option<f64>,

    /// official, civil, nautical, astronomical or degrees
    #[arg(long, global = true)]
    zenith: Option<Zenith>,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable detailed debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Suppress status output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the sunrise/sunset table of one month as CSV (default)
    Month {
        /// Year of the table (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month of the table, 1-12 (defaults to the current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// CSV output path, "-" for stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print sunrise and sunset for a single date
    Day {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<CalendarDate>,
    },
}

fn parse_date(value: &str) -> Result<CalendarDate, String> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(CalendarDate::from)
        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD", value))
}

/// Options shared by every command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalOptions {
    pub debug_enabled: bool,
    pub quiet: bool,
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Write a month table
    Month {
        options: GlobalOptions,
        year: Option<i32>,
        month: Option<u32>,
    },
    /// Report a single date
    Day {
        options: GlobalOptions,
        date: Option<CalendarDate>,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name, as with `std::env::args()`.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) => {
                let action = match err.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => CliAction::ShowHelp,
                    ErrorKind::DisplayVersion => CliAction::ShowVersion,
                    _ => {
                        let rendered = err.to_string();
                        let message = rendered
                            .lines()
                            .next()
                            .unwrap_or("Invalid arguments")
                            .trim_start_matches("error: ");
                        Log::log_warning(message);
                        CliAction::ShowHelpDueToError
                    }
                };
                return ParsedArgs { action };
            }
        };

        let output = match &cli.command {
            Some(Commands::Month { output, .. }) => output.clone(),
            _ => None,
        };

        let options = GlobalOptions {
            debug_enabled: cli.debug,
            quiet: cli.quiet,
            config_path: cli.config,
            overrides: ConfigOverrides {
                latitude: cli.latitude,
                longitude: cli.longitude,
                utc_offset: cli.utc_offset,
                zenith: cli.zenith,
                output,
            },
        };

        let action = match cli.command {
            None => CliAction::Month {
                options,
                year: None,
                month: None,
            },
            Some(Commands::Month { year, month, .. }) => CliAction::Month {
                options,
                year,
                month,
            },
            Some(Commands::Day { date }) => CliAction::Day { options, date },
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    Log::log_version();
    Log::log_pipe();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays the generated help through the logger.
pub fn display_help() {
    Log::log_version();
    let help = Cli::command().render_help().to_string();
    for line in help.lines() {
        if line.is_empty() {
            Log::log_pipe();
        } else {
            Log::log_indented(line);
        }
    }
    Log::log_end();
}
