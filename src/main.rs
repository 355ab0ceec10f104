//! Command-line entry point for sunalmanac.
//!
//! Parses arguments, configures logging and dispatches to a command. Any
//! command error is logged with its full context chain and turned into a
//! non-zero exit code.

use sunalmanac::args::{self, CliAction, GlobalOptions, ParsedArgs};
use sunalmanac::commands::{day, month};
use sunalmanac::constants::EXIT_FAILURE;
use sunalmanac::logger::Log;

fn apply_logging_options(options: &GlobalOptions) {
    Log::set_enabled(!options.quiet);
    Log::set_debug(options.debug_enabled);
}

fn main() {
    let parsed = ParsedArgs::from_env();

    let result = match parsed.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            return;
        }
        CliAction::ShowHelp => {
            args::display_help();
            return;
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Month {
            options,
            year,
            month,
        } => {
            apply_logging_options(&options);
            month::handle_month_command(&options, year, month)
        }
        CliAction::Day { options, date } => {
            apply_logging_options(&options);
            day::handle_day_command(&options, date)
        }
    };

    if let Err(e) = result {
        // Errors are shown even in quiet mode
        Log::set_enabled(true);
        Log::log_pipe();
        Log::log_error(&format!("{:#}", e));
        Log::log_end();
        std::process::exit(EXIT_FAILURE);
    }
}
