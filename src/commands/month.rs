//! Implementation of the month command.
//!
//! Computes every day of one month and writes the CSV table to the configured
//! output. When the table goes to stdout all status logging is switched off so
//! the stream stays machine readable.

use anyhow::{Context, Result};

use crate::args::GlobalOptions;
use crate::commands::{log_event_terms, resolve_config};
use crate::geo::{CalendarDate, month_events};
use crate::logger::Log;
use crate::report;

/// Handle the month command.
pub fn handle_month_command(
    options: &GlobalOptions,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<()> {
    if options.overrides.output.as_deref().is_some_and(report::is_stdout) {
        Log::set_enabled(false);
    }

    let (config, source) = resolve_config(options)?;
    let output = config.output_path().to_string();

    if report::is_stdout(&output) {
        Log::set_enabled(false);
    }

    Log::log_version();
    config.log_config(&source);

    let today = CalendarDate::today();
    let year = year.unwrap_or(today.year);
    let month = month.unwrap_or(today.month);

    let geo = config.geo_location()?;
    let days = month_events(year, month, &geo)
        .with_context(|| format!("Failed to compute table for {:04}-{:02}", year, month))?;

    Log::log_block_start(&format!(
        "Computed {} days for {:04}-{:02} at {}",
        days.len(),
        year,
        month,
        geo
    ));

    let unavailable = days.iter().filter(|day| !day.result.is_available()).count();
    if unavailable > 0 {
        Log::log_indented(&format!(
            "{} of {} days have no sunrise or sunset",
            unavailable,
            days.len()
        ));
    }

    for day in &days {
        log_event_terms(day.date, &geo);
    }

    report::write_csv_to_path(&output, &days)?;

    if !report::is_stdout(&output) {
        Log::log_block_start(&format!("Results are written to {}", output));
    }
    Log::log_end();
    Ok(())
}
