//! CSV tables of sunrise and sunset times.
//!
//! One row per date with the columns `Date,Sunrise,Sunset`. Times are local
//! clock `HH:MM`, truncated to the whole minute. A date without events gets
//! the `N/A` marker in both time columns.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::constants::*;
use crate::geo::DailyEvents;
use crate::utils::format_hours_hm;

#[derive(Debug, Serialize)]
struct TableRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Sunrise")]
    sunrise: String,
    #[serde(rename = "Sunset")]
    sunset: String,
}

impl From<&DailyEvents> for TableRow {
    fn from(day: &DailyEvents) -> Self {
        let (sunrise, sunset) = match day.result.times() {
            Some((sunrise, sunset)) => (format_hours_hm(sunrise), format_hours_hm(sunset)),
            None => (
                UNAVAILABLE_MARKER.to_string(),
                UNAVAILABLE_MARKER.to_string(),
            ),
        };
        Self {
            date: day.date.to_string(),
            sunrise,
            sunset,
        }
    }
}

/// Write the table to any writer. The header is always written, even for an
/// empty slice.
pub fn write_csv<W: Write>(writer: W, days: &[DailyEvents]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record([CSV_HEADER_DATE, CSV_HEADER_SUNRISE, CSV_HEADER_SUNSET])
        .context("Failed to write CSV header")?;

    for day in days {
        csv_writer
            .serialize(TableRow::from(day))
            .with_context(|| format!("Failed to write row for {}", day.date))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Write the table to `path`, or to stdout when the path is `-`.
pub fn write_csv_to_path(path: &str, days: &[DailyEvents]) -> Result<()> {
    if is_stdout(path) {
        let stdout = io::stdout();
        return write_csv(stdout.lock(), days);
    }

    let file = File::create(Path::new(path))
        .with_context(|| format!("Failed to create output file {}", path))?;
    write_csv(file, days).with_context(|| format!("Failed to write table to {}", path))
}

/// Whether the output path designates stdout.
pub fn is_stdout(path: &str) -> bool {
    path == STDOUT_PATH
}
