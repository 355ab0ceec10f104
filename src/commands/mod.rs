//! Command-line command handlers for sunalmanac.
//!
//! Each command lives in its own submodule. Both share the configuration
//! resolution below: file (or `--config` path), then command-line overrides.

pub mod day;
pub mod month;

use anyhow::Result;
use std::path::PathBuf;

use crate::args::GlobalOptions;
use crate::config::Config;
use crate::geo::CalendarDate;
use crate::geo::solar::{EventKind, event_terms};
use crate::geo::GeoLocation;
use crate::logger::Log;

/// Load the configuration for a command and apply command-line overrides.
///
/// Returns the config together with the file it was read from.
pub fn resolve_config(options: &GlobalOptions) -> Result<(Config, PathBuf)> {
    let (mut config, source) = match &options.config_path {
        Some(path) => (Config::load_from_path(path)?, path.clone()),
        None => (Config::load()?, Config::get_config_path()?),
    };
    config.apply_overrides(&options.overrides)?;
    Ok((config, source))
}

/// Log the intermediate terms of both branches for one date.
///
/// Only produces output when debug logging is enabled.
pub(crate) fn log_event_terms(date: CalendarDate, geo: &GeoLocation) {
    if !Log::is_debug() {
        return;
    }

    for terms in event_terms(date, geo) {
        let branch = match terms.kind {
            EventKind::Sunrise => "sunrise",
            EventKind::Sunset => "sunset",
        };
        Log::log_debug(&format!(
            "{} {}: t={:.4} M={:.4}° L={:.4}° RA={:.4}h sinDec={:.5} cosDec={:.5} cosH={:.5}",
            date,
            branch,
            terms.approximate_time,
            terms.mean_anomaly,
            terms.true_longitude,
            terms.right_ascension_hours,
            terms.sin_declination,
            terms.cos_declination,
            terms.cos_hour_angle,
        ));
    }
}
