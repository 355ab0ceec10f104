//! Implementation of the day command.
//!
//! Prints sunrise, sunset and day length for a single date.

use anyhow::Result;

use crate::args::GlobalOptions;
use crate::commands::{log_event_terms, resolve_config};
use crate::geo::{CalendarDate, SolarEventResult, compute_sunrise_sunset};
use crate::logger::Log;
use crate::utils::format_hours_hm;

/// Handle the day command.
pub fn handle_day_command(options: &GlobalOptions, date: Option<CalendarDate>) -> Result<()> {
    let (config, source) = resolve_config(options)?;

    Log::log_version();
    config.log_config(&source);

    let date = date.unwrap_or_else(CalendarDate::today);
    let geo = config.geo_location()?;

    log_event_terms(date, &geo);
    let result = compute_sunrise_sunset(date, &geo)?;

    Log::log_block_start(&format!("{} at {}", date, geo));
    for line in describe(&result) {
        Log::log_indented(&line);
    }
    Log::log_end();
    Ok(())
}

/// Human-readable lines for one result.
fn describe(result: &SolarEventResult) -> Vec<String> {
    let daylight = result.daylight_hours();
    let length = format!(
        "Day length: {}h {:02}m",
        daylight as u32,
        ((daylight - daylight.floor()) * 60.0) as u32
    );

    match result {
        SolarEventResult::Events { sunrise, sunset } => vec![
            format!("Sunrise: {}", format_hours_hm(*sunrise)),
            format!("Sunset:  {}", format_hours_hm(*sunset)),
            length,
        ],
        SolarEventResult::NeverRises => vec![
            "The sun does not rise on this date (polar night)".to_string(),
            length,
        ],
        SolarEventResult::NeverSets => vec![
            "The sun does not set on this date (midnight sun)".to_string(),
            length,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_events() {
        let lines = describe(&SolarEventResult::Events {
            sunrise: 5.5,
            sunset: 20.75,
        });
        assert_eq!(lines[0], "Sunrise: 05:30");
        assert_eq!(lines[1], "Sunset:  20:45");
        assert_eq!(lines[2], "Day length: 15h 15m");
    }

    #[test]
    fn test_describe_polar_cases() {
        let night = describe(&SolarEventResult::NeverRises);
        assert!(night[0].contains("polar night"));
        assert_eq!(night[1], "Day length: 0h 00m");

        let day = describe(&SolarEventResult::NeverSets);
        assert!(day[0].contains("midnight sun"));
        assert_eq!(day[1], "Day length: 24h 00m");
    }
}
