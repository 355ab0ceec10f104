//! Utility functions shared across the codebase.
//!
//! This module provides angle conversions, floating-point range reductions,
//! clock formatting for fractional hours, and other helper operations used
//! throughout the application.

use chrono::NaiveTime;
use std::path::Path;

/// Convert an angle from degrees to radians.
///
/// # Examples
/// ```
/// use sunalmanac::utils::to_radians;
/// assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Convert an angle from radians to degrees.
///
/// # Examples
/// ```
/// use sunalmanac::utils::to_degrees;
/// assert!((to_degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
/// ```
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

/// Reduce a value into `[0, modulus)` using a floating remainder.
///
/// Negative operands are shifted up by one modulus, and the rare case where
/// that shift rounds to exactly `modulus` folds back to zero.
fn reduce(value: f64, modulus: f64) -> f64 {
    let mut reduced = value % modulus;
    if reduced < 0.0 {
        reduced += modulus;
    }
    if reduced >= modulus {
        reduced -= modulus;
    }
    reduced
}

/// Normalize an angle in degrees to the range [0, 360).
///
/// # Examples
/// ```
/// use sunalmanac::utils::normalize_degrees;
/// assert_eq!(normalize_degrees(370.0), 10.0);
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// ```
pub fn normalize_degrees(degrees: f64) -> f64 {
    reduce(degrees, 360.0)
}

/// Normalize a clock value in hours to the range [0, 24).
///
/// # Examples
/// ```
/// use sunalmanac::utils::normalize_hours;
/// assert_eq!(normalize_hours(25.5), 1.5);
/// assert_eq!(normalize_hours(-2.0), 22.0);
/// ```
pub fn normalize_hours(hours: f64) -> f64 {
    reduce(hours, 24.0)
}

/// Format fractional hours as `HH:MM`, truncating to whole minutes.
///
/// The value is expected to lie in [0, 24). Seconds are dropped rather than
/// rounded, so 5:59:59 prints as `05:59`.
///
/// # Examples
/// ```
/// use sunalmanac::utils::format_hours_hm;
/// assert_eq!(format_hours_hm(5.5), "05:30");
/// assert_eq!(format_hours_hm(20.999), "20:59");
/// ```
pub fn format_hours_hm(hours: f64) -> String {
    let whole_hours = hours as u32;
    let minutes = ((hours - whole_hours as f64) * 60.0) as u32;
    format!("{:02}:{:02}", whole_hours, minutes)
}

/// Convert fractional hours in [0, 24) into a clock time with second resolution.
///
/// Returns `None` for values outside the clock range or non-finite input.
pub fn hours_to_naive_time(hours: f64) -> Option<NaiveTime> {
    if !hours.is_finite() || !(0.0..24.0).contains(&hours) {
        return None;
    }
    let seconds = ((hours * 3600.0).floor() as u32).min(86_399);
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}

/// Render a path for log output, abbreviating the home directory to `~`.
pub fn path_for_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_degree_radian_round_trip() {
        for degrees in [0.0, 45.0, 90.8333, 180.0, 270.0, -123.4] {
            assert!((to_degrees(to_radians(degrees)) - degrees).abs() < 1e-9);
        }
    }

    #[test]
    fn test_normalize_degrees_handles_negative_operands() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }

    #[test]
    fn test_normalize_never_returns_the_modulus() {
        // -tiny + 360 rounds to 360.0 in f64
        let tiny = -1e-16;
        let normalized = normalize_degrees(tiny);
        assert!((0.0..360.0).contains(&normalized));

        let normalized = normalize_hours(tiny);
        assert!((0.0..24.0).contains(&normalized));
    }

    #[test]
    fn test_normalize_hours() {
        assert_eq!(normalize_hours(24.0), 0.0);
        assert_eq!(normalize_hours(-0.5), 23.5);
        assert_eq!(normalize_hours(47.0), 23.0);
    }

    #[test]
    fn test_format_hours_hm_truncates() {
        assert_eq!(format_hours_hm(0.0), "00:00");
        assert_eq!(format_hours_hm(5.5311669769718), "05:31");
        assert_eq!(format_hours_hm(20.660364431485057), "20:39");
        assert_eq!(format_hours_hm(23.9999), "23:59");
    }

    #[test]
    fn test_hours_to_naive_time() {
        let time = hours_to_naive_time(5.5).unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (5, 30, 0));

        let late = hours_to_naive_time(23.99999999).unwrap();
        assert_eq!(late.hour(), 23);

        assert!(hours_to_naive_time(24.0).is_none());
        assert!(hours_to_naive_time(-0.1).is_none());
        assert!(hours_to_naive_time(f64::NAN).is_none());
    }

    #[test]
    fn test_path_for_display_abbreviates_home() {
        if let Some(home) = dirs::home_dir() {
            let path = home.join("sunrise_sunset.csv");
            assert_eq!(path_for_display(&path), "~/sunrise_sunset.csv");
        }
    }
}
