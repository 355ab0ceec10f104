//! Geographic location and sunrise/sunset calculations.
//!
//! This module provides functionality for:
//! - Describing an observer location with its clock offset and event zenith
//! - Gregorian calendar helpers for iterating the days of a month
//! - Almanac solar calculations for sunrise/sunset times

pub mod calendar;
pub mod solar;

pub use calendar::{CalendarDate, days_in_month, is_leap_year, month_dates};
pub use solar::{DailyEvents, SolarEventResult, compute_sunrise_sunset, month_events};

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::{Result, SolarError};

/// Zenith angle at which sunrise and sunset are defined to occur.
///
/// The named presets follow the almanac conventions. `Custom` carries any
/// other sun-center-to-zenith angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "ZenithRepr")]
pub enum Zenith {
    /// Upper limb on the horizon, corrected for refraction (90°50')
    #[default]
    Official,
    /// Civil twilight, sun 6° below the horizon
    Civil,
    /// Nautical twilight, sun 12° below the horizon
    Nautical,
    /// Astronomical twilight, sun 18° below the horizon
    Astronomical,
    /// Explicit angle in degrees
    Custom(f64),
}

impl Zenith {
    /// Angle in degrees consumed by the calculator.
    pub fn degrees(&self) -> f64 {
        match self {
            Zenith::Official => ZENITH_OFFICIAL,
            Zenith::Civil => ZENITH_CIVIL,
            Zenith::Nautical => ZENITH_NAUTICAL,
            Zenith::Astronomical => ZENITH_ASTRONOMICAL,
            Zenith::Custom(degrees) => *degrees,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zenith::Official => "official",
            Zenith::Civil => "civil",
            Zenith::Nautical => "nautical",
            Zenith::Astronomical => "astronomical",
            Zenith::Custom(_) => "custom",
        }
    }
}

impl fmt::Display for Zenith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}°)", self.as_str(), self.degrees())
    }
}

impl FromStr for Zenith {
    type Err = String;

    /// Parse a preset name (case-insensitive) or a number of degrees.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "official" => Ok(Zenith::Official),
            "civil" => Ok(Zenith::Civil),
            "nautical" => Ok(Zenith::Nautical),
            "astronomical" => Ok(Zenith::Astronomical),
            other => other.parse::<f64>().map(Zenith::Custom).map_err(|_| {
                format!(
                    "Unknown zenith '{}'. Use official, civil, nautical, astronomical or degrees",
                    s
                )
            }),
        }
    }
}

/// Config representation: either `zenith = "civil"` or `zenith = 96.0`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ZenithRepr {
    Degrees(f64),
    Name(String),
}

impl TryFrom<ZenithRepr> for Zenith {
    type Error = String;

    fn try_from(repr: ZenithRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            ZenithRepr::Degrees(degrees) => Ok(Zenith::Custom(degrees)),
            ZenithRepr::Name(name) => name.parse(),
        }
    }
}

/// Observer location together with its clock offset and event zenith.
///
/// Created once by the caller and passed by reference to every calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Degrees, positive north
    pub latitude: f64,
    /// Degrees, positive east
    pub longitude: f64,
    /// Local clock offset from UTC in hours
    pub utc_offset_hours: f64,
    /// Sun-center-to-zenith angle of the event in degrees
    pub zenith_degrees: f64,
}

impl GeoLocation {
    /// Create a validated location.
    ///
    /// # Errors
    /// Returns the first out-of-domain value as a [`SolarError`].
    pub fn new(
        latitude: f64,
        longitude: f64,
        utc_offset_hours: f64,
        zenith: Zenith,
    ) -> Result<Self> {
        let geo = Self {
            latitude,
            longitude,
            utc_offset_hours,
            zenith_degrees: zenith.degrees(),
        };
        geo.validate()?;
        Ok(geo)
    }

    /// Check every field against its physical range.
    ///
    /// NaN fails every check since range containment is false for it.
    pub fn validate(&self) -> Result<()> {
        if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&self.latitude) {
            return Err(SolarError::InvalidLatitude(self.latitude));
        }
        if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&self.longitude) {
            return Err(SolarError::InvalidLongitude(self.longitude));
        }
        if !(MINIMUM_UTC_OFFSET..=MAXIMUM_UTC_OFFSET).contains(&self.utc_offset_hours) {
            return Err(SolarError::InvalidUtcOffset {
                value: self.utc_offset_hours,
                min: MINIMUM_UTC_OFFSET,
                max: MAXIMUM_UTC_OFFSET,
            });
        }
        if !(self.zenith_degrees > MINIMUM_ZENITH && self.zenith_degrees < MAXIMUM_ZENITH) {
            return Err(SolarError::InvalidZenith(self.zenith_degrees));
        }
        Ok(())
    }

    /// Same location with a different event zenith.
    pub fn with_zenith(self, zenith: Zenith) -> Self {
        Self {
            zenith_degrees: zenith.degrees(),
            ..self
        }
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            utc_offset_hours: DEFAULT_UTC_OFFSET,
            zenith_degrees: ZENITH_OFFICIAL,
        }
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.4}°{}, {:.4}°{} (UTC{:+})",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir,
            self.utc_offset_hours
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::*;

    #[test]
    fn test_coordinate_validation() {
        // Valid coordinates should work
        assert!(
            GeoLocation::new(
                TEST_ISTANBUL_LATITUDE,
                TEST_ISTANBUL_LONGITUDE,
                TEST_ISTANBUL_OFFSET,
                Zenith::Official
            )
            .is_ok()
        );

        // Invalid latitude should fail
        assert_eq!(
            GeoLocation::new(91.0, 0.0, 0.0, Zenith::Official),
            Err(SolarError::InvalidLatitude(91.0))
        );
        assert!(GeoLocation::new(-91.0, 0.0, 0.0, Zenith::Official).is_err());

        // Invalid longitude should fail
        assert_eq!(
            GeoLocation::new(0.0, 181.0, 0.0, Zenith::Official),
            Err(SolarError::InvalidLongitude(181.0))
        );
        assert!(GeoLocation::new(0.0, -181.0, 0.0, Zenith::Official).is_err());
    }

    #[test]
    fn test_boundary_coordinates_are_accepted() {
        assert!(GeoLocation::new(90.0, 180.0, 14.0, Zenith::Official).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0, -12.0, Zenith::Official).is_ok());
    }

    #[test]
    fn test_nan_inputs_are_rejected() {
        assert!(GeoLocation::new(f64::NAN, 0.0, 0.0, Zenith::Official).is_err());
        assert!(GeoLocation::new(0.0, f64::NAN, 0.0, Zenith::Official).is_err());
        assert!(GeoLocation::new(0.0, 0.0, f64::NAN, Zenith::Official).is_err());
        assert!(GeoLocation::new(0.0, 0.0, 0.0, Zenith::Custom(f64::NAN)).is_err());
    }

    #[test]
    fn test_offset_and_zenith_validation() {
        assert!(matches!(
            GeoLocation::new(0.0, 0.0, 15.0, Zenith::Official),
            Err(SolarError::InvalidUtcOffset { .. })
        ));
        assert_eq!(
            GeoLocation::new(0.0, 0.0, 0.0, Zenith::Custom(0.0)),
            Err(SolarError::InvalidZenith(0.0))
        );
        assert!(GeoLocation::new(0.0, 0.0, 0.0, Zenith::Custom(180.0)).is_err());
    }

    #[test]
    fn test_zenith_presets() {
        assert_eq!(Zenith::Official.degrees(), 90.8333);
        assert_eq!(Zenith::Civil.degrees(), 96.0);
        assert_eq!(Zenith::Nautical.degrees(), 102.0);
        assert_eq!(Zenith::Astronomical.degrees(), 108.0);
        assert_eq!(Zenith::Custom(91.5).degrees(), 91.5);
    }

    #[test]
    fn test_zenith_parsing() {
        assert_eq!("official".parse::<Zenith>(), Ok(Zenith::Official));
        assert_eq!("Civil".parse::<Zenith>(), Ok(Zenith::Civil));
        assert_eq!(" nautical ".parse::<Zenith>(), Ok(Zenith::Nautical));
        assert_eq!("90.5".parse::<Zenith>(), Ok(Zenith::Custom(90.5)));
        assert!("twilight".parse::<Zenith>().is_err());
    }

    #[test]
    fn test_with_zenith_keeps_coordinates() {
        let geo = GeoLocation::default().with_zenith(Zenith::Civil);
        assert_eq!(geo.latitude, TEST_ISTANBUL_LATITUDE);
        assert_eq!(geo.longitude, TEST_ISTANBUL_LONGITUDE);
        assert_eq!(geo.zenith_degrees, 96.0);
    }

    #[test]
    fn test_display() {
        let geo = GeoLocation::new(40.7128, -74.006, -4.0, Zenith::Official).unwrap();
        assert_eq!(geo.to_string(), "40.7128°N, 74.0060°W (UTC-4)");
    }
}
