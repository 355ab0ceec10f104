//! Application constants and default values for sunalmanac.
//!
//! This module contains the almanac algorithm coefficients, configuration
//! defaults, validation limits, and operational constants used throughout
//! the application.

// ═══ Default Location ═══
// Used when neither the config file nor the command line provides a value

pub const DEFAULT_LATITUDE: f64 = 41.0082; // Istanbul
pub const DEFAULT_LONGITUDE: f64 = 28.9784; // Istanbul, positive east
pub const DEFAULT_UTC_OFFSET: f64 = 3.0; // hours (UTC+3)
pub const DEFAULT_ZENITH: &str = "official";
pub const DEFAULT_OUTPUT: &str = "sunrise_sunset.csv";

// ═══ Zenith Presets ═══
// Sun-center-to-zenith angle at which the event is defined to occur

pub const ZENITH_OFFICIAL: f64 = 90.8333; // refraction and solar disk radius
pub const ZENITH_CIVIL: f64 = 96.0;
pub const ZENITH_NAUTICAL: f64 = 102.0;
pub const ZENITH_ASTRONOMICAL: f64 = 108.0;

// ═══ Almanac Algorithm Coefficients ═══

pub const SUNRISE_HOUR: f64 = 6.0; // approximate local hour of the rise branch
pub const SUNSET_HOUR: f64 = 18.0; // approximate local hour of the set branch
pub const MEAN_ANOMALY_RATE: f64 = 0.9856; // degrees per day
pub const MEAN_ANOMALY_OFFSET: f64 = 3.289;
pub const EQUATION_OF_CENTER_1: f64 = 1.916;
pub const EQUATION_OF_CENTER_2: f64 = 0.020;
pub const PERIHELION_LONGITUDE: f64 = 282.634;
pub const COS_OBLIQUITY: f64 = 0.91764;
pub const SIN_OBLIQUITY: f64 = 0.39782;
pub const SIDEREAL_RATE: f64 = 0.06571; // hours per day
pub const SIDEREAL_OFFSET: f64 = 6.622; // hours
pub const DEGREES_PER_HOUR: f64 = 15.0;

// ═══ Validation Limits ═══

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;
pub const MINIMUM_UTC_OFFSET: f64 = -12.0; // Baker Island
pub const MAXIMUM_UTC_OFFSET: f64 = 14.0; // Line Islands
pub const MINIMUM_ZENITH: f64 = 0.0; // exclusive
pub const MAXIMUM_ZENITH: f64 = 180.0; // exclusive
pub const POLAR_CIRCLE_LATITUDE: f64 = 66.5; // beyond this some dates have no events

// ═══ Output Formatting ═══

pub const UNAVAILABLE_MARKER: &str = "N/A";
pub const CSV_HEADER_DATE: &str = "Date";
pub const CSV_HEADER_SUNRISE: &str = "Sunrise";
pub const CSV_HEADER_SUNSET: &str = "Sunset";
pub const STDOUT_PATH: &str = "-";

// ═══ Configuration Files ═══

pub const CONFIG_DIR_NAME: &str = "sunalmanac";
pub const CONFIG_FILE_NAME: &str = "sunalmanac.toml";

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1; // General failure
