//! # Sunalmanac
//!
//! Almanac sunrise and sunset tables for any location.
//!
//! Sunalmanac computes local sunrise and sunset times with the classic almanac
//! algorithm and writes them as a CSV table, one row per day of a month.
//! Locations where the sun never crosses the requested zenith angle on a date
//! (polar night, midnight sun) are reported as unavailable instead of failing.
//!
//! ## Architecture
//!
//! - **geo**: Observer location, zenith presets, calendar helpers and the solar calculator
//! - **error**: Typed errors for out-of-domain calculator input
//! - **report**: CSV table output
//! - **config**: Configuration loading, validation, and default generation
//! - **args**: Command-line parsing into actions
//! - **commands**: The month and day commands
//! - **constants**: Algorithm coefficients, defaults and validation limits
//! - **logger**: Structured logging with visual formatting
//! - **utils**: Angle conversion, range reduction and time formatting

pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod logger;
pub mod report;
pub mod utils;

// Re-export important types for easier access
pub use config::Config;
pub use error::SolarError;
pub use geo::{
    CalendarDate, DailyEvents, GeoLocation, SolarEventResult, Zenith, compute_sunrise_sunset,
    month_events,
};
pub use logger::{Log, LogLevel};
