//! Error types for the almanac calculations.
//!
//! Only caller-supplied input can fail. A sun that never crosses the requested
//! zenith is a regular outcome and is reported through
//! [`SolarEventResult`](crate::geo::solar::SolarEventResult), not through this type.

use thiserror::Error;

/// Result type for almanac operations
pub type Result<T> = std::result::Result<T, SolarError>;

/// Errors raised when inputs fall outside the domain of the calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolarError {
    /// Month outside 1-12
    #[error("invalid month {0} (must be between 1 and 12)")]
    InvalidMonth(u32),

    /// Day that does not exist in the given month
    #[error("invalid day {day} for {year:04}-{month:02} (month has {days_in_month} days)")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        days_in_month: u32,
    },

    /// Year that the Gregorian calendar helpers cannot represent
    #[error("year {0} is outside the supported calendar range")]
    InvalidYear(i32),

    #[error("invalid latitude {0}° (must be between -90° and +90°)")]
    InvalidLatitude(f64),

    #[error("invalid longitude {0}° (must be between -180° and +180°)")]
    InvalidLongitude(f64),

    #[error("invalid UTC offset {value} hours (must be between {min} and {max})")]
    InvalidUtcOffset { value: f64, min: f64, max: f64 },

    #[error("invalid zenith {0}° (must be greater than 0° and less than 180°)")]
    InvalidZenith(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_value() {
        assert_eq!(
            SolarError::InvalidMonth(13).to_string(),
            "invalid month 13 (must be between 1 and 12)"
        );
        assert!(SolarError::InvalidLatitude(91.5).to_string().contains("91.5"));

        let err = SolarError::InvalidDay {
            year: 2025,
            month: 2,
            day: 29,
            days_in_month: 28,
        };
        assert_eq!(
            err.to_string(),
            "invalid day 29 for 2025-02 (month has 28 days)"
        );
    }
}
