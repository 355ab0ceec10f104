//! Gregorian calendar helpers for the almanac tables.
//!
//! The solar calculator trusts the day of month it is given. This module is
//! the calendar provider that hands it valid dates: leap-year aware month
//! lengths, validated [`CalendarDate`] construction, and a lazy sequence of
//! every day in a month.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

use crate::error::{Result, SolarError};

/// A Gregorian calendar date supplied to one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31, bounded by the month length
    pub day: u32,
}

impl CalendarDate {
    /// Create a date, checking the month and the day against the month length.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(SolarError::InvalidMonth(month));
        }
        let days = days_in_month(year, month).ok_or(SolarError::InvalidYear(year))?;
        if !(1..=days).contains(&day) {
            return Err(SolarError::InvalidDay {
                year,
                month,
                day,
                days_in_month: days,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Today's date on the local system clock.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or `None` for an invalid month or a year
/// outside chrono's supported range.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// Lazily yield every date of a month in order.
///
/// # Errors
/// `InvalidMonth` for a month outside 1-12, `InvalidYear` when the year
/// cannot be represented.
pub fn month_dates(year: i32, month: u32) -> Result<impl Iterator<Item = CalendarDate>> {
    if !(1..=12).contains(&month) {
        return Err(SolarError::InvalidMonth(month));
    }
    let days = days_in_month(year, month).ok_or(SolarError::InvalidYear(year))?;
    Ok((1..=days).map(move |day| CalendarDate { year, month, day }))
}
