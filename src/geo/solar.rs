//! Almanac sunrise and sunset calculations.
//!
//! This module implements the classic almanac algorithm for the sun's rise
//! and set times: an approximate day of year, the sun's mean anomaly, true
//! ecliptic longitude, right ascension and declination, and finally the
//! local hour angle at the requested zenith. The pipeline runs twice, once
//! for a rise branch seeded at 06:00 local mean time and once for a set
//! branch seeded at 18:00, and the two branches succeed or fail together.
//!
//! Every trigonometric call takes its argument in degrees converted at the
//! call site, and every intermediate angle is kept in degrees.

use chrono::NaiveTime;

use crate::constants::*;
use crate::error::{Result, SolarError};
use crate::geo::GeoLocation;
use crate::geo::calendar::{CalendarDate, month_dates};
use crate::utils::{hours_to_naive_time, normalize_degrees, normalize_hours, to_degrees, to_radians};

/// Outcome of one sunrise/sunset calculation.
///
/// Times are local clock hours in [0, 24). When the sun does not cross the
/// requested zenith on either branch, neither time is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarEventResult {
    /// Both events occur
    Events { sunrise: f64, sunset: f64 },
    /// The sun stays below the zenith threshold (polar night)
    NeverRises,
    /// The sun stays above the zenith threshold (midnight sun)
    NeverSets,
}

impl SolarEventResult {
    /// Whether both times are available.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Events { .. })
    }

    pub fn sunrise(&self) -> Option<f64> {
        match self {
            Self::Events { sunrise, .. } => Some(*sunrise),
            _ => None,
        }
    }

    pub fn sunset(&self) -> Option<f64> {
        match self {
            Self::Events { sunset, .. } => Some(*sunset),
            _ => None,
        }
    }

    /// `(sunrise, sunset)` in local hours, or `None` when unavailable.
    pub fn times(&self) -> Option<(f64, f64)> {
        match self {
            Self::Events { sunrise, sunset } => Some((*sunrise, *sunset)),
            _ => None,
        }
    }

    pub fn sunrise_time(&self) -> Option<NaiveTime> {
        self.sunrise().and_then(hours_to_naive_time)
    }

    pub fn sunset_time(&self) -> Option<NaiveTime> {
        self.sunset().and_then(hours_to_naive_time)
    }

    /// Hours between sunrise and sunset.
    ///
    /// A sunset that falls before sunrise on the local clock is taken to be on
    /// the following day. Polar night has no daylight, midnight sun has 24 hours.
    pub fn daylight_hours(&self) -> f64 {
        match self {
            Self::Events { sunrise, sunset } => normalize_hours(sunset - sunrise),
            Self::NeverRises => 0.0,
            Self::NeverSets => 24.0,
        }
    }
}

/// Which of the two structurally identical branches is being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Sunrise,
    Sunset,
}

impl EventKind {
    /// Local mean hour used to seed the approximate event time.
    fn approximate_hour(self) -> f64 {
        match self {
            EventKind::Sunrise => SUNRISE_HOUR,
            EventKind::Sunset => SUNSET_HOUR,
        }
    }
}

/// Intermediate quantities of one branch of the calculation.
///
/// Angles are in degrees unless the field name says otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventTerms {
    pub kind: EventKind,
    /// Approximate event time `t` in days
    pub approximate_time: f64,
    pub mean_anomaly: f64,
    /// Ecliptic longitude in [0, 360)
    pub true_longitude: f64,
    /// Right ascension in the quadrant of the true longitude, in hours
    pub right_ascension_hours: f64,
    pub sin_declination: f64,
    pub cos_declination: f64,
    /// Outside [-1, 1] means the sun never reaches the zenith angle
    pub cos_hour_angle: f64,
}

impl EventTerms {
    fn compute(kind: EventKind, day_of_year: f64, geo: &GeoLocation) -> Self {
        let lng_hour = geo.longitude / DEGREES_PER_HOUR;
        let approximate_time = day_of_year + (kind.approximate_hour() - lng_hour) / 24.0;

        let mean_anomaly = MEAN_ANOMALY_RATE * approximate_time - MEAN_ANOMALY_OFFSET;

        let true_longitude = normalize_degrees(
            mean_anomaly
                + EQUATION_OF_CENTER_1 * to_radians(mean_anomaly).sin()
                + EQUATION_OF_CENTER_2 * to_radians(2.0 * mean_anomaly).sin()
                + PERIHELION_LONGITUDE,
        );

        let right_ascension_hours = right_ascension_degrees(true_longitude) / DEGREES_PER_HOUR;

        let sin_declination = SIN_OBLIQUITY * to_radians(true_longitude).sin();
        let cos_declination = sin_declination.asin().cos();

        let latitude = to_radians(geo.latitude);
        let cos_hour_angle = (to_radians(geo.zenith_degrees).cos()
            - sin_declination * latitude.sin())
            / (cos_declination * latitude.cos());

        Self {
            kind,
            approximate_time,
            mean_anomaly,
            true_longitude,
            right_ascension_hours,
            sin_declination,
            cos_declination,
            cos_hour_angle,
        }
    }

    /// Local clock time of the event in [0, 24).
    ///
    /// Only meaningful when `cos_hour_angle` lies in [-1, 1].
    fn local_time(&self, geo: &GeoLocation) -> f64 {
        let arc = to_degrees(self.cos_hour_angle.acos());
        let hour_angle = match self.kind {
            EventKind::Sunrise => 360.0 - arc,
            EventKind::Sunset => arc,
        } / DEGREES_PER_HOUR;

        let local_mean_time = hour_angle + self.right_ascension_hours
            - SIDEREAL_RATE * self.approximate_time
            - SIDEREAL_OFFSET;

        let universal_time = normalize_hours(local_mean_time - geo.longitude / DEGREES_PER_HOUR);

        let mut local = universal_time + geo.utc_offset_hours;
        if local < 0.0 {
            local += 24.0;
        }
        if local >= 24.0 {
            local -= 24.0;
        }
        local
    }
}

/// Approximate day of year from the almanac integer formula.
///
/// Each quotient truncates exactly as the integer formula prescribes; the
/// leap-year term uses floor division so it stays correct for any year.
///
/// # Examples
/// ```
/// use sunalmanac::geo::solar::day_of_year_approximation;
/// assert_eq!(day_of_year_approximation(2025, 6, 21), 172.0);
/// assert_eq!(day_of_year_approximation(2024, 3, 1), 61.0);
/// ```
pub fn day_of_year_approximation(year: i32, month: u32, day: u32) -> f64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let n1 = 275 * month / 9;
    let n2 = (month + 9) / 12;
    // year - 4 * floor(year / 4)
    let n3 = 1 + (year.rem_euclid(4) + 2) / 3;
    (n1 - n2 * n3 + day - 30) as f64
}

/// Right ascension in degrees, moved into the 90° quadrant of `true_longitude`.
///
/// `atan` only answers in (-90°, 90°), so the raw value is reduced into
/// [0, 360) and shifted by the difference of the two quadrant bases.
pub fn right_ascension_degrees(true_longitude: f64) -> f64 {
    let raw = to_degrees((COS_OBLIQUITY * to_radians(true_longitude).tan()).atan());
    let right_ascension = normalize_degrees(raw);

    let longitude_quadrant = (true_longitude / 90.0).floor() * 90.0;
    let ascension_quadrant = (right_ascension / 90.0).floor() * 90.0;
    right_ascension + (longitude_quadrant - ascension_quadrant)
}

/// Intermediate terms of the rise and set branches, in that order.
///
/// No validation is performed.
pub fn event_terms(date: CalendarDate, geo: &GeoLocation) -> [EventTerms; 2] {
    let day_of_year = day_of_year_approximation(date.year, date.month, date.day);
    [
        EventTerms::compute(EventKind::Sunrise, day_of_year, geo),
        EventTerms::compute(EventKind::Sunset, day_of_year, geo),
    ]
}

/// Run the almanac pipeline without validating any input.
///
/// An out-of-range month yields a meaningless result and non-finite
/// coordinates propagate NaN into the returned times. Prefer
/// [`compute_sunrise_sunset`] unless the inputs are already known to be valid.
pub fn compute_unchecked(date: CalendarDate, geo: &GeoLocation) -> SolarEventResult {
    let [rise, set] = event_terms(date, geo);

    // Both branches are checked before either time is produced
    if rise.cos_hour_angle > 1.0 || set.cos_hour_angle > 1.0 {
        return SolarEventResult::NeverRises;
    }
    if rise.cos_hour_angle < -1.0 || set.cos_hour_angle < -1.0 {
        return SolarEventResult::NeverSets;
    }

    SolarEventResult::Events {
        sunrise: rise.local_time(geo),
        sunset: set.local_time(geo),
    }
}

/// Compute local sunrise and sunset for a date and location.
///
/// The day of month is trusted as given; build dates with
/// [`CalendarDate::new`] to have it checked.
///
/// # Arguments
/// * `date` - Calendar date of the events
/// * `geo` - Observer location, clock offset and event zenith
///
/// # Returns
/// * `Ok(SolarEventResult::Events { .. })` - Both times in local hours
/// * `Ok(NeverRises | NeverSets)` - The sun does not cross the zenith angle
/// * `Err(_)` - Month or location outside its valid range
///
/// # Examples
/// ```
/// use sunalmanac::geo::{CalendarDate, GeoLocation, Zenith, compute_sunrise_sunset};
///
/// let istanbul = GeoLocation::new(41.0082, 28.9784, 3.0, Zenith::Official).unwrap();
/// let date = CalendarDate::new(2025, 6, 21).unwrap();
/// let (sunrise, sunset) = compute_sunrise_sunset(date, &istanbul).unwrap().times().unwrap();
/// assert!(sunrise > 5.0 && sunrise < 6.0);
/// assert!(sunset > 20.0 && sunset < 21.0);
/// ```
pub fn compute_sunrise_sunset(date: CalendarDate, geo: &GeoLocation) -> Result<SolarEventResult> {
    if !(1..=12).contains(&date.month) {
        return Err(SolarError::InvalidMonth(date.month));
    }
    geo.validate()?;
    Ok(compute_unchecked(date, geo))
}

/// The result for one date of a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyEvents {
    pub date: CalendarDate,
    pub result: SolarEventResult,
}

/// Compute every day of a month, one independent calculation per date.
pub fn month_events(year: i32, month: u32, geo: &GeoLocation) -> Result<Vec<DailyEvents>> {
    month_dates(year, month)?
        .map(|date| compute_sunrise_sunset(date, geo).map(|result| DailyEvents { date, result }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::*;
    use crate::geo::Zenith;

    fn istanbul() -> GeoLocation {
        GeoLocation::new(
            TEST_ISTANBUL_LATITUDE,
            TEST_ISTANBUL_LONGITUDE,
            TEST_ISTANBUL_OFFSET,
            Zenith::Official,
        )
        .unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_day_of_year_approximation() {
        assert_eq!(day_of_year_approximation(2025, 1, 1), 1.0);
        assert_eq!(day_of_year_approximation(2025, 3, 1), 60.0);
        assert_eq!(day_of_year_approximation(2024, 3, 1), 61.0);
        assert_eq!(day_of_year_approximation(2025, 12, 31), 365.0);
        assert_eq!(day_of_year_approximation(2024, 12, 31), 366.0);
    }

    #[test]
    fn test_right_ascension_stays_near_longitude() {
        for step in 0..36 {
            let longitude = step as f64 * 10.0;
            let ascension = right_ascension_degrees(longitude);
            assert!(
                (ascension - longitude).abs() <= 90.0,
                "RA {} too far from L {}",
                ascension,
                longitude
            );
        }
    }

    #[test]
    fn test_right_ascension_shares_quadrant_inside_quadrants() {
        for step in 0..36 {
            let longitude = 5.0 + step as f64 * 10.0;
            let ascension = right_ascension_degrees(longitude);
            assert_eq!(
                (ascension / 90.0).floor(),
                (longitude / 90.0).floor(),
                "RA {} left the quadrant of L {}",
                ascension,
                longitude
            );
        }
    }

    #[test]
    fn test_istanbul_summer_solstice_reference_behaviour() {
        let result = compute_sunrise_sunset(date(2025, 6, 21), &istanbul()).unwrap();
        let (sunrise, sunset) = result.times().unwrap();

        assert!((sunrise - 5.531_166_977).abs() < 1e-6, "sunrise {}", sunrise);
        assert!((sunset - 20.660_364_431).abs() < 1e-6, "sunset {}", sunset);
    }

    #[test]
    fn test_polar_night_and_midnight_sun() {
        let arctic = GeoLocation::new(TEST_ARCTIC_LATITUDE, 28.9784, 3.0, Zenith::Official).unwrap();

        assert_eq!(
            compute_sunrise_sunset(date(2025, 12, 21), &arctic).unwrap(),
            SolarEventResult::NeverRises
        );
        assert_eq!(
            compute_sunrise_sunset(date(2025, 6, 21), &arctic).unwrap(),
            SolarEventResult::NeverSets
        );

        // Seasons are mirrored in the southern hemisphere
        let antarctic = GeoLocation::new(-TEST_ARCTIC_LATITUDE, 0.0, 0.0, Zenith::Official).unwrap();
        assert_eq!(
            compute_sunrise_sunset(date(2025, 6, 21), &antarctic).unwrap(),
            SolarEventResult::NeverRises
        );
    }

    #[test]
    fn test_unavailability_follows_hour_angle_domain() {
        let arctic = GeoLocation::new(TEST_ARCTIC_LATITUDE, 28.9784, 3.0, Zenith::Official).unwrap();
        let winter = date(2025, 12, 21);

        let [rise, set] = event_terms(winter, &arctic);
        assert_eq!(rise.kind, EventKind::Sunrise);
        assert_eq!(set.kind, EventKind::Sunset);
        assert!(rise.cos_hour_angle > 1.0);
        assert!(set.cos_hour_angle > 1.0);

        let result = compute_unchecked(winter, &arctic);
        assert!(!result.is_available());
        assert_eq!(result.sunrise(), None);
        assert_eq!(result.sunset(), None);
    }

    #[test]
    fn test_branch_terms_differ_only_by_seed_hour() {
        let [rise, set] = event_terms(date(2025, 3, 20), &istanbul());
        assert!((set.approximate_time - rise.approximate_time - 0.5).abs() < 1e-12);
        assert!((0.0..360.0).contains(&rise.true_longitude));
        assert!((0.0..360.0).contains(&set.true_longitude));
    }

    #[test]
    fn test_local_time_wraps_past_midnight() {
        // UTC+14 pushes the summer sunset beyond 24:00
        let geo = GeoLocation::new(TEST_ISTANBUL_LATITUDE, TEST_ISTANBUL_LONGITUDE, 14.0, Zenith::Official)
            .unwrap();
        let (sunrise, sunset) = compute_sunrise_sunset(date(2025, 6, 21), &geo)
            .unwrap()
            .times()
            .unwrap();

        assert!((sunrise - 16.531_166_977).abs() < 1e-6);
        assert!((sunset - 7.660_364_431).abs() < 1e-6);
        assert!((0.0..24.0).contains(&sunset));
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let bogus = CalendarDate {
            year: 2025,
            month: 13,
            day: 1,
        };
        assert_eq!(
            compute_sunrise_sunset(bogus, &istanbul()),
            Err(SolarError::InvalidMonth(13))
        );

        // The unchecked pipeline still answers without panicking
        let _ = compute_unchecked(bogus, &istanbul());
    }

    #[test]
    fn test_invalid_location_is_rejected_but_unchecked_propagates_nan() {
        let broken = GeoLocation {
            latitude: f64::NAN,
            ..istanbul()
        };
        assert!(matches!(
            compute_sunrise_sunset(date(2025, 6, 21), &broken),
            Err(SolarError::InvalidLatitude(_))
        ));

        let result = compute_unchecked(date(2025, 6, 21), &broken);
        let (sunrise, sunset) = result.times().unwrap();
        assert!(sunrise.is_nan());
        assert!(sunset.is_nan());
    }

    #[test]
    fn test_wider_zenith_lengthens_the_day() {
        let official = compute_sunrise_sunset(date(2025, 6, 21), &istanbul()).unwrap();
        let civil =
            compute_sunrise_sunset(date(2025, 6, 21), &istanbul().with_zenith(Zenith::Civil))
                .unwrap();

        assert!(civil.sunrise().unwrap() < official.sunrise().unwrap());
        assert!(civil.sunset().unwrap() > official.sunset().unwrap());
        assert!(civil.daylight_hours() > official.daylight_hours());
    }

    #[test]
    fn test_daylight_hours() {
        assert_eq!(SolarEventResult::NeverRises.daylight_hours(), 0.0);
        assert_eq!(SolarEventResult::NeverSets.daylight_hours(), 24.0);

        let overnight = SolarEventResult::Events {
            sunrise: 16.5,
            sunset: 7.5,
        };
        assert_eq!(overnight.daylight_hours(), 15.0);
    }

    #[test]
    fn test_month_events_covers_every_day() {
        let events = month_events(2024, 2, &istanbul()).unwrap();
        assert_eq!(events.len(), 29);
        assert!(events.iter().all(|day| day.result.is_available()));
        assert_eq!(events[28].date, date(2024, 2, 29));

        assert!(month_events(2024, 13, &istanbul()).is_err());
    }

    #[test]
    fn test_clock_time_conversion() {
        let result = compute_sunrise_sunset(date(2025, 6, 21), &istanbul()).unwrap();
        assert_eq!(
            result.sunrise_time().map(|t| t.format("%H:%M").to_string()),
            Some("05:31".to_string())
        );
        assert_eq!(
            result.sunset_time().map(|t| t.format("%H:%M").to_string()),
            Some("20:39".to_string())
        );
        assert_eq!(SolarEventResult::NeverSets.sunrise_time(), None);
    }
}
