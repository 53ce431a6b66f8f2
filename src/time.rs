//! Calendar and Julian-day conversions for the ephemeris pipeline.
//!
//! All conversions are UTC-style: a flat count of seconds maps to a civil
//! date through the proleptic Gregorian calendar with no daylight-saving or
//! leap-second model. Timezone handling stays purely additive in the caller.

#![allow(clippy::unreadable_literal)]

use crate::error::check_year;
use crate::math::{floor, round};
use crate::Result;

/// Seconds since the Unix epoch (1970-01-01 00:00:00 UTC, no leap seconds).
///
/// The engine's only notion of an instant. Values are interpreted on a
/// UTC-equivalent baseline; see [`crate::SolarEphemeris`] for the convention
/// used by returned timestamps.
pub type UnixSeconds = i64;

/// Seconds per day (86,400)
const SECONDS_PER_DAY: i64 = 86_400;

/// Julian Day Number for the J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian-day offset paired with the 1900-based serial day count
const SERIAL_EPOCH_JD: f64 = 2_415_018.5;

/// Civil decomposition of an instant (UTC-style, no DST).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    /// Civil year (e.g. 2026).
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
    /// Hour (0-23).
    pub hour: u32,
    /// Minute (0-59).
    pub minute: u32,
    /// Second (0-59).
    pub second: u32,
}

impl CivilDateTime {
    /// Decomposes an epoch instant into its civil date and time of day.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::time::CivilDateTime;
    /// let civil = CivilDateTime::from_unix(0);
    /// assert_eq!((civil.year, civil.month, civil.day), (1970, 1, 1));
    /// assert_eq!((civil.hour, civil.minute, civil.second), (0, 0, 0));
    /// ```
    #[must_use]
    pub fn from_unix(timestamp: UnixSeconds) -> Self {
        let days = timestamp.div_euclid(SECONDS_PER_DAY);
        let secs_of_day = timestamp.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: (secs_of_day / 3600) as u32,
            minute: (secs_of_day % 3600 / 60) as u32,
            second: (secs_of_day % 60) as u32,
        }
    }

    /// Fraction of the civil day past midnight (noon is 0.5).
    #[must_use]
    pub fn day_fraction(&self) -> f64 {
        (f64::from(self.hour) + f64::from(self.minute) / 60.0 + f64::from(self.second) / 3600.0)
            / 24.0
    }

    /// Epoch instant of this civil day's midnight on the UTC-equivalent baseline.
    #[must_use]
    pub fn midnight_unix(&self) -> UnixSeconds {
        days_from_civil(self.year, self.month, self.day) * SECONDS_PER_DAY
    }
}

/// Serial day count with day 0 at the start of the supported window.
///
/// January and February are treated as months 13 and 14 of the previous year
/// before the truncated month/year terms are applied. The count pairs with
/// the `2415018.5` Julian-day offset used by [`julian_day`]; neither constant
/// is meaningful on its own.
///
/// # Errors
/// Returns `DateOutOfRange` for civil years outside 1900 to 2099. The window
/// is a hard limit, not an extrapolation boundary.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::days_since_1900;
/// assert_eq!(days_since_1900(2000, 1, 1), Ok(36525));
/// assert!(days_since_1900(2100, 1, 1).is_err());
/// ```
pub fn days_since_1900(year: i32, month: u32, day: u32) -> Result<i32> {
    check_year(year)?;

    let mut y = year - 1900;
    let mut m = month as i32;
    if m < 3 {
        m += 12;
        y -= 1;
    }
    let year_days = floor(365.25 * f64::from(y)) as i32;
    let month_days = floor(30.61 * f64::from(m + 1)) as i32;
    Ok(year_days + month_days + day as i32 - 63)
}

/// Julian day for a serial day count, day fraction, and timezone offset.
///
/// The day fraction is taken from the offset-corrected instant, so the
/// offset is subtracted back out here to land on the UT day scale.
#[must_use]
pub fn julian_day(days_since_1900: i32, day_fraction: f64, tz_offset: f64) -> f64 {
    f64::from(days_since_1900) + SERIAL_EPOCH_JD + day_fraction - tz_offset / 24.0
}

/// Julian centuries since the J2000.0 epoch.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::julian_century;
/// assert_eq!(julian_century(2_451_545.0), 0.0);
/// ```
#[must_use]
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_JDN) / DAYS_PER_CENTURY
}

/// Converts a fraction of a civil day back to an epoch instant.
///
/// `fraction` may fall outside [0, 1); the result then lands on a
/// neighbouring day, which happens for horizon crossings near local
/// midnight at extreme longitude/offset combinations. Rounds to the
/// nearest whole second.
#[must_use]
pub fn unix_from_day_fraction(midnight: UnixSeconds, fraction: f64) -> UnixSeconds {
    midnight + round(fraction * 86_400.0) as i64
}

/// Days since the Unix epoch for a proleptic Gregorian civil date.
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = i64::from(if month > 2 { month - 3 } else { month + 9 });
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date for a count of days since the Unix epoch.
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = (if month <= 2 { y + 1 } else { y }) as i32;
    (year, month, day)
}
