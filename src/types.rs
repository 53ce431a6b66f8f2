//! Core data types for the solar ephemeris engine.

use crate::time::UnixSeconds;
use crate::{Error, Result};

/// Predefined elevation angles for sunrise/sunset calculations.
///
/// Corresponds to different twilight definitions for consistent sunrise,
/// sunset, and twilight calculations. A daylight-driven appliance usually
/// switches at [`Horizon::CivilTwilight`], which is this crate's default;
/// almanac-style sunrise tables use [`Horizon::SunriseSunset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Standard sunrise/sunset (sun's upper limb touches horizon, accounting for refraction)
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.83337, // Accounts for refraction and sun's radius
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Gets the zenith angle in degrees for this horizon definition.
    ///
    /// The complement of the elevation angle: zenith = 90° - elevation.
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation_angle()
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&elevation_degrees) {
            return Err(Error::invalid_elevation_angle(elevation_degrees));
        }
        Ok(Self::Custom(elevation_degrees))
    }
}

/// Result of a whole-day sunrise/noon/sunset query.
///
/// Near and inside the polar circles the sun can stay above or below the
/// chosen horizon for the entire civil day. Those days are expected,
/// recoverable outcomes: a schedule evaluator treats them as "always day"
/// or "always night", not as failures. Solar noon is defined in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunTimes<T = UnixSeconds> {
    /// Regular day with distinct sunrise, solar noon, and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar noon (maximum solar elevation)
        noon: T,
        /// Time of sunset
        sunset: T,
    },
    /// The sun stays above the horizon for the whole civil day
    PermanentDay {
        /// Time of solar noon (closest approach to zenith)
        noon: T,
    },
    /// The sun stays below the horizon for the whole civil day
    PermanentNight {
        /// Time of solar noon (highest point, still below the horizon)
        noon: T,
    },
}

impl<T> SunTimes<T> {
    /// Gets the solar noon time, defined for every variant.
    pub const fn noon(&self) -> &T {
        match self {
            Self::RegularDay { noon, .. }
            | Self::PermanentDay { noon }
            | Self::PermanentNight { noon } => noon,
        }
    }

    /// Gets the sunrise time if the day has one.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets the sunset time if the day has one.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Checks if this is a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if the sun never sets on this day.
    pub const fn is_permanent_day(&self) -> bool {
        matches!(self, Self::PermanentDay { .. })
    }

    /// Checks if the sun never rises on this day.
    pub const fn is_permanent_night(&self) -> bool {
        matches!(self, Self::PermanentNight { .. })
    }

    /// Converts the carried timestamps with `f`, keeping the day tag.
    ///
    /// Useful for turning raw timestamps into richer datetime types:
    ///
    /// ```
    /// # use solar_ephemeris::SunTimes;
    /// let times = SunTimes::RegularDay { sunrise: 21_600_i64, noon: 43_200, sunset: 64_800 };
    /// let hours = times.map(|t| t / 3600);
    /// assert_eq!(hours.sunrise(), Some(&6));
    /// ```
    pub fn map<U>(self, f: impl Fn(T) -> U) -> SunTimes<U> {
        match self {
            Self::RegularDay {
                sunrise,
                noon,
                sunset,
            } => SunTimes::RegularDay {
                sunrise: f(sunrise),
                noon: f(noon),
                sunset: f(sunset),
            },
            Self::PermanentDay { noon } => SunTimes::PermanentDay { noon: f(noon) },
            Self::PermanentNight { noon } => SunTimes::PermanentNight { noon: f(noon) },
        }
    }
}

/// Result of a single horizon-crossing query (sunrise or sunset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEvent<T = UnixSeconds> {
    /// The sun crosses the horizon at the given time
    At(T),
    /// No crossing: the sun stays above the horizon all day
    PermanentDay,
    /// No crossing: the sun stays below the horizon all day
    PermanentNight,
}

impl<T> SolarEvent<T> {
    /// Gets the crossing time if one exists.
    pub const fn time(&self) -> Option<&T> {
        if let Self::At(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Checks if the sun never sets on this day.
    pub const fn is_permanent_day(&self) -> bool {
        matches!(self, Self::PermanentDay)
    }

    /// Checks if the sun never rises on this day.
    pub const fn is_permanent_night(&self) -> bool {
        matches!(self, Self::PermanentNight)
    }

    /// Converts the carried timestamp with `f`, keeping the tag.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> SolarEvent<U> {
        match self {
            Self::At(time) => SolarEvent::At(f(time)),
            Self::PermanentDay => SolarEvent::PermanentDay,
            Self::PermanentNight => SolarEvent::PermanentNight,
        }
    }
}
