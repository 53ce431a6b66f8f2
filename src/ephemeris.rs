//! The solar ephemeris engine: location-bound sunrise, noon, sunset and
//! irradiance queries.

use crate::error::check_coordinates;
use crate::math::{acos, cos, degrees_to_radians, radians_to_degrees};
use crate::noaa::{self, SunGeometry};
use crate::time::{self, CivilDateTime, UnixSeconds};
use crate::types::{Horizon, SolarEvent, SunTimes};
use crate::Result;

/// Seconds per hour conversion factor.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Minutes per day conversion factor.
const MINUTES_PER_DAY: f64 = 1440.0;

/// The horizon a daylight-driven appliance switches at.
const DEFAULT_HORIZON: Horizon = Horizon::CivilTwilight;

/// Solar ephemeris for one fixed location and timezone offset.
///
/// Holds an immutable `(latitude, longitude, timezone offset)` triple and
/// exposes pure functions from an instant to sunrise/noon/sunset times or an
/// irradiance value. There is no mutable state and no cache: construct one
/// engine at startup, keep it for the process lifetime, and rebuild it if
/// the stored location or offset ever changes. Every operation is safe to
/// call from any number of threads; results for identical inputs are
/// bit-identical.
///
/// Callers that evaluate a schedule periodically should compute a day's
/// [`SunTimes`] once and reuse it rather than recomputing on every tick.
///
/// # Timestamp convention
///
/// Inputs are plain UTC epoch seconds. Returned event times are anchored to
/// the civil day of the offset-corrected input and converted on the
/// UTC-equivalent baseline: decompose a returned timestamp as UTC and it
/// reads as local wall-clock time for the configured offset. Shifting the
/// offset by Δ hours therefore shifts every returned time by exactly Δ
/// hours, while irradiance at a fixed instant is unaffected.
///
/// # Example
/// ```
/// use solar_ephemeris::SolarEphemeris;
///
/// // Vienna, UTC+1 (the offset is fixed; model DST by rebuilding)
/// let engine = SolarEphemeris::new(48.21, 16.37, 1.0).unwrap();
///
/// // 2024-06-21 10:00:00 UTC
/// let times = engine.sun_times(1_718_964_000).unwrap();
/// assert!(times.is_regular_day());
/// assert!(times.sunrise().unwrap() < times.noon());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEphemeris {
    /// Latitude in decimal degrees, north positive
    latitude: f64,
    /// Longitude in decimal degrees, east positive
    longitude: f64,
    /// Timezone offset in hours, east positive (+5.5 for IST)
    tz_offset: f64,
}

impl SolarEphemeris {
    /// Creates an engine for the given location and timezone offset.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for coordinates
    /// outside ±90° / ±180°.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::SolarEphemeris;
    /// assert!(SolarEphemeris::new(48.21, 16.37, 1.0).is_ok());
    /// assert!(SolarEphemeris::new(95.0, 16.37, 1.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64, tz_offset: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
            tz_offset,
        })
    }

    /// Gets the latitude in decimal degrees (north positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in decimal degrees (east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the timezone offset in hours (east positive).
    #[must_use]
    pub const fn timezone_offset(&self) -> f64 {
        self.tz_offset
    }

    /// Cosine of the solar zenith angle at `when`.
    ///
    /// Ranges over [-1, 1]; negative values mean the sun is below the
    /// horizon. This is a normalized proxy for direct solar power per unit
    /// area, not a physical irradiance in W/m²: no atmospheric attenuation
    /// is modeled.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the corrected instant falls outside
    /// civil years 1900 to 2099.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::SolarEphemeris;
    /// let engine = SolarEphemeris::new(48.21, 16.37, 1.0).unwrap();
    /// // 2024-06-21 10:00:00 UTC, late morning local time
    /// let irradiance = engine.irradiance(1_718_964_000).unwrap();
    /// assert!(irradiance > 0.0 && irradiance <= 1.0);
    /// ```
    pub fn irradiance(&self, when: UnixSeconds) -> Result<f64> {
        let (civil, geometry) = self.corrected_civil(when)?;
        let true_solar_time = noaa::true_solar_time(
            civil.day_fraction(),
            geometry.equation_of_time,
            self.longitude,
            self.tz_offset,
        );
        let zenith = noaa::solar_zenith(
            self.latitude,
            geometry.declination,
            noaa::hour_angle(true_solar_time),
        );
        Ok(cos(degrees_to_radians(zenith)))
    }

    /// Sunrise, solar noon, and sunset for the civil day of `date`, at the
    /// default civil-twilight horizon.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the corrected instant falls outside
    /// civil years 1900 to 2099.
    pub fn sun_times(&self, date: UnixSeconds) -> Result<SunTimes> {
        self.sun_times_for_horizon(date, DEFAULT_HORIZON)
    }

    /// Sunrise, solar noon, and sunset for the civil day of `date`, at a
    /// caller-chosen horizon.
    ///
    /// One shared pipeline pass produces all three values; prefer this over
    /// separate [`sunrise`](Self::sunrise) / [`sunset`](Self::sunset) calls
    /// when both are needed.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the corrected instant falls outside
    /// civil years 1900 to 2099.
    pub fn sun_times_for_horizon(&self, date: UnixSeconds, horizon: Horizon) -> Result<SunTimes> {
        let (civil, geometry) = self.corrected_civil(date)?;
        let midnight = civil.midnight_unix();
        let noon_fraction =
            noaa::solar_noon_fraction(geometry.equation_of_time, self.longitude, self.tz_offset);
        let noon = time::unix_from_day_fraction(midnight, noon_fraction);

        let cos_hour_angle = noaa::sunrise_hour_angle_cos(
            self.latitude,
            geometry.declination,
            horizon.elevation_angle(),
        );
        if cos_hour_angle < -1.0 {
            return Ok(SunTimes::PermanentDay { noon });
        }
        if cos_hour_angle > 1.0 {
            return Ok(SunTimes::PermanentNight { noon });
        }

        // 4 minutes of day per degree of hour angle
        let half_day_fraction = radians_to_degrees(acos(cos_hour_angle)) * 4.0 / MINUTES_PER_DAY;
        Ok(SunTimes::RegularDay {
            sunrise: time::unix_from_day_fraction(midnight, noon_fraction - half_day_fraction),
            noon,
            sunset: time::unix_from_day_fraction(midnight, noon_fraction + half_day_fraction),
        })
    }

    /// The upward horizon crossing on the civil day of `date`.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the corrected instant falls outside
    /// civil years 1900 to 2099.
    pub fn sunrise(&self, date: UnixSeconds) -> Result<SolarEvent> {
        Ok(match self.sun_times(date)? {
            SunTimes::RegularDay { sunrise, .. } => SolarEvent::At(sunrise),
            SunTimes::PermanentDay { .. } => SolarEvent::PermanentDay,
            SunTimes::PermanentNight { .. } => SolarEvent::PermanentNight,
        })
    }

    /// The instant of maximum solar elevation on the civil day of `date`.
    ///
    /// Defined for every day, polar conditions included.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the corrected instant falls outside
    /// civil years 1900 to 2099.
    pub fn solar_noon(&self, date: UnixSeconds) -> Result<UnixSeconds> {
        let (civil, geometry) = self.corrected_civil(date)?;
        let noon_fraction =
            noaa::solar_noon_fraction(geometry.equation_of_time, self.longitude, self.tz_offset);
        Ok(time::unix_from_day_fraction(
            civil.midnight_unix(),
            noon_fraction,
        ))
    }

    /// The downward horizon crossing on the civil day of `date`.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the corrected instant falls outside
    /// civil years 1900 to 2099.
    pub fn sunset(&self, date: UnixSeconds) -> Result<SolarEvent> {
        Ok(match self.sun_times(date)? {
            SunTimes::RegularDay { sunset, .. } => SolarEvent::At(sunset),
            SunTimes::PermanentDay { .. } => SolarEvent::PermanentDay,
            SunTimes::PermanentNight { .. } => SolarEvent::PermanentNight,
        })
    }

    /// [`irradiance`](Self::irradiance) at the current system time.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the corrected instant falls outside
    /// civil years 1900 to 2099.
    #[cfg(feature = "chrono")]
    pub fn irradiance_now(&self) -> Result<f64> {
        self.irradiance(chrono::Utc::now().timestamp())
    }

    /// [`sun_times`](Self::sun_times) for the current civil day.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the corrected instant falls outside
    /// civil years 1900 to 2099.
    #[cfg(feature = "chrono")]
    pub fn sun_times_today(&self) -> Result<SunTimes> {
        self.sun_times(chrono::Utc::now().timestamp())
    }

    /// [`sunrise`](Self::sunrise) for the current civil day.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the corrected instant falls outside
    /// civil years 1900 to 2099.
    #[cfg(feature = "chrono")]
    pub fn sunrise_today(&self) -> Result<SolarEvent> {
        self.sunrise(chrono::Utc::now().timestamp())
    }

    /// [`solar_noon`](Self::solar_noon) for the current civil day.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the corrected instant falls outside
    /// civil years 1900 to 2099.
    #[cfg(feature = "chrono")]
    pub fn solar_noon_today(&self) -> Result<UnixSeconds> {
        self.solar_noon(chrono::Utc::now().timestamp())
    }

    /// [`sunset`](Self::sunset) for the current civil day.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the corrected instant falls outside
    /// civil years 1900 to 2099.
    #[cfg(feature = "chrono")]
    pub fn sunset_today(&self) -> Result<SolarEvent> {
        self.sunset(chrono::Utc::now().timestamp())
    }

    /// Applies the timezone offset, decomposes the corrected instant, and
    /// runs the time-dependent pipeline stages.
    fn corrected_civil(&self, when: UnixSeconds) -> Result<(CivilDateTime, SunGeometry)> {
        let corrected = when + (self.tz_offset * SECONDS_PER_HOUR) as i64;
        let civil = CivilDateTime::from_unix(corrected);
        let serial = time::days_since_1900(civil.year, civil.month, civil.day)?;
        let julian_day = time::julian_day(serial, civil.day_fraction(), self.tz_offset);
        Ok((civil, SunGeometry::at(time::julian_century(julian_day))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    // 2024-06-21 10:00:00 UTC
    const MIDSUMMER_MORNING: UnixSeconds = 1_718_964_000;

    #[test]
    fn test_construction_validates_coordinates() {
        assert!(SolarEphemeris::new(48.21, 16.37, 1.0).is_ok());
        assert_eq!(
            SolarEphemeris::new(95.0, 0.0, 0.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert_eq!(
            SolarEphemeris::new(0.0, 200.0, 0.0),
            Err(Error::invalid_longitude(200.0))
        );
        assert!(SolarEphemeris::new(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_accessors() {
        let engine = SolarEphemeris::new(13.08, 80.27, 5.5).unwrap();
        assert_eq!(engine.latitude(), 13.08);
        assert_eq!(engine.longitude(), 80.27);
        assert_eq!(engine.timezone_offset(), 5.5);
    }

    #[test]
    fn test_irradiance_sign_tracks_day_and_night() {
        let engine = SolarEphemeris::new(48.21, 16.37, 1.0).unwrap();

        // Late morning local time in June: sun well up.
        let day = engine.irradiance(MIDSUMMER_MORNING).unwrap();
        assert!(day > 0.0 && day <= 1.0, "day irradiance was {day}");

        // Local midnight: sun well down.
        let night = engine.irradiance(MIDSUMMER_MORNING + 13 * 3600).unwrap();
        assert!((-1.0..0.0).contains(&night), "night irradiance was {night}");
    }

    #[test]
    fn test_single_crossing_queries_match_sun_times() {
        let engine = SolarEphemeris::new(48.21, 16.37, 1.0).unwrap();
        let times = engine.sun_times(MIDSUMMER_MORNING).unwrap();

        assert_eq!(
            engine.sunrise(MIDSUMMER_MORNING).unwrap(),
            SolarEvent::At(*times.sunrise().unwrap())
        );
        assert_eq!(
            engine.sunset(MIDSUMMER_MORNING).unwrap(),
            SolarEvent::At(*times.sunset().unwrap())
        );
        assert_eq!(
            engine.solar_noon(MIDSUMMER_MORNING).unwrap(),
            *times.noon()
        );
    }

    #[test]
    fn test_horizon_widens_the_day() {
        let engine = SolarEphemeris::new(48.21, 16.37, 1.0).unwrap();
        let civil = engine
            .sun_times_for_horizon(MIDSUMMER_MORNING, Horizon::CivilTwilight)
            .unwrap();
        let official = engine
            .sun_times_for_horizon(MIDSUMMER_MORNING, Horizon::SunriseSunset)
            .unwrap();

        // Civil twilight starts earlier and ends later than the official
        // sunrise/sunset.
        assert!(civil.sunrise().unwrap() < official.sunrise().unwrap());
        assert!(civil.sunset().unwrap() > official.sunset().unwrap());
        // Noon does not depend on the horizon at all.
        assert_eq!(civil.noon(), official.noon());
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SolarEphemeris>();
    }
}
