//! NOAA solar calculator approximations.
//!
//! The low-order series behind the NOAA sunrise/sunset spreadsheet, after
//! Meeus, "Astronomical Algorithms". Accuracy is on the order of arcminutes
//! for the supported two-century window, which translates to sunrise and
//! sunset times good to well under a minute at temperate latitudes. All
//! stages are pure functions of the Julian century and the quantities
//! upstream of them, so each step can be tested in isolation; a full pass
//! is collected into [`SunGeometry`].
//!
//! Angles are in degrees and time quantities in minutes unless noted,
//! matching the published formulation.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{acos, asin, cos, degrees_to_radians, radians_to_degrees, sin, tan};

/// Geometric mean longitude of the sun, in degrees.
#[must_use]
pub fn mean_solar_longitude(t: f64) -> f64 {
    280.46646 + (t * (36000.76983 + t * 0.0003032)) % 360.0
}

/// Geometric mean anomaly of the sun, in degrees.
#[must_use]
pub fn mean_solar_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Equation of center of the sun, in degrees.
#[must_use]
pub fn equation_of_center(mean_anomaly: f64, t: f64) -> f64 {
    let m = degrees_to_radians(mean_anomaly);
    sin(m) * (1.914602 - t * (0.004817 + 0.000014 * t))
        + sin(2.0 * m) * (0.019993 - 0.000101 * t)
        + sin(3.0 * m) * 0.000289
}

/// True (geometric) longitude of the sun, in degrees.
#[must_use]
pub fn true_longitude(mean_longitude: f64, center: f64) -> f64 {
    mean_longitude + center
}

/// Eccentricity of Earth's orbit (dimensionless).
#[must_use]
pub fn orbit_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0001537 * t)
}

/// Mean obliquity of the ecliptic, in degrees.
#[must_use]
pub fn mean_obliquity(t: f64) -> f64 {
    23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation, in degrees.
///
/// The periodic term follows the longitude of the moon's ascending node,
/// `125.04 - 1934.136 t` degrees.
#[must_use]
pub fn obliquity_correction(mean_obliquity: f64, t: f64) -> f64 {
    mean_obliquity + 0.00256 * cos(degrees_to_radians(125.04 - 1934.136 * t))
}

/// Apparent longitude of the sun, corrected for nutation and aberration,
/// in degrees.
#[must_use]
pub fn apparent_longitude(true_longitude: f64, t: f64) -> f64 {
    true_longitude - 0.00569 - 0.00478 * sin(degrees_to_radians(125.04 - 1934.136 * t))
}

/// Solar declination, in degrees.
#[must_use]
pub fn declination(obliquity_correction: f64, apparent_longitude: f64) -> f64 {
    radians_to_degrees(asin(
        sin(degrees_to_radians(obliquity_correction)) * sin(degrees_to_radians(apparent_longitude)),
    ))
}

/// Equation of time: true solar time minus mean solar time, in minutes.
#[must_use]
pub fn equation_of_time(
    obliquity_correction: f64,
    mean_longitude: f64,
    eccentricity: f64,
    mean_anomaly: f64,
) -> f64 {
    let y = tan(degrees_to_radians(obliquity_correction / 2.0));
    let var_y = y * y;
    let l = degrees_to_radians(mean_longitude);
    let m = degrees_to_radians(mean_anomaly);

    4.0 * radians_to_degrees(
        var_y * sin(2.0 * l) - 2.0 * eccentricity * sin(m)
            + 4.0 * eccentricity * var_y * sin(m) * cos(2.0 * l)
            - 0.5 * var_y * var_y * sin(4.0 * l)
            - 1.25 * eccentricity * eccentricity * sin(2.0 * m),
    )
}

/// True solar time, in minutes, wrapped modulo 1440.
///
/// `day_fraction` is taken from the offset-corrected instant; the offset
/// term backs its label out so only the true sun position remains.
#[must_use]
pub fn true_solar_time(
    day_fraction: f64,
    equation_of_time: f64,
    longitude: f64,
    tz_offset: f64,
) -> f64 {
    (day_fraction * 1440.0 + equation_of_time + 4.0 * longitude - 60.0 * tz_offset) % 1440.0
}

/// Hour angle of the sun, in degrees (zero at local solar noon).
#[must_use]
pub fn hour_angle(true_solar_time: f64) -> f64 {
    let quarter = true_solar_time / 4.0;
    if quarter < 0.0 {
        quarter + 180.0
    } else {
        quarter - 180.0
    }
}

/// Cosine of the hour angle at which the sun crosses the given horizon.
///
/// Values outside [-1, 1] mean there is no crossing that day: below -1 the
/// sun never reaches down to the horizon (permanent day), above +1 it never
/// reaches up to it (permanent night).
#[must_use]
pub fn sunrise_hour_angle_cos(latitude: f64, declination: f64, horizon_elevation: f64) -> f64 {
    let zenith = degrees_to_radians(90.0 - horizon_elevation);
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    cos(zenith) / (cos(phi) * cos(delta)) - tan(phi) * tan(delta)
}

/// Solar zenith angle, in degrees.
#[must_use]
pub fn solar_zenith(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let arg = sin(phi) * sin(delta) + cos(phi) * cos(delta) * cos(degrees_to_radians(hour_angle));
    // rounding can push the argument a few ulps past 1 when the sun is
    // almost exactly overhead
    radians_to_degrees(acos(arg.clamp(-1.0, 1.0)))
}

/// Solar elevation angle, in degrees (complement of the zenith angle).
#[must_use]
pub const fn solar_elevation(zenith: f64) -> f64 {
    90.0 - zenith
}

/// Local solar noon as a fraction of the civil day.
#[must_use]
pub fn solar_noon_fraction(equation_of_time: f64, longitude: f64, tz_offset: f64) -> f64 {
    (720.0 - 4.0 * longitude - equation_of_time + tz_offset * 60.0) / 1440.0
}

/// Sun geometry for one instant: every time-dependent quantity of the
/// pipeline, computed in one pass.
///
/// Location-independent; the observer enters only through the later
/// hour-angle stages. Plain data, nothing is cached between calls.
///
/// # Example
/// ```
/// # use solar_ephemeris::noaa::SunGeometry;
/// let geometry = SunGeometry::at(0.25); // quarter century past J2000.0
/// assert!(geometry.declination.abs() < 23.7);
/// assert!(geometry.equation_of_time.abs() < 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunGeometry {
    /// Julian centuries since J2000.0
    pub julian_century: f64,
    /// Geometric mean longitude of the sun (degrees)
    pub mean_longitude: f64,
    /// Geometric mean anomaly of the sun (degrees)
    pub mean_anomaly: f64,
    /// Equation of center (degrees)
    pub center: f64,
    /// True longitude of the sun (degrees)
    pub true_longitude: f64,
    /// Eccentricity of Earth's orbit
    pub eccentricity: f64,
    /// Mean obliquity of the ecliptic (degrees)
    pub mean_obliquity: f64,
    /// Obliquity corrected for nutation (degrees)
    pub obliquity_correction: f64,
    /// Apparent longitude of the sun (degrees)
    pub apparent_longitude: f64,
    /// Solar declination (degrees)
    pub declination: f64,
    /// Equation of time (minutes)
    pub equation_of_time: f64,
}

impl SunGeometry {
    /// Runs the stage chain for the given Julian century.
    #[must_use]
    pub fn at(julian_century: f64) -> Self {
        let t = julian_century;
        let mean_longitude = mean_solar_longitude(t);
        let mean_anomaly = mean_solar_anomaly(t);
        let center = equation_of_center(mean_anomaly, t);
        let true_long = true_longitude(mean_longitude, center);
        let eccentricity = orbit_eccentricity(t);
        let mean_obliq = mean_obliquity(t);
        let obliq_corr = obliquity_correction(mean_obliq, t);
        let apparent = apparent_longitude(true_long, t);

        Self {
            julian_century: t,
            mean_longitude,
            mean_anomaly,
            center,
            true_longitude: true_long,
            eccentricity,
            mean_obliquity: mean_obliq,
            obliquity_correction: obliq_corr,
            apparent_longitude: apparent,
            declination: declination(obliq_corr, apparent),
            equation_of_time: equation_of_time(
                obliq_corr,
                mean_longitude,
                eccentricity,
                mean_anomaly,
            ),
        }
    }
}
