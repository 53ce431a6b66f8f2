//! # Solar Ephemeris Engine
//!
//! Sunrise, solar noon, sunset and instantaneous irradiance for
//! daylight-driven appliances such as lamp timers.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The engine binds a fixed `(latitude, longitude, timezone offset)` triple
//! and maps instants (plain epoch seconds) to horizon-crossing times or to
//! the cosine of the solar zenith angle. It is built for schedule
//! evaluators: polar days and nights come back as tagged values
//! ([`SunTimes::PermanentDay`] / [`SunTimes::PermanentNight`]) rather than
//! NaN timestamps, and dates outside the supported 1900-2099 window fail
//! with an explicit [`Error::DateOutOfRange`].
//!
//! The underlying series are the NOAA solar calculator approximations
//! (after Meeus, "Astronomical Algorithms"), good to well under a minute of
//! sunrise/sunset error at temperate latitudes. No atmospheric model beyond
//! a fixed horizon depression is applied.
//!
//! ## Features
//!
//! - `std` (default): native math functions
//! - `chrono` (default, implies `std`): "now"-defaulting convenience
//!   operations backed by the system clock
//! - `libm`: pure Rust math for `no_std` firmware targets
//!
//! Enable either `std` or `libm`:
//!
//! ```toml
//! # Default: std + chrono (most convenient)
//! solar-ephemeris = "0.1"
//!
//! # no_std firmware build
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sunrise and sunset for a civil day
//! ```rust
//! use solar_ephemeris::{SolarEphemeris, SunTimes};
//!
//! // Vienna, UTC+1. The offset is fixed per engine; rebuild on DST changes.
//! let engine = SolarEphemeris::new(48.21, 16.37, 1.0).unwrap();
//!
//! // Any instant on the civil day of interest: 2024-06-21 10:00:00 UTC.
//! match engine.sun_times(1_718_964_000).unwrap() {
//!     SunTimes::RegularDay { sunrise, noon, sunset } => {
//!         assert!(sunrise < noon && noon < sunset);
//!     }
//!     SunTimes::PermanentDay { .. } => println!("lamp can stay off"),
//!     SunTimes::PermanentNight { .. } => println!("lamp can stay on"),
//! }
//! ```
//!
//! ### Instantaneous irradiance
//! ```rust
//! use solar_ephemeris::SolarEphemeris;
//!
//! let engine = SolarEphemeris::new(48.21, 16.37, 1.0).unwrap();
//! let irradiance = engine.irradiance(1_718_964_000).unwrap();
//! assert!((-1.0..=1.0).contains(&irradiance));
//! ```
//!
//! ## Conventions
//!
//! - Latitude in decimal degrees, north positive; longitude in decimal
//!   degrees, east positive.
//! - Timezone offset in hours, east positive (+5.5 for IST). Purely
//!   additive; no daylight-saving model.
//! - Input instants are UTC epoch seconds. Returned event times read as
//!   local wall-clock time when decomposed as UTC; see
//!   [`SolarEphemeris`] for the full convention.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::ephemeris::SolarEphemeris;
pub use crate::error::{Error, Result};
pub use crate::time::UnixSeconds;
pub use crate::types::{Horizon, SolarEvent, SunTimes};

// Engine modules
pub mod ephemeris;
pub mod noaa;

// Core modules
pub mod error;
pub mod time;
pub mod types;

// Internal modules
mod math;
