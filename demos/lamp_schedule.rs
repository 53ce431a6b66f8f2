//! Lamp on/off schedule around dusk and dawn for a few locations.
//!
//! Run with `cargo run --example lamp_schedule`.

use chrono::{DateTime, TimeZone, Utc};
use solar_ephemeris::{SolarEphemeris, SunTimes};

struct Site {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    tz_offset: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sites = [
        Site {
            name: "Vienna, Austria",
            latitude: 48.21,
            longitude: 16.37,
            tz_offset: 1.0,
        },
        Site {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            tz_offset: 1.0,
        },
        Site {
            name: "Chennai, India",
            latitude: 13.08,
            longitude: 80.27,
            tz_offset: 5.5,
        },
        Site {
            name: "Denver, Colorado",
            latitude: 39.74,
            longitude: -104.99,
            tz_offset: -7.0,
        },
        Site {
            name: "Auckland, New Zealand",
            latitude: -36.84,
            longitude: 174.74,
            tz_offset: 13.0,
        },
    ];

    // Winter solstice shows the extremes.
    let date = Utc
        .with_ymd_and_hms(2024, 12, 21, 12, 0, 0)
        .unwrap()
        .timestamp();

    for site in &sites {
        let engine = SolarEphemeris::new(site.latitude, site.longitude, site.tz_offset)?;

        println!("=== {} (UTC{:+.1}) ===", site.name, site.tz_offset);
        match engine.sun_times(date)? {
            SunTimes::RegularDay {
                sunrise,
                noon,
                sunset,
            } => {
                println!("  dawn       {}", clock(sunrise));
                println!("  solar noon {}", clock(noon));
                println!("  dusk       {}", clock(sunset));
                println!("  lamp: on at dusk, off at dawn");
            }
            SunTimes::PermanentDay { .. } => {
                println!("  sun never sets today: lamp stays off");
            }
            SunTimes::PermanentNight { .. } => {
                println!("  sun never rises today: lamp stays on");
            }
        }
        println!();
    }

    Ok(())
}

/// Returned instants read as local wall-clock time when decomposed as UTC.
fn clock(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string())
}
