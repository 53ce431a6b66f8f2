//! Polar day/night tagging around and inside the polar circles.

use chrono::{TimeZone, Utc};
use solar_ephemeris::{Horizon, SolarEphemeris, SolarEvent, SunTimes};

fn timestamp(year: i32, month: u32, day: u32, hour: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .unwrap()
        .timestamp()
}

#[test]
fn arctic_midsummer_is_a_permanent_day() {
    // Northern Scandinavia, inside the Arctic Circle.
    let engine = SolarEphemeris::new(68.0, 18.0, 1.0).unwrap();
    let midsummer = timestamp(2024, 6, 21, 12);

    let times = engine.sun_times(midsummer).unwrap();
    assert!(times.is_permanent_day(), "expected permanent day: {times:?}");

    assert_eq!(engine.sunrise(midsummer).unwrap(), SolarEvent::PermanentDay);
    assert_eq!(engine.sunset(midsummer).unwrap(), SolarEvent::PermanentDay);

    // Solar noon is still a well-defined instant on that civil day.
    let noon = engine.solar_noon(midsummer).unwrap();
    assert_eq!(noon, *times.noon());
    let day_start = timestamp(2024, 6, 21, 0);
    assert!(
        (day_start..day_start + 86_400).contains(&noon),
        "noon {noon} outside the civil day"
    );
}

#[test]
fn deep_polar_winter_is_a_permanent_night() {
    // Longyearbyen, Svalbard.
    let engine = SolarEphemeris::new(78.22, 15.65, 1.0).unwrap();
    let midwinter = timestamp(2024, 12, 21, 12);

    let times = engine.sun_times(midwinter).unwrap();
    assert!(
        times.is_permanent_night(),
        "expected permanent night: {times:?}"
    );
    assert_eq!(
        engine.sunrise(midwinter).unwrap(),
        SolarEvent::PermanentNight
    );
    assert_eq!(
        engine.sunset(midwinter).unwrap(),
        SolarEvent::PermanentNight
    );

    // The tag holds at the official horizon as well; the midwinter sun sits
    // more than 11° below it at this latitude.
    assert!(engine
        .sun_times_for_horizon(midwinter, Horizon::SunriseSunset)
        .unwrap()
        .is_permanent_night());

    // And the opposite solstice flips the tag.
    let midsummer = timestamp(2024, 6, 21, 12);
    assert!(engine.sun_times(midsummer).unwrap().is_permanent_day());
}

#[test]
fn the_equator_never_sees_a_polar_day() {
    let engine = SolarEphemeris::new(0.0, 0.0, 0.0).unwrap();
    for month in 1..=12 {
        let date = timestamp(2024, month, 15, 12);
        assert!(
            engine.sun_times(date).unwrap().is_regular_day(),
            "month {month} was not a regular day"
        );
    }
}

#[test]
fn midsummer_latitude_sweep_crosses_into_permanent_day() {
    let midsummer = timestamp(2024, 6, 21, 12);
    let mut regular = 0;
    let mut permanent = 0;

    for step in 0..=100 {
        let latitude = 60.0 + f64::from(step) * 0.25;
        let engine = SolarEphemeris::new(latitude, 0.0, 0.0).unwrap();
        match engine.sun_times(midsummer).unwrap() {
            SunTimes::RegularDay {
                sunrise,
                noon,
                sunset,
            } => {
                regular += 1;
                // Right at the boundary the crossings collapse towards noon,
                // so equality after rounding is allowed here.
                assert!(
                    sunrise <= noon && noon <= sunset,
                    "unordered events at latitude {latitude}"
                );
            }
            SunTimes::PermanentDay { .. } => permanent += 1,
            SunTimes::PermanentNight { .. } => {
                panic!("permanent night at latitude {latitude} in June")
            }
        }
    }

    assert!(regular > 0, "sweep never saw a regular day");
    assert!(permanent > 0, "sweep never crossed into permanent day");
}

#[test]
fn midwinter_latitude_sweep_crosses_into_permanent_night() {
    let midwinter = timestamp(2024, 12, 21, 12);
    let mut permanent = 0;

    for step in 0..=100 {
        let latitude = 60.0 + f64::from(step) * 0.25;
        let engine = SolarEphemeris::new(latitude, 0.0, 0.0).unwrap();
        match engine.sun_times(midwinter).unwrap() {
            SunTimes::RegularDay {
                sunrise,
                noon,
                sunset,
            } => {
                assert!(sunrise <= noon && noon <= sunset);
            }
            SunTimes::PermanentNight { .. } => permanent += 1,
            SunTimes::PermanentDay { .. } => {
                panic!("permanent day at latitude {latitude} in December")
            }
        }
    }

    assert!(permanent > 0, "sweep never crossed into permanent night");
}
