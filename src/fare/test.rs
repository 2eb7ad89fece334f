use crate::distance::haversine;
use crate::fare::{Fare, FareCalculator};
use crate::tariff::{StandardTariff, Tariff};
use crate::trip::{Ping, Timestamp};

use approx::assert_relative_eq;
use chrono::{DateTime, FixedOffset};

const ORIGIN: i64 = 1_696_156_800; // 2023-10-01T10:40:00Z

fn at(offset_secs: i64, utc_offset: &FixedOffset) -> Timestamp {
    DateTime::from_timestamp(ORIGIN + offset_secs, 0)
        .expect("timestamp in range")
        .with_timezone(utc_offset)
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).expect("valid offset")
}

fn run(coords: &[(f64, f64)], spacing_secs: i64, utc_offset: &FixedOffset) -> Vec<Ping> {
    coords
        .iter()
        .enumerate()
        .map(|(i, (lat, lng))| Ping::new("1", *lat, *lng, at(i as i64 * spacing_secs, utc_offset)))
        .collect()
}

fn calculator() -> FareCalculator {
    FareCalculator::default()
}

#[test_log::test]
fn degenerate_runs_pay_the_floor() {
    assert_eq!(calculator().fare("1", &[]).total(), StandardTariff::FLOOR);

    let single = run(&[(35.0, 51.0)], 600, &utc());
    assert_eq!(calculator().fare("1", &single).total(), StandardTariff::FLOOR);
}

#[test_log::test]
fn moving_by_day() {
    let coords = [(35.0, 51.0), (35.1, 51.1), (35.2, 51.2)];
    let fare = calculator().fare("1", &run(&coords, 600, &utc()));

    let expected = StandardTariff::FLAG_DROP
        + StandardTariff::DAY_PER_KM
            * (haversine(35.0, 51.0, 35.1, 51.1) + haversine(35.1, 51.1, 35.2, 51.2));

    assert_relative_eq!(fare.total(), expected, max_relative = 1e-12);
    assert_eq!(fare.to_string(), "22.56");
}

#[test_log::test]
fn moving_by_night() {
    // 10:40 UTC is 02:40 in UTC-08:00.
    let pacific = FixedOffset::west_opt(8 * 3600).expect("valid offset");
    let coords = [(35.0, 51.0), (35.1, 51.1), (35.2, 51.2)];
    let fare = calculator().fare("1", &run(&coords, 600, &pacific));

    let expected = StandardTariff::FLAG_DROP
        + StandardTariff::NIGHT_PER_KM
            * (haversine(35.0, 51.0, 35.1, 51.1) + haversine(35.1, 51.1, 35.2, 51.2));

    assert_relative_eq!(fare.total(), expected, max_relative = 1e-12);
}

#[test_log::test]
fn short_idle_run_is_raised_to_the_floor() {
    let coords = [(35.0, 51.0), (35.0, 51.0001)];
    let fare = calculator().fare("1", &run(&coords, 600, &utc()));

    assert_eq!(fare.total(), 3.47);
}

#[test_log::test]
fn long_idle_run_is_charged_by_time() {
    let coords = [(35.0, 51.0), (35.0, 51.0001), (35.0, 51.0002)];
    let fare = calculator().fare("1", &run(&coords, 1800, &utc()));

    assert_relative_eq!(fare.total(), 1.30 + 11.90, max_relative = 1e-12);
}

#[test_log::test]
fn implausible_ping_is_not_priced() {
    // The jump to (40, 60) is far beyond 100km/h, so the ping before it is
    // dropped. The joined pair is not re-checked and is priced as moving.
    let coords = [(35.0, 51.0), (35.0, 51.0001), (40.0, 60.0)];
    let pings = run(&coords, 3600, &utc());
    let fare = calculator().fare("1", &pings);

    let speed = haversine(35.0, 51.0, 40.0, 60.0) / 2.0;
    assert!(speed > 100.0, "Expected an implausible but priced final hop, got {speed}km/h");

    let expected = StandardTariff::FLAG_DROP
        + StandardTariff::DAY_PER_KM * haversine(35.0, 51.0, 40.0, 60.0);
    assert_relative_eq!(fare.total(), expected, max_relative = 1e-12);
}

#[test]
fn fare_renders_cents() {
    assert_eq!(Fare::new(3.47).to_string(), "3.47");
    assert_eq!(Fare::new(22.562912).to_string(), "22.56");
    assert_eq!(Fare::new(11.881375).to_string(), "11.88");
    assert_eq!(Fare::new(4.005).total(), 4.005);
    assert_eq!(f64::from(Fare::new(1.5)), 1.5);
}
