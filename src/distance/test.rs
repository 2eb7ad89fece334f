use crate::distance::{haversine, haversine_distance};

use approx::assert_relative_eq;
use geo::{Distance, Haversine, Point};

#[test]
fn nashville_to_los_angeles() {
    let km = haversine(36.12, -86.67, 33.94, -118.40);
    assert!((km - 2887.0).abs() <= 1.0, "Expected ~2887km, got {km}");
}

#[test]
fn identical_points_have_no_distance() {
    for (lat, lng) in [(0.0, 0.0), (35.0, 51.0), (-89.9, 179.9), (51.5074, -0.1278)] {
        assert_eq!(haversine(lat, lng, lat, lng), 0.0);
    }
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(51.0, 35.0);
    let b = Point::new(51.1, 35.1);

    assert_relative_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));
}

#[test]
fn agrees_with_geo_haversine() {
    let a = Point::new(-122.4194, 37.7749);
    let b = Point::new(-118.2437, 34.0522);

    // `geo` uses the mean radius of 6371.0088km, so allow for that drift.
    let expected = Haversine.distance(a, b) / 1_000.0;
    assert_relative_eq!(haversine_distance(&a, &b), expected, max_relative = 1e-5);
}
