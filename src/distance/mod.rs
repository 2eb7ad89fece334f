//! Great-circle distances between geotagged items.

/// Mean earth radius, in kilometers, used by every fare computation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[cfg(test)]
mod test;

/// An item which can be placed on the globe.
///
/// Positions follow the [`geo`] convention, `x` being
/// the longitude and `y` the latitude, both in degrees.
pub trait Located {
    fn position(&self) -> geo::Point;
}

impl Located for geo::Point {
    fn position(&self) -> geo::Point {
        *self
    }
}

/// Haversine distance between two items, in kilometers.
///
/// ```rust
/// use geo::Point;
/// use tripfare::distance::haversine_distance;
///
/// let nashville = Point::new(-86.67, 36.12);
/// let los_angeles = Point::new(-118.40, 33.94);
///
/// let km = haversine_distance(&nashville, &los_angeles);
/// assert!((km - 2887.0).abs() < 1.0);
/// ```
pub fn haversine_distance<T: Located>(lhs: &T, rhs: &T) -> f64 {
    let (l_lng, l_lat) = lhs.position().x_y();
    let (r_lng, r_lat) = rhs.position().x_y();

    haversine(l_lat, l_lng, r_lat, r_lng)
}

/// Haversine distance between two `(lat, lng)` pairs given in degrees, in kilometers.
pub fn haversine(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + (delta_lng / 2.0).sin().powi(2) * lat1.to_radians().cos() * lat2.to_radians().cos();

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
