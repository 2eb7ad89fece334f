use std::fmt::{Debug, Formatter};

use chrono::{DateTime, FixedOffset, Timelike};

use crate::distance::Located;

/// An instant as supplied by the ingester, carrying its own UTC offset.
/// The hour-of-day used for tariffs is read in that offset.
pub type Timestamp = DateTime<FixedOffset>;

/// A single timestamped GPS observation belonging to a delivery.
#[derive(Clone, PartialEq)]
pub struct Ping {
    pub delivery: String,
    pub position: geo::Point,
    pub timestamp: Timestamp,
}

impl Ping {
    /// Constructs a new `Ping` from a latitude and longitude given in degrees.
    pub fn new(delivery: impl Into<String>, lat: f64, lng: f64, timestamp: Timestamp) -> Self {
        Self {
            delivery: delivery.into(),
            position: geo::Point::new(lng, lat),
            timestamp,
        }
    }

    pub fn lat(&self) -> f64 {
        self.position.y()
    }

    pub fn lng(&self) -> f64 {
        self.position.x()
    }

    /// The hour of day (0-23) in the timestamp's own offset.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}

impl Located for Ping {
    fn position(&self) -> geo::Point {
        self.position
    }
}

impl Debug for Ping {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ping({} POINT({} {}) @ {})",
            self.delivery,
            self.lng(),
            self.lat(),
            self.timestamp.to_rfc3339()
        )
    }
}
