//! Segment pricing.
//!
//! A [`Tariff`] prices each [`Segment`] of a delivery by its
//! [`MotionState`] and the [`Period`] of day in which it began.
//! The only tariff shipped is the fixed [`StandardTariff`].

use strum::{Display, EnumIter};

use crate::trip::Segment;

#[doc(hidden)]
pub mod standard;

#[doc(inline)]
pub use standard::StandardTariff;

/// Whether the courier was travelling or waiting across a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MotionState {
    Moving,
    Idle,
}

impl MotionState {
    /// Average speeds strictly above this (in km/h) are [`MotionState::Moving`].
    pub const THRESHOLD_KMH: f64 = 10.0;

    pub fn from_speed(speed: f64) -> Self {
        if speed > Self::THRESHOLD_KMH {
            MotionState::Moving
        } else {
            MotionState::Idle
        }
    }
}

impl From<&Segment<'_>> for MotionState {
    fn from(segment: &Segment<'_>) -> Self {
        MotionState::from_speed(segment.speed)
    }
}

/// The tariff period a segment starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Period {
    /// 05:00 until midnight.
    Day,
    /// Midnight until 05:00.
    Night,
}

impl Period {
    pub fn of(hour: u32) -> Self {
        if (5..24).contains(&hour) {
            Period::Day
        } else {
            Period::Night
        }
    }
}

/// A pricing scheme for delivery segments.
///
/// The total for a delivery is the [`FLAG_DROP`](Tariff::FLAG_DROP)
/// plus the [`rate`](Tariff::rate) of every segment, raised to at least
/// the [`FLOOR`](Tariff::FLOOR).
pub trait Tariff: Sync {
    /// The fixed amount charged before any segment is priced.
    const FLAG_DROP: f64;

    /// The minimum total charged for a delivery.
    const FLOOR: f64;

    /// The amount charged for a single segment.
    fn rate(&self, segment: &Segment) -> f64;

    /// Applies the minimum fare to a raw total.
    fn clamp(&self, total: f64) -> f64 {
        if total < Self::FLOOR {
            Self::FLOOR
        } else {
            total
        }
    }
}
