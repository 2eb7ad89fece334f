use crate::tariff::{MotionState, Period, Tariff};
use crate::trip::Segment;

/// The fixed courier tariff.
///
/// | State  | Period          | Rate                 |
/// |--------|-----------------|----------------------|
/// | Moving | Day (05-24h)    | 0.74 per km          |
/// | Moving | Night (00-05h)  | 1.30 per km          |
/// | Idle   | Any             | 11.90 per hour       |
///
/// A flag drop of 1.30 is charged up front, and no delivery costs less than 3.47.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardTariff;

impl StandardTariff {
    pub const DAY_PER_KM: f64 = 0.74;
    pub const NIGHT_PER_KM: f64 = 1.30;
    pub const IDLE_PER_HOUR: f64 = 11.90;
}

impl Tariff for StandardTariff {
    const FLAG_DROP: f64 = 1.30;
    const FLOOR: f64 = 3.47;

    fn rate(&self, segment: &Segment) -> f64 {
        match MotionState::from(segment) {
            MotionState::Moving => match Period::of(segment.start.hour()) {
                Period::Day => Self::DAY_PER_KM * segment.distance,
                Period::Night => Self::NIGHT_PER_KM * segment.distance,
            },
            MotionState::Idle => Self::IDLE_PER_HOUR * segment.duration,
        }
    }
}
