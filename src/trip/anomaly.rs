use itertools::Itertools;
use log::trace;

use crate::trip::{Ping, Segment};

/// Transitions faster than this (in km/h) are physically implausible for a courier.
pub const MAX_PLAUSIBLE_SPEED_KMH: f64 = 100.0;

/// Removes pings which begin an implausible transition.
///
/// Every adjacent pair is inspected in order. The left ping of a pair is
/// kept only when the pair has a strictly positive duration and an average
/// speed of at most [`MAX_PLAUSIBLE_SPEED_KMH`]. The final ping is always
/// kept, even when the transition leading into it was implausible.
///
/// ```rust
/// use chrono::{DateTime, FixedOffset};
/// use tripfare::trip::{retain_plausible, Ping};
///
/// let at = |secs| DateTime::from_timestamp(secs, 0).unwrap().fixed_offset();
/// let pings = vec![
///     Ping::new("1", 35.0, 51.0, at(0)),
///     // ~145km in ten minutes
///     Ping::new("1", 36.0, 52.0, at(600)),
/// ];
///
/// let valid = retain_plausible(&pings);
/// assert_eq!(valid, vec![&pings[1]]);
/// ```
pub fn retain_plausible(pings: &[Ping]) -> Vec<&Ping> {
    let mut valid = pings
        .iter()
        .tuple_windows()
        .filter(|(from, to)| is_plausible(from, to))
        .map(|(from, _)| from)
        .collect::<Vec<_>>();

    if let Some(last) = pings.last() {
        valid.push(last);
    }

    valid
}

/// Only speeds strictly above [`MAX_PLAUSIBLE_SPEED_KMH`] are implausible.
pub(crate) fn exceeds_plausible_speed(speed: f64) -> bool {
    speed > MAX_PLAUSIBLE_SPEED_KMH
}

fn is_plausible(from: &Ping, to: &Ping) -> bool {
    match Segment::between(from, to) {
        None => {
            trace!("Discarding {from:?}, timestamps do not increase towards {to:?}");
            false
        }
        Some(segment) if exceeds_plausible_speed(segment.speed) => {
            trace!("Discarding {from:?}, implausible speed of {:.1}km/h", segment.speed);
            false
        }
        Some(_) => true,
    }
}
