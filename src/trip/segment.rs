use itertools::Itertools;

use crate::distance::haversine_distance;
use crate::trip::Ping;

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// The interval between two temporally adjacent pings, priced as one unit.
///
/// A segment only exists for a strictly positive duration, so
/// [`speed`](#structfield.speed) is always finite for finite positions.
#[derive(Clone, Copy, Debug)]
pub struct Segment<'a> {
    pub start: &'a Ping,
    pub end: &'a Ping,

    /// Average speed across the segment, in km/h.
    pub speed: f64,
    /// Great-circle length of the segment, in kilometers.
    pub distance: f64,
    /// Elapsed time across the segment, in hours.
    pub duration: f64,
}

impl<'a> Segment<'a> {
    /// Forms the segment from `start` to `end`, or `None` when
    /// the timestamps do not strictly increase.
    pub fn between(start: &'a Ping, end: &'a Ping) -> Option<Self> {
        let duration = hours_between(start, end);
        if duration <= 0.0 {
            return None;
        }

        let distance = haversine_distance(start, end);
        Some(Self {
            start,
            end,
            speed: distance / duration,
            distance,
            duration,
        })
    }
}

/// Signed time from `start` to `end`, in hours.
pub fn hours_between(start: &Ping, end: &Ping) -> f64 {
    let delta = end.timestamp.signed_duration_since(start.timestamp);

    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / NANOS_PER_HOUR,
        // Beyond ~292 years, nanoseconds overflow.
        None => delta.num_milliseconds() as f64 / MILLIS_PER_HOUR,
    }
}

/// Splits a cleaned ping sequence into its consecutive segments.
///
/// Adjacent pairs whose timestamps do not strictly increase
/// produce no segment, and therefore contribute nothing.
pub fn segments<'a, 'b>(valid: &'b [&'a Ping]) -> impl Iterator<Item = Segment<'a>> + 'b
where
    'a: 'b,
{
    valid
        .iter()
        .copied()
        .tuple_windows()
        .filter_map(|(start, end)| Segment::between(start, end))
}
