//! Per-delivery trajectory handling.
//!
//! A delivery's pings are first cleaned by the [anomaly filter](anomaly::retain_plausible),
//! then split into [`Segment`]s between temporally adjacent pings.

#[doc(hidden)]
pub mod anomaly;
#[doc(hidden)]
pub mod ping;
#[doc(hidden)]
pub mod segment;

#[doc(inline)]
pub use anomaly::{retain_plausible, MAX_PLAUSIBLE_SPEED_KMH};
#[doc(inline)]
pub use ping::{Ping, Timestamp};
#[doc(inline)]
pub use segment::{hours_between, segments, Segment};
