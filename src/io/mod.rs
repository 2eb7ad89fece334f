//! CSV collaborators of the fare engine.
//!
//! The [`PingReader`] turns `id,lat,lng,unix_seconds` records into [`Ping`](crate::trip::Ping)s,
//! silently dropping (and counting) malformed records. Only genuine I/O or framing
//! failures are reported as [`IngestError`]s. [`write_fares`] renders a
//! [`FareTable`](crate::dispatch::FareTable) as `id,fare` rows.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod reader;
#[doc(hidden)]
pub mod writer;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use error::{ExportError, IngestError};
#[doc(inline)]
pub use reader::{IngestStats, PingReader};
#[doc(inline)]
pub use writer::{write_fares, write_fares_to_path};
