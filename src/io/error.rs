use std::fmt::{Display, Formatter};
use std::io;

use crate::impl_err;

/// A failure to read the ping feed.
///
/// Malformed records are not errors, they are dropped
/// and counted in [`IngestStats`](crate::io::IngestStats).
#[derive(Debug)]
pub enum IngestError {
    IOError(io::Error),
    CsvError(csv::Error),
}

impl_err!(io::Error, IngestError, IOError);
impl_err!(csv::Error, IngestError, CsvError);

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::IOError(err) => write!(f, "could not read pings: {err}"),
            IngestError::CsvError(err) => write!(f, "could not decode pings: {err}"),
        }
    }
}

impl std::error::Error for IngestError {}

/// A failure to write the fare table.
#[derive(Debug)]
pub enum ExportError {
    IOError(io::Error),
    CsvError(csv::Error),
}

impl_err!(io::Error, ExportError, IOError);
impl_err!(csv::Error, ExportError, CsvError);

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::IOError(err) => write!(f, "could not write fares: {err}"),
            ExportError::CsvError(err) => write!(f, "could not encode fares: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}
