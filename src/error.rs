use std::fmt::{Display, Formatter};

use crate::config::ConfigError;
use crate::dispatch::DispatchError;
use crate::impl_err;
use crate::io::{ExportError, IngestError};

/// Any failure of a fare run, by the stage that raised it.
#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    Ingest(IngestError),
    Dispatch(DispatchError),
    Export(ExportError),
}

impl_err!(ConfigError, Config);
impl_err!(IngestError, Ingest);
impl_err!(DispatchError, Dispatch);
impl_err!(ExportError, Export);

impl Error {
    /// The process exit status for this error. Configuration
    /// problems are told apart from failed runs.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) => 2,
            Error::Ingest(_) | Error::Dispatch(_) | Error::Export(_) => 1,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Config(err) => write!(f, "Invalid configuration. {err}"),
            Error::Ingest(err) => write!(f, "Failed to ingest. {err}"),
            Error::Dispatch(err) => write!(f, "Failed to dispatch. {err}"),
            Error::Export(err) => write!(f, "Failed to export. {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(err) => Some(err),
            Error::Ingest(err) => Some(err),
            Error::Dispatch(err) => Some(err),
            Error::Export(err) => Some(err),
        }
    }
}
