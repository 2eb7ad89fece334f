//! Runtime configuration, read from the process environment.
//!
//! An example `.env`:
//! ```bash
//! TRIPFARE_INPUT=sample_data.csv
//! TRIPFARE_OUTPUT=output.csv
//! TRIPFARE_CONCURRENCY=10
//! TRIPFARE_UTC_OFFSET=+00:00
//! ```

use std::env;
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};

use crate::dispatch::DEFAULT_CONCURRENCY;

#[doc(hidden)]
pub mod error;

#[doc(inline)]
pub use error::ConfigError;

pub const INPUT_VAR: &str = "TRIPFARE_INPUT";
pub const OUTPUT_VAR: &str = "TRIPFARE_OUTPUT";
pub const CONCURRENCY_VAR: &str = "TRIPFARE_CONCURRENCY";
pub const UTC_OFFSET_VAR: &str = "TRIPFARE_UTC_OFFSET";

const DEFAULT_INPUT: &str = "sample_data.csv";
const DEFAULT_OUTPUT: &str = "output.csv";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The `id,lat,lng,unix_seconds` feed to price.
    pub input: PathBuf,
    /// Where the `id,fare` rows are written.
    pub output: PathBuf,
    /// The most deliveries priced at once.
    pub concurrency: NonZeroUsize,
    /// The offset in which ping timestamps are read, deciding the hour of day.
    pub utc_offset: FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            concurrency: DEFAULT_CONCURRENCY,
            utc_offset: Utc.fix(),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    /// Load a `.env` beforehand (see [`dotenv::dotenv`]) to include it.
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back
    /// to the defaults for any variable it does not provide.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(input) = lookup(INPUT_VAR) {
            config.input = PathBuf::from(input);
        }

        if let Some(output) = lookup(OUTPUT_VAR) {
            config.output = PathBuf::from(output);
        }

        if let Some(concurrency) = lookup(CONCURRENCY_VAR) {
            config.concurrency = concurrency
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidConcurrency(concurrency))?;
        }

        if let Some(offset) = lookup(UTC_OFFSET_VAR) {
            config.utc_offset = offset
                .trim()
                .parse::<FixedOffset>()
                .map_err(|_| ConfigError::InvalidOffset(offset))?;
        }

        Ok(config)
    }

    /// Overrides the input and output paths with positional arguments, `[input] [output]`.
    pub fn with_args(mut self, args: impl IntoIterator<Item = OsString>) -> Self {
        let mut args = args.into_iter();

        if let Some(input) = args.next() {
            self.input = PathBuf::from(input);
        }

        if let Some(output) = args.next() {
            self.output = PathBuf::from(output);
        }

        self
    }
}
