//! A complete fare run: read the feed, price every delivery, write the fares.

use log::info;
use measure_time::info_time;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::io::{write_fares_to_path, IngestStats, PingReader};
use crate::Error;


/// The outcome of [`calculate_fares`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub ingest: IngestStats,
    /// The number of fares written.
    pub fares: usize,
}

/// Prices the feed at `config.input` and writes the fares to `config.output`.
///
/// The output is only created once every delivery has been priced, so an
/// unreadable feed leaves any previous output untouched.
pub fn calculate_fares(config: &Config) -> Result<Report, Error> {
    let mut reader = PingReader::from_path(&config.input, config.utc_offset)?;
    let dispatcher = Dispatcher::new(config.concurrency);

    let fares = {
        info_time!("pricing {}", config.input.display());
        itertools::process_results(reader.by_ref(), |pings| dispatcher.dispatch(pings))??
    };

    let ingest = reader.stats();
    info!(
        "Read {} pings from {}, dropped {} malformed records",
        ingest.accepted,
        config.input.display(),
        ingest.dropped
    );

    let written = write_fares_to_path(&fares, &config.output)?;
    info!("Wrote {written} fares to {}", config.output.display());

    Ok(Report {
        ingest,
        fares: written,
    })
}
