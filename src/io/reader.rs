use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use csv::{ErrorKind, ReaderBuilder, StringRecord, StringRecordsIntoIter};
use log::trace;

use crate::io::IngestError;
use crate::trip::Ping;

const FIELDS: usize = 4;

/// Counts of the records seen by a [`PingReader`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub accepted: usize,
    pub dropped: usize,
}

/// Reads headerless `id,lat,lng,unix_seconds` records as [`Ping`]s.
///
/// Records with the wrong number of fields, non-numeric coordinates or
/// timestamps, or invalid UTF-8 are skipped and tallied in [`IngestStats`].
/// Timestamps are placed in the reader's UTC offset, which determines the
/// hour of day used for pricing.
///
/// ```rust
/// use chrono::FixedOffset;
/// use tripfare::io::PingReader;
///
/// let feed = "1,35.0,51.0,1696156800\n1,north,51.1,1696157400\n";
/// let mut reader = PingReader::new(feed.as_bytes(), FixedOffset::east_opt(0).unwrap());
///
/// let pings = reader.by_ref().collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(pings.len(), 1);
/// assert_eq!(reader.stats().dropped, 1);
/// ```
pub struct PingReader<R: Read> {
    records: StringRecordsIntoIter<R>,
    offset: FixedOffset,
    stats: IngestStats,
}

impl PingReader<File> {
    pub fn from_path(path: impl AsRef<Path>, offset: FixedOffset) -> Result<Self, IngestError> {
        let file = File::open(path)?;
        Ok(PingReader::new(file, offset))
    }
}

impl<R: Read> PingReader<R> {
    pub fn new(source: R, offset: FixedOffset) -> Self {
        let records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source)
            .into_records();

        Self {
            records,
            offset,
            stats: IngestStats::default(),
        }
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    fn parse(&self, record: &StringRecord) -> Option<Ping> {
        if record.len() != FIELDS {
            return None;
        }

        let lat = record.get(1)?.parse::<f64>().ok()?;
        let lng = record.get(2)?.parse::<f64>().ok()?;
        let seconds = record.get(3)?.parse::<i64>().ok()?;
        let timestamp = DateTime::from_timestamp(seconds, 0)?.with_timezone(&self.offset);

        Some(Ping::new(record.get(0)?, lat, lng, timestamp))
    }
}

impl<R: Read> Iterator for PingReader<R> {
    type Item = Result<Ping, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(err) if matches!(err.kind(), ErrorKind::Utf8 { .. }) => {
                    trace!("Dropping undecodable record: {err}");
                    self.stats.dropped += 1;
                    continue;
                }
                Err(err) => return Some(Err(err.into())),
            };

            match self.parse(&record) {
                Some(ping) => {
                    self.stats.accepted += 1;
                    return Some(Ok(ping));
                }
                None => {
                    trace!("Dropping malformed record: {record:?}");
                    self.stats.dropped += 1;
                }
            }
        }
    }
}
