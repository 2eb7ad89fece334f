use crate::dispatch::FareTable;
use crate::fare::Fare;
use crate::io::{write_fares, write_fares_to_path, ExportError, IngestError, IngestStats, PingReader};

use chrono::{FixedOffset, Timelike};

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).expect("valid offset")
}

#[test_log::test]
fn malformed_records_are_dropped_and_counted() {
    let feed = "\
1,35.0,51.0,1696156800
1,35.1,51.1
1,35.1,51.1,1696157400,extra
1,north,51.1,1696157400
1,35.1,east,1696157400
1,35.1,51.1,ten
1,35.1,51.1,1696157400
2,36.0,52.0,1696158600
";

    let mut reader = PingReader::new(feed.as_bytes(), utc());
    let pings = reader
        .by_ref()
        .collect::<Result<Vec<_>, _>>()
        .expect("feed is readable");

    assert_eq!(
        pings.iter().map(|p| p.delivery.as_str()).collect::<Vec<_>>(),
        vec!["1", "1", "2"]
    );
    assert_eq!(pings[1].lat(), 35.1);
    assert_eq!(pings[1].lng(), 51.1);
    assert_eq!(pings[1].timestamp.timestamp(), 1_696_157_400);
    assert_eq!(
        reader.stats(),
        IngestStats {
            accepted: 3,
            dropped: 5
        }
    );
}

#[test_log::test]
fn undecodable_records_are_dropped() {
    let feed: &[u8] = b"1,35.0,51.0,0\n\xff\xfe,1.0,2.0,3\n2,1.0,1.0,60\n";

    let mut reader = PingReader::new(feed, utc());
    let pings = reader
        .by_ref()
        .collect::<Result<Vec<_>, _>>()
        .expect("feed is readable");

    assert_eq!(pings.len(), 2);
    assert_eq!(reader.stats().dropped, 1);
}

#[test]
fn timestamps_take_the_configured_offset() {
    let tehran = "+03:30".parse::<FixedOffset>().expect("valid offset");
    let feed = "1,35.0,51.0,1696156800\n";

    let ping = PingReader::new(feed.as_bytes(), tehran)
        .next()
        .expect("one record")
        .expect("readable");

    // 10:40 UTC
    assert_eq!(ping.hour(), 14);
    assert_eq!(ping.timestamp.minute(), 10);
    assert_eq!(ping.timestamp.offset(), &tehran);
}

#[test]
fn missing_feed_is_an_error() {
    let path = std::env::temp_dir().join("tripfare-missing-feed").join("pings.csv");

    match PingReader::from_path(path, utc()) {
        Err(IngestError::IOError(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
        Err(other) => panic!("Expected an I/O error, got {other:?}"),
        Ok(_) => panic!("Expected the feed to be missing"),
    }
}

#[test]
fn fares_are_written_sorted_to_cents() {
    let table = [
        ("2".to_string(), Fare::new(11.881375)),
        ("1".to_string(), Fare::new(22.562912)),
        ("3".to_string(), Fare::new(3.47)),
        ("with,comma".to_string(), Fare::new(4.0)),
    ]
    .into_iter()
    .collect::<FareTable>();

    let mut sink = Vec::new();
    let rows = write_fares(&table, &mut sink).expect("written");

    assert_eq!(rows, 4);
    assert_eq!(
        String::from_utf8(sink).expect("utf-8"),
        "1,22.56\n2,11.88\n3,3.47\n\"with,comma\",4.00\n"
    );
}

#[test]
fn unwritable_destination_is_an_error() {
    let path = std::env::temp_dir().join("tripfare-missing-dir").join("fares.csv");

    match write_fares_to_path(&FareTable::new(), path) {
        Err(ExportError::IOError(_)) => {}
        other => panic!("Expected an I/O error, got {other:?}"),
    }
}
