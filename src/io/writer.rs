use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::dispatch::FareTable;
use crate::io::ExportError;

/// Writes one `id,fare` row per delivery, ordered by delivery identifier,
/// with fares rendered to two decimal places. Returns the number of rows.
pub fn write_fares<W: Write>(fares: &FareTable, sink: W) -> Result<usize, ExportError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);

    let rows = fares.sorted();
    for (delivery, fare) in &rows {
        let fare = fare.to_string();
        writer.write_record([*delivery, fare.as_str()])?;
    }

    writer.flush()?;
    Ok(rows.len())
}

/// Creates (or truncates) the file at `path` and writes the fares into it.
pub fn write_fares_to_path(fares: &FareTable, path: impl AsRef<Path>) -> Result<usize, ExportError> {
    let file = File::create(path)?;
    write_fares(fares, file)
}
