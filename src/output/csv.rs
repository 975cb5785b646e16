//! Delimiter-separated tabular output.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use csv::WriterBuilder;

use super::error::WriteError;
use crate::listing::Row;

/// Write rows under a `directory;file` header.
///
/// The header is written even for an empty relation; a directory row leaves
/// the second field empty. The delimiter is configurable but must be ASCII.
pub fn write_csv(path: &Path, rows: &[Row], delimiter: char) -> Result<(), WriteError> {
    if !delimiter.is_ascii() {
        return Err(WriteError::NonAsciiDelimiter(delimiter));
    }

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    // Written by hand so an empty relation still gets its header.
    writer.write_record(["directory", "file"])?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
