//! JSON array output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::WriteError;
use crate::listing::Row;

/// Write rows as a pretty-printed JSON array of `{directory, file}` objects.
pub fn write_json(path: &Path, rows: &[Row]) -> Result<(), WriteError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
