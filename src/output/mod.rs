//! Relation writers.
//!
//! Two encodings over the same row sequence: a delimiter-separated tabular
//! file with a `directory;file` header, and a JSON array for downstream
//! tooling that prefers structured records.

mod csv;
mod error;
mod json;

pub use self::csv::write_csv;
pub use self::error::WriteError;
pub use self::json::write_json;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Encoding of the emitted relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Delimiter-separated rows with a header.
    Csv,
    /// A pretty-printed JSON array of `{directory, file}` objects.
    Json,
}
