//! Writer errors.

/// Errors raised while writing the relation.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    NonAsciiDelimiter(char),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
