//! Reconstruct a directory/file relation from `tree` command text output.
//!
//! The library turns the indented, glyph-decorated output of the Unix `tree`
//! command into a flat sequence of `(directory, file)` rows. The format
//! carries no explicit type markers, so the hierarchy is recovered purely
//! from indentation, with a one-step lookahead deciding whether each entry
//! is a directory or a file.
//!
//! Processing is a strictly forward pipeline:
//!
//! 1. [`listing`] sanitizes each raw line, extracts ordered items, rebuilds
//!    the hierarchy, and applies the row post-passes (top-level backfill and
//!    deduplication).
//! 2. [`output`] encodes the final rows as semicolon-delimited CSV or JSON.
//!
//! [`config`] supplies optional user defaults and [`progress`] provides the
//! periodic stderr reporting used by the CLI.

pub mod config;
pub mod listing;
pub mod output;
pub mod progress;

pub use config::Config;

/// Version string shown by `--version`.
///
/// Dev builds carry the git commit hash and build date emitted by the build
/// script; builds with the `release` feature get the bare crate version.
pub fn version() -> String {
    let base = env!("CARGO_PKG_VERSION");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => {
            let short = sha.get(..7).unwrap_or(sha);
            let date = option_env!("TREE2CSV_BUILD_DATE").unwrap_or("unknown");
            format!("{base} ({short} {date})")
        }
        None => base.to_string(),
    }
}
