//! Reconstruction of a filesystem hierarchy from `tree` text output.
//!
//! The pipeline is strictly forward and fully sequential:
//!
//! 1. Each raw line is sanitized into a name plus indentation column, or
//!    discarded (blank lines, summary footers, pure decoration).
//! 2. The surviving items, in input order, are walked with a stack of open
//!    ancestors; one-step lookahead on indentation classifies each item as
//!    directory or file and emits relation rows.
//! 3. Two row transforms finish the job: top-level backfill repairs entries
//!    the main pass could not classify, deduplication drops repeated pairs
//!    while preserving first-seen order.
//!
//! # Module Structure
//!
//! - `sanitize` - per-line cleanup and name-start detection
//! - `extract` - sanitizer applied across the whole input
//! - `hierarchy` - the stack/lookahead core algorithm
//! - `transforms` - row post-passes (backfill, dedup)
//! - `types` - data structures

mod extract;
mod hierarchy;
mod sanitize;
mod transforms;
mod types;

pub use extract::extract_items;
pub use hierarchy::build_rows;
pub use sanitize::{sanitize_line, strip_escapes, CleanLine};
pub use transforms::{BackfillTopLevel, DeduplicateRows, Transform};
pub use types::{Item, Row, ROOT_INDENT};

use crate::progress::Progress;

/// Run the whole pipeline: text in, final deduplicated rows out.
pub fn build_relation(text: &str, progress: &Progress) -> Vec<Row> {
    let items = extract_items(text, progress);
    let mut rows = build_rows(&items, progress);

    let mut transforms: Vec<Box<dyn Transform>> = vec![
        Box::new(BackfillTopLevel::from_items(&items)),
        Box::new(DeduplicateRows),
    ];
    for transform in transforms.iter_mut() {
        transform.transform(&mut rows);
    }
    rows
}
