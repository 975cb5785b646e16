//! Duplicate row removal.

use std::collections::HashSet;

use super::Transform;
use crate::listing::types::Row;

/// Keeps only the first occurrence of each `(directory, file)` pair,
/// preserving order.
pub struct DeduplicateRows;

impl Transform for DeduplicateRows {
    fn transform(&mut self, rows: &mut Vec<Row>) {
        let mut seen: HashSet<Row> = HashSet::with_capacity(rows.len());
        rows.retain(|row| seen.insert(row.clone()));
    }
}
