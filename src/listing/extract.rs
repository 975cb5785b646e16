//! Item extraction across the whole input.

use tracing::debug;

use super::sanitize::{sanitize_line, CleanLine};
use super::types::{Item, ROOT_INDENT};
use crate::progress::Progress;

/// Per-item diagnostics stop after this many items so debug output stays
/// usable on large listings.
const MAX_DEBUG_ITEMS: usize = 50;

/// Apply the sanitizer to every line, keeping successful results in input
/// order. Lines that sanitize to nothing contribute no item; positions are
/// line numbers in the raw input, so skipped lines still advance them.
pub fn extract_items(text: &str, progress: &Progress) -> Vec<Item> {
    let lines: Vec<&str> = text.lines().collect();
    let total = lines.len();
    let mut items = Vec::new();

    for (position, raw) in lines.iter().enumerate() {
        progress.tick("⏳ Reading lines", position, total);

        let Some(clean) = sanitize_line(raw) else {
            continue;
        };
        let item = match clean {
            CleanLine::Root => Item {
                position,
                name: ".".to_string(),
                indent: ROOT_INDENT,
            },
            CleanLine::Entry { name, indent } => Item {
                position,
                name,
                indent: indent as isize,
            },
        };
        if items.len() < MAX_DEBUG_ITEMS {
            debug!(
                position = item.position,
                indent = item.indent,
                name = %item.name,
                "parsed item"
            );
        }
        items.push(item);
    }

    progress.finish(&format!("Read complete ({} items).", items.len()));
    items
}
