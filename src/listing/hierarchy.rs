//! Hierarchy reconstruction from the flat item sequence.
//!
//! The listing format indicates nesting purely through the indentation of
//! subsequent lines, so an entry is classified as a directory exactly when
//! the next entry sits strictly deeper. This one-step lookahead is the sole
//! type signal, and it has an inherent blind spot: a directory with no
//! visible descendants (an empty directory, or a pruned last sibling) reads
//! as a file. That behavior is deliberate and load-bearing; downstream
//! repairs happen in the row transforms, not here.

use std::collections::HashSet;

use super::types::{Item, Row, ROOT_INDENT};
use crate::progress::Progress;

/// One still-open ancestor directory.
struct Frame {
    indent: isize,
    path: String,
}

/// Walk the ordered items and emit one row per discovered directory or file.
///
/// The ancestor stack starts with a sentinel for the implicit root, and a
/// leading virtual root item is consumed without emitting a row. Inconsistent
/// indentation never fails: popping always leaves *some* parent, at worst
/// the root itself.
pub fn build_rows(items: &[Item], progress: &Progress) -> Vec<Row> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut stack = vec![Frame {
        indent: ROOT_INDENT,
        path: ".".to_string(),
    }];
    let mut rows: Vec<Row> = Vec::new();
    let mut dir_paths: HashSet<String> = HashSet::new();

    // The virtual root marker carries no row of its own.
    let start = usize::from(items[0].is_root());
    let total = items.len();

    for i in start..total {
        progress.tick("⚙️  Building rows", i, total);

        let item = &items[i];
        let next_indent = items.get(i + 1).map_or(ROOT_INDENT, |next| next.indent);
        // Classify before touching the stack: a deeper follower means a
        // directory, nothing else does.
        let is_dir = next_indent > item.indent;

        while stack.last().is_some_and(|top| top.indent >= item.indent) {
            stack.pop();
        }
        let parent = stack
            .last()
            .map_or(".", |top| top.path.as_str())
            .to_string();

        let fullpath = if parent == "." {
            format!("./{}", item.name)
        } else {
            format!("{}/{}", parent, item.name)
        };

        if is_dir {
            dir_paths.insert(fullpath.clone());
            rows.push(Row::dir(fullpath.clone()));
            stack.push(Frame {
                indent: item.indent,
                path: fullpath,
            });
        } else {
            // An ancestor the lookahead never saw as a directory still needs
            // its own row before the first file below it.
            if parent != "." && !dir_paths.contains(&parent) {
                dir_paths.insert(parent.clone());
                rows.push(Row::dir(parent.clone()));
            }
            rows.push(Row::file(parent, item.name.clone()));
        }
    }

    progress.finish(&format!("Build complete ({} rows).", rows.len()));
    rows
}
