//! Top-level directory backfill transform.
//!
//! Entries at the shallowest indentation may never be classified as
//! directories by the main pass: the stack holds no matching context above
//! them. When such an entry is referenced as a parent it must still exist as
//! a path node, so every top-level name without a directory row gets one
//! inserted at the front of the sequence.

use super::Transform;
use crate::listing::types::{Item, Row};

pub struct BackfillTopLevel {
    top_names: Vec<String>,
}

impl BackfillTopLevel {
    /// Collect the names at the minimum indent among non-root items, in
    /// appearance order.
    pub fn from_items(items: &[Item]) -> Self {
        let data: Vec<&Item> = items.iter().filter(|it| !it.is_root()).collect();
        let top_names = match data.iter().map(|it| it.indent).min() {
            Some(min_indent) => data
                .iter()
                .filter(|it| it.indent == min_indent)
                .map(|it| it.name.clone())
                .collect(),
            None => Vec::new(),
        };
        Self { top_names }
    }
}

impl Transform for BackfillTopLevel {
    fn transform(&mut self, rows: &mut Vec<Row>) {
        // Reverse iteration with front insertion keeps the final order
        // matching original appearance order.
        for name in self.top_names.iter().rev() {
            let path = format!("./{name}");
            let present = rows.iter().any(|r| r.is_dir() && r.directory == path);
            if !present {
                rows.insert(0, Row::dir(path));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::types::ROOT_INDENT;

    fn item(position: usize, name: &str, indent: isize) -> Item {
        Item {
            position,
            name: name.to_string(),
            indent,
        }
    }

    #[test]
    fn inserts_missing_top_level_dirs_in_appearance_order() {
        let items = [
            item(0, ".", ROOT_INDENT),
            item(1, "alpha", 4),
            item(2, "beta", 4),
        ];
        let mut rows = vec![Row::file(".", "alpha"), Row::file(".", "beta")];
        BackfillTopLevel::from_items(&items).transform(&mut rows);
        assert_eq!(
            rows,
            vec![
                Row::dir("./alpha"),
                Row::dir("./beta"),
                Row::file(".", "alpha"),
                Row::file(".", "beta"),
            ]
        );
    }

    #[test]
    fn leaves_already_declared_directories_alone() {
        let items = [item(0, "dirA", 4), item(1, "inner.txt", 8)];
        let mut rows = vec![Row::dir("./dirA"), Row::file("./dirA", "inner.txt")];
        BackfillTopLevel::from_items(&items).transform(&mut rows);
        assert_eq!(
            rows,
            vec![Row::dir("./dirA"), Row::file("./dirA", "inner.txt")]
        );
    }

    #[test]
    fn top_level_files_also_get_a_directory_row() {
        // Min-indent selection cannot tell files from directories, so a
        // top-level file picks up a directory row too. Known quirk, kept.
        let items = [
            item(0, ".", ROOT_INDENT),
            item(1, "dirA", 4),
            item(2, "file1.txt", 8),
            item(3, "file2.txt", 4),
        ];
        let mut rows = vec![
            Row::dir("./dirA"),
            Row::file("./dirA", "file1.txt"),
            Row::file(".", "file2.txt"),
        ];
        BackfillTopLevel::from_items(&items).transform(&mut rows);
        assert_eq!(rows[0], Row::dir("./file2.txt"));
        assert_eq!(rows[1], Row::dir("./dirA"));
    }

    #[test]
    fn no_items_is_a_no_op() {
        let mut rows = vec![Row::dir("./x")];
        BackfillTopLevel::from_items(&[]).transform(&mut rows);
        assert_eq!(rows, vec![Row::dir("./x")]);
    }
}
