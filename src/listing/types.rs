//! Data structures for listing reconstruction.

use serde::{Deserialize, Serialize};

/// Indent level reserved for the virtual root item (`.`).
pub const ROOT_INDENT: isize = -1;

/// One named entry recovered from the listing, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// 0-based line number in the input.
    pub position: usize,
    /// Entry name with all decoration stripped.
    pub name: String,
    /// Character column at which the name begins; [`ROOT_INDENT`] for the
    /// virtual root.
    pub indent: isize,
}

impl Item {
    /// Whether this is the virtual root marker produced by a sole `.` line.
    pub fn is_root(&self) -> bool {
        self.name == "."
    }
}

/// One `(directory, file)` pair of the output relation.
///
/// An empty `file` marks the row as a directory entry; a non-empty `file`
/// names a file inside `directory`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    pub directory: String,
    pub file: String,
}

impl Row {
    /// A directory entry.
    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            directory: path.into(),
            file: String::new(),
        }
    }

    /// A file entry inside `directory`.
    pub fn file(directory: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file: name.into(),
        }
    }

    /// Whether this row declares a directory.
    pub fn is_dir(&self) -> bool {
        self.file.is_empty()
    }
}
