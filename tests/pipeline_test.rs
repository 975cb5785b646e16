//! End-to-end tests for the parsing pipeline, exercised through the library.

use tree2csv::listing::{build_relation, Row};
use tree2csv::progress::Progress;

fn relation(text: &str) -> Vec<Row> {
    build_relation(text, &Progress::disabled())
}

const BASIC_TREE: &str = "\
.
├── dirA
│   └── file1.txt
└── file2.txt
";

#[test]
fn basic_tree_produces_the_expected_rows() {
    let rows = relation(BASIC_TREE);
    assert_eq!(
        rows,
        vec![
            // Top-level backfill: file2.txt shares the minimum indent with
            // dirA, so it gets a directory row too.
            Row::dir("./file2.txt"),
            Row::dir("./dirA"),
            Row::file("./dirA", "file1.txt"),
            Row::file(".", "file2.txt"),
        ]
    );
}

#[test]
fn summary_only_input_produces_no_rows() {
    assert!(relation("3 directories, 2 files\n").is_empty());
}

#[test]
fn literal_escape_markers_are_stripped() {
    let rows = relation("├── \\x1B[31mdirA\\x1B[0m\n│   └── inner.txt\n");
    assert_eq!(
        rows,
        vec![Row::dir("./dirA"), Row::file("./dirA", "inner.txt")]
    );
}

#[test]
fn sibling_directories_with_the_same_name_do_not_collide() {
    let text = "\
.
├── branch1
│   └── common
│       └── a.txt
└── branch2
    └── common
        └── b.txt
";
    let rows = relation(text);
    assert!(rows.contains(&Row::file("./branch1/common", "a.txt")));
    assert!(rows.contains(&Row::file("./branch2/common", "b.txt")));
    // Full-path disambiguation means no pair repeats.
    let mut unique = rows.clone();
    unique.dedup();
    assert_eq!(unique.len(), rows.len());
}

#[test]
fn deep_chain_classifies_only_the_leaf_as_a_file() {
    let text = "\
.
└── a
    └── b
        └── c
            └── d
                └── leaf.txt
";
    let rows = relation(text);
    let files: Vec<&Row> = rows.iter().filter(|r| !r.is_dir()).collect();
    assert_eq!(files, vec![&Row::file("./a/b/c/d", "leaf.txt")]);
    for dir in ["./a", "./a/b", "./a/b/c", "./a/b/c/d"] {
        assert!(rows.contains(&Row::dir(dir)), "missing directory row {dir}");
    }
}

#[test]
fn output_is_deterministic() {
    assert_eq!(relation(BASIC_TREE), relation(BASIC_TREE));
}

#[test]
fn no_duplicate_pairs_survive() {
    let rows = relation(BASIC_TREE);
    let mut seen = std::collections::HashSet::new();
    for row in &rows {
        assert!(seen.insert(row.clone()), "duplicate row {row:?}");
    }
}

#[test]
fn every_file_row_has_a_directory_row() {
    let text = "\
.
├── dirA
│   ├── sub
│   │   └── deep.txt
│   └── flat.txt
└── top.txt
";
    let rows = relation(text);
    for row in rows.iter().filter(|r| !r.is_dir() && r.directory != ".") {
        assert!(
            rows.iter().any(|r| r.is_dir() && r.directory == row.directory),
            "file row {row:?} lacks a directory row"
        );
    }
}

#[test]
fn blank_and_summary_lines_do_not_change_the_output() {
    let noisy = "\

.

├── dirA

│   └── file1.txt
3 directories, 2 files
└── file2.txt

1 directory, 1 file
";
    assert_eq!(relation(noisy), relation(BASIC_TREE));
}
