//! Per-line cleanup for `tree` output.
//!
//! A raw line arrives decorated: branch glyphs, color escape sequences
//! (sometimes as literal text rather than control bytes), trailing summary
//! footers. Sanitizing reduces it to either nothing or a clean entry name
//! plus the character column where that name starts. The column is the only
//! depth signal the rest of the pipeline gets, so offsets are counted in
//! characters, never bytes.

/// Result of sanitizing one raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanLine {
    /// The virtual root marker line (a sole `.`).
    Root,
    /// A named entry and the character column where its name begins.
    Entry { name: String, indent: usize },
}

/// Glyphs the `tree` command uses to draw branches, plus common bullets and
/// arrows seen in hand-edited listings.
const TREE_GLYPHS: &[char] = &[
    '│', '├', '└', '┌', '┐', '┤', '┴', '┬', '┼', '─', '>', '»', '·', '•', '-',
];

/// Leading characters stripped from the extracted name in the second cleanup
/// pass: anything in the box-drawing block plus stray bullets and arrows.
const RESIDUAL_GLYPHS: &[char] = &['-', '›', '»', '·', '•', '>'];

/// Sanitize one raw line.
///
/// Returns `None` when the line carries nothing semantic: blank lines,
/// summary footers, lines that are decoration all the way through.
pub fn sanitize_line(raw: &str) -> Option<CleanLine> {
    if raw.trim().is_empty() {
        return None;
    }
    if is_summary_line(raw) {
        return None;
    }

    let clean = strip_escapes(raw);
    if clean.trim() == "." {
        return Some(CleanLine::Root);
    }

    let indent = find_name_start(&clean)?;
    let name: String = clean.chars().skip(indent).collect();
    let name = name
        .trim()
        .trim_start_matches(is_residual_glyph)
        .trim();
    if name.is_empty() {
        return None;
    }

    Some(CleanLine::Entry {
        name: name.to_string(),
        indent,
    })
}

/// Matches trailing summary lines such as `3 directories, 2 files` or the
/// singular `1 directory, 1 file`, case-insensitively, with leading
/// whitespace allowed.
pub fn is_summary_line(line: &str) -> bool {
    let rest = line.trim_start();
    let after_digits = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == rest.len() {
        return false; // no leading count
    }
    let after_ws = after_digits.trim_start_matches(char::is_whitespace);
    if after_ws.len() == after_digits.len() {
        return false; // count not followed by whitespace
    }
    let lower = after_ws.to_lowercase();
    ["directories", "directory", "file"]
        .iter()
        .any(|unit| lower.starts_with(unit))
}

/// Strip terminal escape sequences anywhere in the line.
///
/// Handles both genuine control bytes and the literal spellings (`\x1B[`,
/// `\033[`, `\e[`, `ESC[`) that survive when colored output is captured
/// through a pipe or pasted from a log.
pub fn strip_escapes(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;
    while i < chars.len() {
        match match_escape(&chars[i..]) {
            Some(len) => i += len,
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}

/// Length of the escape sequence starting at `s[0]`, if any.
fn match_escape(s: &[char]) -> Option<usize> {
    // Real CSI sequence: ESC [ params intermediates final
    if s[0] == '\u{1b}' && s.get(1) == Some(&'[') {
        return csi_tail(s, 2);
    }
    // Literal "\x1B[" followed by the same CSI tail
    if starts_with_ci(s, "\\x1b[") {
        return csi_tail(s, 5);
    }
    // Literal "\033[...m"
    if starts_with_ci(s, "\\033[") {
        return sgr_tail(s, 5);
    }
    // Literal "\e[...m"
    if starts_with_ci(s, "\\e[") {
        return sgr_tail(s, 3);
    }
    // Literal "ESC[...m"
    if starts_with_ci(s, "esc[") {
        return sgr_tail(s, 4);
    }
    None
}

/// Consume CSI parameter bytes, intermediate bytes, and one final byte.
fn csi_tail(s: &[char], start: usize) -> Option<usize> {
    let mut i = start;
    while i < s.len() && matches!(s[i], '0'..='?') {
        i += 1;
    }
    while i < s.len() && matches!(s[i], ' '..='/') {
        i += 1;
    }
    if i < s.len() && matches!(s[i], '@'..='~') {
        Some(i + 1)
    } else {
        None
    }
}

/// Consume `[0-9;]*` and a final `m`.
fn sgr_tail(s: &[char], start: usize) -> Option<usize> {
    let mut i = start;
    while i < s.len() && (s[i].is_ascii_digit() || s[i] == ';') {
        i += 1;
    }
    if i < s.len() && s[i].eq_ignore_ascii_case(&'m') {
        Some(i + 1)
    } else {
        None
    }
}

fn starts_with_ci(s: &[char], prefix: &str) -> bool {
    prefix.chars().count() <= s.len()
        && s.iter()
            .zip(prefix.chars())
            .all(|(a, b)| a.eq_ignore_ascii_case(&b))
}

/// Character column (0-based) at which the entry name starts.
///
/// Primary rule: the first character of the name alphabet (ASCII letters,
/// digits, `_ . @ -`). When a line has none of those, fall back to stripping
/// the leading tree glyphs and locating the first occurrence of whatever
/// character the residue starts with.
fn find_name_start(s: &str) -> Option<usize> {
    if let Some(pos) = s.chars().position(is_name_char) {
        return Some(pos);
    }
    let stripped = s.trim_start_matches(is_tree_glyph);
    let first = stripped.chars().next()?;
    s.chars().position(|c| c == first)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '@' | '-')
}

fn is_tree_glyph(c: char) -> bool {
    c.is_whitespace() || TREE_GLYPHS.contains(&c)
}

fn is_residual_glyph(c: char) -> bool {
    matches!(c, '\u{2500}'..='\u{257F}') || c.is_whitespace() || RESIDUAL_GLYPHS.contains(&c)
}
