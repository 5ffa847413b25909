// crates/linefix-core/src/retab/mod.rs
//
// Whitespace normalization (byte-level, encoding-agnostic).
//
// Rules:
// - Every horizontal tab becomes a fixed run of spaces.
// - Trailing 0x20 bytes are stripped. Other trailing whitespace is kept.
// - A file counts as changed only if one of the two rules above fired.

pub mod walk;

#[cfg(windows)]
pub const LINE_ENDING: &[u8] = b"\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &[u8] = b"\n";

/// Result of normalizing a whole buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    pub lines: Vec<Vec<u8>>,
    pub lines_changed: usize,
}

impl Normalized {
    pub fn changed(&self) -> bool {
        self.lines_changed > 0
    }

    /// Render with one platform line terminator per line.
    pub fn render(&self) -> Vec<u8> {
        let cap = self.lines.iter().map(|l| l.len() + LINE_ENDING.len()).sum();
        let mut out = Vec::with_capacity(cap);
        for l in &self.lines {
            out.extend_from_slice(l);
            out.extend_from_slice(LINE_ENDING);
        }
        out
    }
}

/// Expand tabs and strip trailing spaces from one line (no terminator).
/// Returns the new line and whether it differs from the input.
pub fn normalize_line(line: &[u8], tab_width: usize) -> (Vec<u8>, bool) {
    let mut out = Vec::with_capacity(line.len());
    let mut changed = false;

    for &b in line {
        if b == b'\t' {
            out.extend(std::iter::repeat(b' ').take(tab_width));
            changed = true;
        } else {
            out.push(b);
        }
    }

    while out.last() == Some(&b' ') {
        out.pop();
        changed = true;
    }

    (out, changed)
}

/// Split `input` into physical lines, chomping `\n` and a preceding `\r`.
/// A final line without terminator is still a line; an empty buffer has none.
pub fn split_lines(input: &[u8]) -> Vec<&[u8]> {
    if input.is_empty() {
        return Vec::new();
    }
    let body = input.strip_suffix(b"\n").unwrap_or(input);
    body.split(|&b| b == b'\n').map(chomp_cr).collect()
}

fn chomp_cr(line: &[u8]) -> &[u8] {
    match line.split_last() {
        Some((b'\r', rest)) => rest,
        _ => line,
    }
}

/// Normalize every line of a file's contents.
pub fn normalize_buffer(input: &[u8], tab_width: usize) -> Normalized {
    let mut lines = Vec::new();
    let mut lines_changed = 0usize;

    for raw in split_lines(input) {
        let (line, changed) = normalize_line(raw, tab_width);
        if changed {
            lines_changed += 1;
        }
        lines.push(line);
    }

    Normalized {
        lines,
        lines_changed,
    }
}
