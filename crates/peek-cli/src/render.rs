//! Plain-text rendering of documents and comparisons.
//!
//! Everything here returns uncolored strings; the terminal host colors lines
//! on the way out so these stay easy to assert on.

use console::{Alignment, pad_str};
use similar::{DiffTag, TextDiff};

/// Gutter between the two panes of a side-by-side comparison.
const SEPARATOR: &str = " │ ";
const GUTTER_WIDTH: usize = 3;

/// Document text, optionally prefixed with right-aligned line numbers.
#[must_use]
pub fn render_document(content: &str, line_numbers: bool) -> String {
    if !line_numbers {
        return content.to_string();
    }

    let width = content.lines().count().max(1).to_string().len();
    content
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{:>width$} │ {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Git output is trimmed, files on disk usually are not. Compare both with a
/// single trailing newline so the last line only differs when its text does.
fn with_final_newline(text: &str) -> String {
    let trimmed = text.trim_end_matches(['\n', '\r']);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}\n")
    }
}

/// Unified diff from `old` to `new`. Empty when the texts match.
#[must_use]
pub fn render_unified(
    old: &str,
    new: &str,
    old_label: &str,
    new_label: &str,
    context: usize,
) -> String {
    let old = with_final_newline(old);
    let new = with_final_newline(new);
    let diff = TextDiff::from_lines(&old, &new);

    diff.unified_diff()
        .context_radius(context)
        .header(old_label, new_label)
        .to_string()
}

/// Two-column comparison, `old` on the left. Empty when the texts match.
#[must_use]
pub fn render_side_by_side(old: &str, new: &str, width: usize, context: usize) -> String {
    let old = with_final_newline(old);
    let new = with_final_newline(new);
    let diff = TextDiff::from_lines(&old, &new);
    let old_lines = diff.old_slices();
    let new_lines = diff.new_slices();

    // marker + space on each side, plus the gutter
    let pane = width.saturating_sub(GUTTER_WIDTH + 4).max(20) / 2;

    let mut rows = Vec::new();
    for (i, group) in diff.grouped_ops(context).iter().enumerate() {
        if i > 0 {
            rows.push("┄".repeat(pane * 2 + GUTTER_WIDTH + 4));
        }
        let mut removed: Vec<&str> = Vec::new();
        let mut added: Vec<&str> = Vec::new();
        for op in group {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            if tag == DiffTag::Equal {
                flush_changes(&mut rows, &mut removed, &mut added, pane);
                for line in &old_lines[old_range] {
                    rows.push(row(Some((' ', *line)), Some((' ', *line)), pane));
                }
            } else {
                removed.extend_from_slice(&old_lines[old_range]);
                added.extend_from_slice(&new_lines[new_range]);
            }
        }
        flush_changes(&mut rows, &mut removed, &mut added, pane);
    }

    rows.join("\n")
}

/// Pair removed lines with added lines row by row.
fn flush_changes(
    rows: &mut Vec<String>,
    removed: &mut Vec<&str>,
    added: &mut Vec<&str>,
    pane: usize,
) {
    for i in 0..removed.len().max(added.len()) {
        let left = removed.get(i).map(|l| ('-', *l));
        let right = added.get(i).map(|r| ('+', *r));
        rows.push(row(left, right, pane));
    }
    removed.clear();
    added.clear();
}

fn row(left: Option<(char, &str)>, right: Option<(char, &str)>, pane: usize) -> String {
    let (lm, l) = left.unwrap_or((' ', ""));
    let (rm, r) = right.unwrap_or((' ', ""));
    let line = format!("{lm} {}{SEPARATOR}{rm} {}", cell(l, pane), cell(r, pane));
    line.trim_end().to_string()
}

fn cell(line: &str, width: usize) -> String {
    let line = line.trim_end_matches(['\n', '\r']).replace('\t', "    ");
    pad_str(&line, width, Alignment::Left, Some("…")).into_owned()
}
