//! Per-line rules active when the source classifies as Python.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostic::{Category, Diagnostic, Diagnostics};

/// List indices past this are flagged regardless of context.
const LIST_INDEX_LIMIT: usize = 10;

static LIST_ACCESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\[(\d+)\]").unwrap());

/// Run the Python rules over one non-blank line.
///
/// `raw` is the untrimmed line: the indentation rules inspect leading
/// whitespace that trimming would destroy.
pub(crate) fn check_line(
    diags: &mut Diagnostics,
    lines: &[&str],
    idx: usize,
    raw: &str,
    trimmed: &str,
) {
    let line_num = idx + 1;

    missing_indentation(diags, lines, idx, raw, trimmed);
    mixed_indentation(diags, line_num, raw, trimmed);
    list_out_of_bounds(diags, line_num, trimmed);
}

/// A line following a `:`-terminated line must be indented.
///
/// The nearest preceding non-blank line is the block opener; blank lines in
/// between do not reset the check.
fn missing_indentation(
    diags: &mut Diagnostics,
    lines: &[&str],
    idx: usize,
    raw: &str,
    trimmed: &str,
) {
    if idx == 0 {
        return;
    }
    let Some(prev) = lines[..idx].iter().rev().find(|l| !l.trim().is_empty()) else {
        return;
    };
    if prev.trim().ends_with(':') && !raw.starts_with(' ') && !raw.starts_with('\t') {
        diags.push(Diagnostic::on_line(
            idx + 1,
            trimmed,
            Category::MissingIndentation,
            format!(
                "Add indentation to this line: \"    {}\" - In Python, code blocks after a colon \
                 (:) must be indented.",
                trimmed
            ),
        ));
    }
}

/// A space-indented line that also contains a tab.
fn mixed_indentation(diags: &mut Diagnostics, line_num: usize, raw: &str, trimmed: &str) {
    if raw.starts_with(' ') && raw.contains('\t') {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::MixedIndentation,
            format!(
                "Use consistent indentation in: \"{}\" - Choose either spaces or tabs and use it \
                 consistently throughout your code.",
                trimmed
            ),
        ));
    }
}

/// `name[digits]` with a suspiciously large literal index. Fixed threshold,
/// no lookback - unlike the brace-family array rule.
fn list_out_of_bounds(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if !trimmed.contains('[') || !trimmed.contains(']') {
        return;
    }
    for caps in LIST_ACCESS.captures_iter(trimmed) {
        let Ok(index) = caps[2].parse::<usize>() else {
            continue;
        };
        if index > LIST_INDEX_LIMIT {
            diags.push(Diagnostic::on_line(
                line_num,
                trimmed,
                Category::ListOutOfBounds,
                format!(
                    "List index {} might be out of bounds. Check if the list has at least {} \
                     elements. Use len(list) - 1 as the maximum index.",
                    index,
                    index + 1
                ),
            ));
        }
    }
}
