//! Language-independent rules, applied to every non-blank line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostic::{Category, Diagnostic, Diagnostics};

static EQUALS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"=+").unwrap());

pub(crate) fn check_line(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    multiple_assignment_operators(diags, line_num, trimmed);
    infinite_loop(diags, line_num, trimmed);
}

/// More than one bare `=` on a line that carries no comparison operator.
fn multiple_assignment_operators(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if !trimmed.contains('=') || trimmed.contains("==") || trimmed.contains("!=") {
        return;
    }
    if trimmed.split('=').count() > 2 {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::MultipleAssignmentOperators,
            format!(
                "Fix this line: \"{}\" - You have multiple '=' signs. For comparison, use '==' \
                 or '===' instead of '='.",
                EQUALS_RUN.replace_all(trimmed, "=")
            ),
        ));
    }
}

/// Literal always-true loop headers.
fn infinite_loop(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if trimmed.contains("while(true)")
        || trimmed.contains("while (true)")
        || trimmed.contains("for(;;)")
    {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::PotentialInfiniteLoop,
            format!(
                "This loop might run forever. Add a break condition or ensure there's a way to \
                 exit the loop in: \"{}\"",
                trimmed
            ),
        ));
    }
}
