//! Degraded-mode analyzer.
//!
//! A deliberately tiny alternative implementation of the `analyze` contract
//! for environments that cannot carry the full rule battery: only the
//! "statement lines end in `;`, `{`, or `}`" check plus the sentinels. Not a
//! fallback the full engine ever takes - callers choose it explicitly.

use crate::diagnostic::{Category, Diagnostic};

/// Analyze with the reduced rule set.
///
/// Same shape of output as [`super::analyze`]: never fails, always returns
/// at least one entry.
pub fn analyze_minimal(code: &str) -> Vec<Diagnostic> {
    if code.trim().is_empty() {
        return vec![Diagnostic::whole_source(
            Category::NoCodeDetected,
            "Please paste your source code before checking.".to_string(),
        )];
    }

    let mut diagnostics = Vec::new();

    for (idx, raw) in code.split('\n').enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !trimmed.ends_with(';') && !trimmed.ends_with('{') && !trimmed.ends_with('}') {
            diagnostics.push(Diagnostic {
                line: idx + 1,
                line_content: None,
                category: Category::MissingSemicolon,
                desc: "You forgot to add a semicolon at the end of this statement. Many \
                       languages require semicolons to separate instructions."
                    .to_string(),
            });
        }
    }

    if diagnostics.is_empty() {
        diagnostics.push(Diagnostic::whole_source(
            Category::NoSyntaxErrors,
            "Your code passed basic syntax checks.".to_string(),
        ));
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let diags = analyze_minimal("   \n ");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].category, Category::NoCodeDetected);
    }

    #[test]
    fn test_flags_unterminated_lines() {
        let diags = analyze_minimal("int x = 5\nint y = 6;");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 1);
        assert_eq!(diags[0].category, Category::MissingSemicolon);
        assert!(diags[0].line_content.is_none());
    }

    #[test]
    fn test_clean_input_sentinel() {
        let diags = analyze_minimal("int x = 5;\n{\n}");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].category, Category::NoSyntaxErrors);
    }

    #[test]
    fn test_never_dedups_per_line_like_full_engine() {
        // Every unterminated line is reported, one entry per line.
        let diags = analyze_minimal("a\nb\nc");
        assert_eq!(diags.len(), 3);
    }
}
