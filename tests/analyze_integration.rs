//! Integration tests for the full analysis pipeline.
//!
//! These exercise the documented end-to-end scenarios: classification,
//! the rule batteries, whole-source balance, sentinels, and the dedup
//! invariant with its documented exceptions.

use std::path::PathBuf;

use snagcheck::{analyze, analyze_minimal, classify, Analyzer, Category, Language};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

#[test]
fn test_java_array_overrun_scenario() {
    let code = r#"public class Test {
    public static void main(String[] args) {
       int a[]={1,2,3};
       System.out.println(a[5]);
    }
}"#;

    let diags = analyze(code);

    assert_eq!(diags.len(), 1, "unexpected findings: {:?}", diags);
    let d = &diags[0];
    assert_eq!(d.category, Category::ArrayIndexOutOfBounds);
    assert_eq!(d.line, 4);
    assert!(d.desc.contains("index 5"));
    assert!(d.desc.contains("3 elements (indices 0 to 2)"));

    // Both preconditions are satisfied: a main method exists, and no file
    // name was supplied for the name-mismatch advisory to compare against.
    assert!(!diags.iter().any(|d| d.category == Category::MissingMainMethod));
    assert!(!diags
        .iter()
        .any(|d| d.category == Category::FileNameClassNameMismatch));
}

#[test]
fn test_missing_semicolon_scenario() {
    let diags = analyze("let x = 5");

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].category, Category::MissingSemicolon);
    assert_eq!(diags[0].line, 1);
    assert_eq!(diags[0].line_content.as_deref(), Some("let x = 5"));
}

#[test]
fn test_well_formed_trivial_program() {
    let diags = analyze("let x = 5;");

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].category, Category::NoSyntaxErrors);
    assert_eq!(diags[0].line, 0);
}

#[test]
fn test_python_missing_indentation() {
    // The import line makes the source classify as Python; the body of the
    // conditional is then checked for indentation.
    let code = "import sys\nif x:\nprint(x)";
    assert_eq!(classify(code), Language::Python);

    let diags = analyze(code);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].category, Category::MissingIndentation);
    assert_eq!(diags[0].line, 3);
}

#[test]
fn test_bare_colon_snippet_classifies_as_javascript() {
    // Without any Python signature substring the classifier falls through
    // to its JavaScript default, so the indentation rules do not run; the
    // snippet is judged under the brace-family lens instead.
    let code = "if x:\nprint(x)";
    assert_eq!(classify(code), Language::Javascript);

    let diags = analyze(code);
    assert!(!diags.iter().any(|d| d.category == Category::MissingIndentation));
}

#[test]
fn test_unclosed_string_scenario() {
    let diags = analyze("String s = \"hello;");

    assert_eq!(diags.len(), 1, "unexpected findings: {:?}", diags);
    assert_eq!(diags[0].category, Category::UnclosedStringLiteral);
    assert_eq!(diags[0].line, 1);
}

#[test]
fn test_unclosed_brackets_counted_exactly() {
    let code = "function f() {\nlet x = 1;\nif (x) {\nlet y = 2;";
    let diags = analyze(code);

    let unclosed: Vec<_> = diags
        .iter()
        .filter(|d| d.category == Category::UnclosedBrackets)
        .collect();
    assert_eq!(unclosed.len(), 1);
    assert!(unclosed[0].desc.contains("Add 2 closing bracket(s)"));
    assert!(!diags.iter().any(|d| d.category == Category::ExtraClosingBracket));
}

#[test]
fn test_excess_closing_bracket_reported_once() {
    let code = "let x = 1;\n}\n}\n}";
    let diags = analyze(code);

    let extra: Vec<_> = diags
        .iter()
        .filter(|d| d.category == Category::ExtraClosingBracket)
        .collect();
    assert_eq!(extra.len(), 1);
    assert!(!diags.iter().any(|d| d.category == Category::UnclosedBrackets));
}

#[test]
fn test_dedup_invariant_with_documented_exceptions() {
    // Deliberately messy source to fire many rules at once.
    let code = r#"public class Broken {
int x = 5
x = 1 ? 2
publc voi run(,,)
for each thing
}"#;
    let diags = analyze(code);

    let mut seen = std::collections::HashSet::new();
    for d in &diags {
        if d.category.allows_duplicates() {
            continue;
        }
        assert!(
            seen.insert((d.line, d.category)),
            "duplicate finding for line {} category {}",
            d.line,
            d.category
        );
    }
}

#[test]
fn test_analyze_terminates_on_arbitrary_input() {
    for input in [
        "",
        "\u{0}\u{1}\u{2} binary soup",
        "{{{{{{{{{{",
        "}}}}}",
        "🦀🦀🦀",
        "let x = 5;\n".repeat(500).as_str(),
    ] {
        let diags = analyze(input);
        assert!(!diags.is_empty(), "input {:?} produced no entries", input);
    }
}

#[test]
fn test_analyze_is_idempotent_end_to_end() {
    let code = "public class A {\nint x = 1\npublc y\n}";
    assert_eq!(analyze(code), analyze(code));
}

#[test]
fn test_fixture_java_overrun_with_matching_file_name() {
    let source = std::fs::read_to_string(testdata_path().join("Test.java")).unwrap();
    let diags = Analyzer::new().with_file_name("Test.java").analyze(&source);

    assert!(diags
        .iter()
        .any(|d| d.category == Category::ArrayIndexOutOfBounds && d.line == 4));
    // The file is named after the class, so no mismatch advisory.
    assert!(!diags
        .iter()
        .any(|d| d.category == Category::FileNameClassNameMismatch));
}

#[test]
fn test_fixture_java_mismatched_file_name() {
    let source = std::fs::read_to_string(testdata_path().join("Test.java")).unwrap();
    let diags = Analyzer::new().with_file_name("Main.java").analyze(&source);

    let mismatch: Vec<_> = diags
        .iter()
        .filter(|d| d.category == Category::FileNameClassNameMismatch)
        .collect();
    assert_eq!(mismatch.len(), 1);
    assert_eq!(mismatch[0].line, 0);
    assert!(mismatch[0].desc.contains("\"Test.java\""));
}

#[test]
fn test_fixture_python_indentation() {
    let source = std::fs::read_to_string(testdata_path().join("script.py")).unwrap();
    let diags = analyze(&source);

    assert!(diags
        .iter()
        .any(|d| d.category == Category::MissingIndentation && d.line == 4));
}

#[test]
fn test_fixture_clean_javascript() {
    let source = std::fs::read_to_string(testdata_path().join("clean.js")).unwrap();
    let diags = analyze(&source);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].category, Category::NoSyntaxErrors);
}

#[test]
fn test_minimal_mode_honors_the_same_contract() {
    // Degraded mode: same sentinels, same shape, reduced rule set.
    assert_eq!(analyze_minimal("  ")[0].category, Category::NoCodeDetected);
    assert_eq!(
        analyze_minimal("let x = 5;")[0].category,
        Category::NoSyntaxErrors
    );

    let diags = analyze_minimal("let x = 5");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].category, Category::MissingSemicolon);
    assert_eq!(diags[0].line, 1);
}

#[test]
fn test_lookback_is_configurable() {
    // Declaration 4 lines above the access; a 2-line window cannot reach it.
    let code = "int a[]={1,2,3};\nlet p = 1;\nlet q = 2;\nlet r = 3;\nlet s = a[5];";

    let default_diags = Analyzer::new().analyze(code);
    assert!(default_diags
        .iter()
        .any(|d| d.category == Category::ArrayIndexOutOfBounds && d.desc.contains("3 elements")));

    let narrow_diags = Analyzer::new().with_lookback(2).analyze(code);
    // With the declaration out of reach, the access itself supplies the
    // size (a[5] reads as a 5-element declaration shape), so the finding
    // cites 5 elements rather than 3.
    assert!(narrow_diags
        .iter()
        .any(|d| d.category == Category::ArrayIndexOutOfBounds && d.desc.contains("5 elements")));
}
