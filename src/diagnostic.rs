//! Core types for analysis findings.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Finding categories.
///
/// The serialized form is the human-facing `msg` label consumed by callers,
/// so the rename strings here are part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "No code detected")]
    NoCodeDetected,
    #[serde(rename = "No syntax errors found")]
    NoSyntaxErrors,
    #[serde(rename = "Unclosed parenthesis")]
    UnclosedParenthesis,
    #[serde(rename = "Extra closing parenthesis")]
    ExtraClosingParenthesis,
    #[serde(rename = "Missing semicolon")]
    MissingSemicolon,
    #[serde(rename = "Missing variable declaration")]
    MissingVariableDeclaration,
    #[serde(rename = "Invalid variable name")]
    InvalidVariableName,
    #[serde(rename = "Missing Function Parentheses")]
    MissingFunctionParentheses,
    #[serde(rename = "Missing main method")]
    MissingMainMethod,
    #[serde(rename = "Array Index Out Of Bounds")]
    ArrayIndexOutOfBounds,
    #[serde(rename = "Trailing Comma Error")]
    TrailingComma,
    #[serde(rename = "Misspelled Keyword")]
    MisspelledKeyword,
    #[serde(rename = "Invalid Assignment Operator")]
    InvalidAssignmentOperator,
    #[serde(rename = "Missing Colon")]
    MissingColon,
    #[serde(rename = "Invalid Import Statement")]
    InvalidImportStatement,
    #[serde(rename = "Invalid Method Declaration")]
    InvalidMethodDeclaration,
    #[serde(rename = "Reserved Keyword Used as Identifier")]
    ReservedKeywordAsIdentifier,
    #[serde(rename = "Unexpected Token")]
    UnexpectedToken,
    #[serde(rename = "Missing Return Type")]
    MissingReturnType,
    #[serde(rename = "Invalid Loop Syntax")]
    InvalidLoopSyntax,
    #[serde(rename = "Invalid Conditional Syntax")]
    InvalidConditionalSyntax,
    #[serde(rename = "File Name Class Name Mismatch")]
    FileNameClassNameMismatch,
    #[serde(rename = "Invalid Logical Operator")]
    InvalidLogicalOperator,
    #[serde(rename = "Invalid Function Call")]
    InvalidFunctionCall,
    #[serde(rename = "Incorrect Parameter List")]
    IncorrectParameterList,
    #[serde(rename = "Extra Argument")]
    ExtraArgument,
    #[serde(rename = "Type Mismatch Error")]
    TypeMismatch,
    #[serde(rename = "Invalid Casting Syntax")]
    InvalidCastingSyntax,
    #[serde(rename = "Potential null pointer exception")]
    NullPointerAccess,
    #[serde(rename = "Unclosed single quote")]
    UnclosedSingleQuote,
    #[serde(rename = "Unclosed string literal")]
    UnclosedStringLiteral,
    #[serde(rename = "Missing indentation")]
    MissingIndentation,
    #[serde(rename = "Mixed indentation")]
    MixedIndentation,
    #[serde(rename = "Potential list out of bounds")]
    ListOutOfBounds,
    #[serde(rename = "Multiple assignment operators")]
    MultipleAssignmentOperators,
    #[serde(rename = "Potential infinite loop")]
    PotentialInfiniteLoop,
    #[serde(rename = "Extra closing bracket")]
    ExtraClosingBracket,
    #[serde(rename = "Unclosed brackets")]
    UnclosedBrackets,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NoCodeDetected => "No code detected",
            Category::NoSyntaxErrors => "No syntax errors found",
            Category::UnclosedParenthesis => "Unclosed parenthesis",
            Category::ExtraClosingParenthesis => "Extra closing parenthesis",
            Category::MissingSemicolon => "Missing semicolon",
            Category::MissingVariableDeclaration => "Missing variable declaration",
            Category::InvalidVariableName => "Invalid variable name",
            Category::MissingFunctionParentheses => "Missing Function Parentheses",
            Category::MissingMainMethod => "Missing main method",
            Category::ArrayIndexOutOfBounds => "Array Index Out Of Bounds",
            Category::TrailingComma => "Trailing Comma Error",
            Category::MisspelledKeyword => "Misspelled Keyword",
            Category::InvalidAssignmentOperator => "Invalid Assignment Operator",
            Category::MissingColon => "Missing Colon",
            Category::InvalidImportStatement => "Invalid Import Statement",
            Category::InvalidMethodDeclaration => "Invalid Method Declaration",
            Category::ReservedKeywordAsIdentifier => "Reserved Keyword Used as Identifier",
            Category::UnexpectedToken => "Unexpected Token",
            Category::MissingReturnType => "Missing Return Type",
            Category::InvalidLoopSyntax => "Invalid Loop Syntax",
            Category::InvalidConditionalSyntax => "Invalid Conditional Syntax",
            Category::FileNameClassNameMismatch => "File Name Class Name Mismatch",
            Category::InvalidLogicalOperator => "Invalid Logical Operator",
            Category::InvalidFunctionCall => "Invalid Function Call",
            Category::IncorrectParameterList => "Incorrect Parameter List",
            Category::ExtraArgument => "Extra Argument",
            Category::TypeMismatch => "Type Mismatch Error",
            Category::InvalidCastingSyntax => "Invalid Casting Syntax",
            Category::NullPointerAccess => "Potential null pointer exception",
            Category::UnclosedSingleQuote => "Unclosed single quote",
            Category::UnclosedStringLiteral => "Unclosed string literal",
            Category::MissingIndentation => "Missing indentation",
            Category::MixedIndentation => "Mixed indentation",
            Category::ListOutOfBounds => "Potential list out of bounds",
            Category::MultipleAssignmentOperators => "Multiple assignment operators",
            Category::PotentialInfiniteLoop => "Potential infinite loop",
            Category::ExtraClosingBracket => "Extra closing bracket",
            Category::UnclosedBrackets => "Unclosed brackets",
        }
    }

    /// Whether the rules that report this category are allowed to append the
    /// same `(line, msg)` pair more than once.
    ///
    /// Everything else goes through the dedup-checked insert. The
    /// low-confidence array-bounds fallback also bypasses dedup, but that is
    /// a property of one code path, not of the whole category - see
    /// `engine::arrays`.
    pub fn allows_duplicates(&self) -> bool {
        matches!(
            self,
            Category::TrailingComma
                | Category::MisspelledKeyword
                | Category::InvalidAssignmentOperator
                | Category::InvalidLoopSyntax
                | Category::InvalidConditionalSyntax
        )
    }

    /// Informational sentinels carry no finding.
    pub fn is_informational(&self) -> bool {
        matches!(self, Category::NoSyntaxErrors)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single reported finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based source line, or 0 for whole-source findings.
    pub line: usize,
    /// Trimmed text of the offending line; absent for whole-source findings.
    #[serde(
        rename = "lineContent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub line_content: Option<String>,
    #[serde(rename = "msg")]
    pub category: Category,
    pub desc: String,
}

impl Diagnostic {
    /// Create a finding anchored to a source line.
    pub fn on_line(line: usize, content: &str, category: Category, desc: String) -> Self {
        Self {
            line,
            line_content: Some(content.trim().to_string()),
            category,
            desc,
        }
    }

    /// Create a whole-source finding (line 0, no line content).
    pub fn whole_source(category: Category, desc: String) -> Self {
        Self {
            line: 0,
            line_content: None,
            category,
            desc,
        }
    }

    /// Dedup key: at most one finding per (line, category) per analysis.
    pub fn key(&self) -> (usize, Category) {
        (self.line, self.category)
    }
}

/// Ordered collector enforcing the per-analysis dedup invariant.
///
/// Owned by a single `analyze` call; there is no cross-call state.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
    seen: HashSet<(usize, Category)>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding unless an identical `(line, msg)` pair was already
    /// recorded. Categories with `allows_duplicates` skip the check.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.category.allows_duplicates() || self.seen.insert(diagnostic.key()) {
            self.items.push(diagnostic);
        }
    }

    /// Append without touching the dedup set. Reserved for the few paths the
    /// dedup invariant explicitly does not cover.
    pub fn push_unchecked(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.items.iter().any(|d| d.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
