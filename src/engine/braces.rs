//! Per-line rule battery for the brace/semicolon language family
//! (Java, JavaScript, C, C++).
//!
//! Rules are evaluated in a fixed order per line. Each rule reads the
//! current trimmed line (plus, for a few rules, the whole source or the
//! lookback window) and appends findings to the collector. The order is
//! documented by the body of [`check_line`] and only affects how findings
//! are sequenced in the output.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use super::arrays;
use crate::diagnostic::{Category, Diagnostic, Diagnostics};
use crate::language::Language;

/// Identifiers a bare line may consist of without being read as a
/// parenthesis-less call.
static COMMON_IDENTIFIERS: phf::Set<&'static str> = phf::phf_set! {
    "if", "while", "for", "switch", "return", "break", "continue",
    "main", "Test", "x", "a", "hello", "test", "System", "out", "println",
};

/// Common keyboard-slip variants of frequent keywords.
const MISSPELLED_KEYWORDS: &[&str] = &[
    "publc", "privat", "statc", "voi", "systm", "otput", "prntln", "lenght", "lengh",
];

/// Keywords that cannot name a variable. `int` is deliberately absent: a
/// leading `int` is a declaration, not an identifier.
const RESERVED_KEYWORDS: &[&str] = &[
    "class", "public", "private", "static", "void", "String", "if", "else", "for", "while",
    "return",
];

lazy_static! {
    /// Lines that legitimately end without `;`, `{`, or `}`.
    static ref SEMICOLON_SKIP: Vec<Regex> = vec![
        Regex::new(r"^\s*//").unwrap(),
        Regex::new(r"^\s*/\*").unwrap(),
        // middle and end of multi-line comments
        Regex::new(r"^\s*\*").unwrap(),
        Regex::new(r"^\s*(public|private|protected)\s+class").unwrap(),
        Regex::new(r"^\s*(if|while|for|else|try|catch|finally|switch)\s*\(").unwrap(),
        Regex::new(r"^\s*(else|try|finally)\s*$").unwrap(),
        Regex::new(r"^\s*case\s+").unwrap(),
        Regex::new(r"^\s*default\s*:").unwrap(),
        Regex::new(r"^\s*(import|package)").unwrap(),
    ];

    /// Shapes that read as statements and therefore want a terminator.
    static ref STATEMENT_SHAPES: Vec<Regex> = vec![
        Regex::new(r"^(int|float|double|String|char|boolean|long|short|byte|let|const|var)\s+\w+")
            .unwrap(),
        Regex::new(r"^\w+\s*=").unwrap(),
        Regex::new(r"^\w+\s*\(").unwrap(),
        Regex::new(r"^System\.").unwrap(),
        Regex::new(r"^console\.").unwrap(),
        Regex::new(r"^printf\s*\(").unwrap(),
        Regex::new(r"^return\s").unwrap(),
        Regex::new(r"^break\s*$").unwrap(),
        Regex::new(r"^continue\s*$").unwrap(),
        Regex::new(r"^\w+\s*\[.*\]\s*$").unwrap(),
        Regex::new(r"^\w+\s*\.\s*\w+").unwrap(),
    ];

    static ref TYPED_DECLARATION: Regex = Regex::new(
        r"^\s*(int|float|double|String|char|boolean|long|short|byte|let|const|var)\s+\w+\s*="
    )
    .unwrap();
    static ref DECL_KEYWORD_PREFIX: Regex = Regex::new(
        r"^\s*(int|float|double|String|char|boolean|long|short|byte|let|const|var)\s+"
    )
    .unwrap();
    static ref ASSIGN_LHS: Regex = Regex::new(r"^\s*(\w+)\s*=").unwrap();
    static ref DIGIT_LEADING_NAME: Regex = Regex::new(
        r"^\s*(?:int|float|double|String|char|boolean|long|short|byte|let|const|var)\s+(\d\w*)\s*="
    )
    .unwrap();
    static ref BARE_IDENTIFIER: Regex = Regex::new(r"^\s*[a-zA-Z_]\w*\s*$").unwrap();

    static ref MISSPELLED_RES: Vec<(&'static str, Regex)> = MISSPELLED_KEYWORDS
        .iter()
        .map(|kw| (*kw, Regex::new(&format!(r"\b{}\b", kw)).unwrap()))
        .collect();

    /// Per reserved keyword: the keyword-as-identifier shape and the typed
    /// declaration shape that legitimizes it.
    static ref RESERVED_RES: Vec<(&'static str, Regex, Regex)> = RESERVED_KEYWORDS
        .iter()
        .map(|kw| {
            (
                *kw,
                Regex::new(&format!(r"^\s*{}\s+\w+\s*=", kw)).unwrap(),
                Regex::new(&format!(
                    r"^\s*(int|float|double|String|char|boolean)\s+{}\s*=",
                    kw
                ))
                .unwrap(),
            )
        })
        .collect();
    static ref VALID_TYPED_DECL: Regex =
        Regex::new(r"^\s*(int|float|double|String|char|boolean)\s+\w+\s*=").unwrap();

    static ref DISALLOWED_CHARS: Regex =
        Regex::new(r"[^\w\s{}\[\]().;,+\-*/=!<>?@#%&|\\`~]").unwrap();

    static ref METHOD_SHAPE: Regex = Regex::new(r"\w+\s+\w+\s*\([^)]*\)").unwrap();
    static ref QUALIFIED_CALL: Regex = Regex::new(r"^\s*\w+\s*\.\s*\w+\s*\(").unwrap();
    static ref METHOD_WITH_BODY: Regex = Regex::new(r"\w+\s+\w+\s*\([^)]*\)\s*\{").unwrap();
    static ref VALID_SIGNATURE_PREFIX: Regex = Regex::new(
        r"^(public|private|protected|static)?\s*(int|float|double|String|char|boolean|void)\s+"
    )
    .unwrap();

    static ref FOR_THREE_CLAUSE: Regex = Regex::new(r"for\s*\([^)]*;[^)]*;[^)]*\)").unwrap();
    static ref IF_CONDITION: Regex = Regex::new(r"if\s*\([^)]+\)").unwrap();
    static ref PUBLIC_CLASS_NAME: Regex = Regex::new(r"public\s+class\s+(\w+)").unwrap();
    static ref SPACED_LOGICAL_OP: Regex = Regex::new(r"\s+(&&|\|\|)\s+").unwrap();

    static ref ANY_CALL: Regex = Regex::new(r"\w+\s*\(\s*[^)]*\s*\)").unwrap();
    static ref SINGLE_IDENT_CALL: Regex = Regex::new(r"\w+\s*\(\s*\w+\s*\)").unwrap();
    static ref PARAM_LIST: Regex = Regex::new(r"\(([^)]*)\)").unwrap();
    static ref EMPTY_CALL: Regex = Regex::new(r"\w+\s*\(\s*\)").unwrap();
    static ref DECL_OR_MODIFIER_PREFIX: Regex = Regex::new(
        r"^\s*(int|float|double|String|char|boolean|public|private|protected|static)\s+"
    )
    .unwrap();

    static ref STRING_INTO_NUMERIC: Regex = Regex::new(
        r#"^\s*(int|float|double|char|boolean)\s+(\w+)\s*=\s*"([^"]*)""#
    )
    .unwrap();

    static ref CAST_SHAPE: Regex = Regex::new(r"\(\s*\w+\s*\)\s*\w+").unwrap();
    static ref PRIMITIVE_CAST: Regex = Regex::new(r"\(\s*(int|float|double|String|char)\s*\)").unwrap();
    static ref CAST_THEN_CALL: Regex = Regex::new(r"\(\s*\w+\s*\)\s*\w+\s*\(").unwrap();
}

/// Run the whole battery over one non-blank line.
#[allow(clippy::too_many_arguments)]
pub(crate) fn check_line(
    diags: &mut Diagnostics,
    code: &str,
    lines: &[&str],
    idx: usize,
    trimmed: &str,
    language: Language,
    lookback: usize,
    file_name: Option<&str>,
) {
    let line_num = idx + 1;

    paren_balance(diags, line_num, trimmed);
    missing_semicolon(diags, line_num, trimmed, language);
    missing_declaration(diags, line_num, trimmed, language);
    invalid_variable_name(diags, line_num, trimmed, language);
    missing_call_parens(diags, line_num, trimmed);
    if language == Language::Java {
        missing_main(diags, code);
    }
    arrays::check_array_access(diags, lines, idx, trimmed, lookback);
    trailing_comma(diags, line_num, trimmed);
    misspelled_keyword(diags, line_num, trimmed);
    invalid_assignment_operator(diags, line_num, trimmed);
    missing_colon(diags, line_num, trimmed);
    if language == Language::Java {
        invalid_import(diags, line_num, trimmed);
    }
    invalid_method_declaration(diags, line_num, trimmed);
    reserved_keyword_identifier(diags, line_num, trimmed);
    unexpected_token(diags, line_num, trimmed);
    missing_return_type(diags, line_num, trimmed);
    invalid_loop_syntax(diags, line_num, trimmed);
    invalid_conditional_syntax(diags, line_num, trimmed);
    if language == Language::Java {
        class_name_mismatch(diags, code, file_name);
    }
    invalid_logical_operator(diags, line_num, trimmed);
    invalid_function_call(diags, line_num, trimmed);
    incorrect_parameter_list(diags, line_num, trimmed);
    extra_argument(diags, line_num, trimmed);
    type_mismatch(diags, line_num, trimmed, language);
    invalid_cast(diags, line_num, trimmed);
    null_dereference(diags, line_num, trimmed);
    quote_balance(diags, line_num, trimmed);
}

/// Per-line `(` / `)` balance. At most one of the two findings per line.
fn paren_balance(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    let open = trimmed.matches('(').count();
    let close = trimmed.matches(')').count();

    if open > close {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::UnclosedParenthesis,
            format!(
                "This line has {} more opening parenthesis '(' than closing ')'. Add the missing \
                 closing parenthesis to complete the expression. Fix: \"{})\" - Add the closing \
                 parenthesis.",
                open - close,
                trimmed
            ),
        ));
    } else if close > open {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::ExtraClosingParenthesis,
            format!(
                "Remove {} closing parenthesis or add matching opening parenthesis.",
                close - open
            ),
        ));
    }
}

/// A statement-shaped line that does not end in `;`, `{`, or `}`.
///
/// Lines matching neither the skip list nor a statement shape are left
/// unflagged: graceful non-detection, not an error.
fn missing_semicolon(diags: &mut Diagnostics, line_num: usize, trimmed: &str, language: Language) {
    if trimmed.ends_with(';') || trimmed.ends_with('{') || trimmed.ends_with('}') {
        return;
    }
    if SEMICOLON_SKIP.iter().any(|p| p.is_match(trimmed)) {
        return;
    }
    if STATEMENT_SHAPES.iter().any(|p| p.is_match(trimmed)) {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::MissingSemicolon,
            format!(
                "This line is missing a semicolon at the end. In {}, every statement must end \
                 with a semicolon. Fix: \"{};\" - Add the semicolon to complete the statement.",
                language.display_name(),
                trimmed
            ),
        ));
    }
}

/// Assignment to a name that was never declared with a type keyword.
fn missing_declaration(diags: &mut Diagnostics, line_num: usize, trimmed: &str, language: Language) {
    if !trimmed.contains('=') || TYPED_DECLARATION.is_match(trimmed) {
        return;
    }
    let Some(caps) = ASSIGN_LHS.captures(trimmed) else {
        return;
    };
    let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    if matches!(
        name,
        "if" | "while" | "for" | "switch" | "return" | "System" | "console"
    ) {
        return;
    }

    let rhs = trimmed
        .find('=')
        .map(|p| trimmed[p + 1..].trim())
        .unwrap_or("");
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::MissingVariableDeclaration,
        format!(
            "Variable '{}' is being used without being declared first. In {}, you must declare \
             variables before using them. Fix: \"int {} = {}\" - Add the variable type before \
             the variable name.",
            name,
            language.display_name(),
            name,
            rhs
        ),
    ));
}

/// Declared variable whose name starts with a digit.
fn invalid_variable_name(
    diags: &mut Diagnostics,
    line_num: usize,
    trimmed: &str,
    language: Language,
) {
    let Some(caps) = DIGIT_LEADING_NAME.captures(trimmed) else {
        return;
    };
    let name = &caps[1];
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::InvalidVariableName,
        format!(
            "Variable names cannot start with numbers in {}. The name '{}' starts with a digit \
             which is invalid. Fix: Use a name starting with a letter, like 'var{}' or \
             'number{}'.",
            language.display_name(),
            name,
            name,
            name
        ),
    ));
}

/// A lone identifier on its own line that looks like a call without parens.
fn missing_call_parens(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if !BARE_IDENTIFIER.is_match(trimmed)
        || trimmed.contains(';')
        || trimmed.contains('{')
        || trimmed.contains("class")
        || trimmed.contains("public")
        || trimmed.contains("private")
        || trimmed.contains("static")
        || trimmed.contains('=')
        || DECL_KEYWORD_PREFIX.is_match(trimmed)
        || trimmed.contains('.')
        || trimmed.contains('"')
        || trimmed.contains('\'')
        || COMMON_IDENTIFIERS.contains(trimmed)
    {
        return;
    }
    // Single lowercase letters read as loop variables, not calls.
    if trimmed.len() == 1 && trimmed.chars().all(|c| c.is_ascii_lowercase()) {
        return;
    }
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::MissingFunctionParentheses,
        format!(
            "This looks like a function call but is missing parentheses. If '{}' is a function, \
             add parentheses: \"{}()\". If it's a variable, this error should not appear.",
            trimmed, trimmed
        ),
    ));
}

/// Java sources declaring a public class but no entry point.
fn missing_main(diags: &mut Diagnostics, code: &str) {
    if code.contains("public class") && !code.contains("public static void main") {
        diags.push(Diagnostic::whole_source(
            Category::MissingMainMethod,
            "Java programs need a main method: \"public static void main(String[] args)\" to run."
                .to_string(),
        ));
    }
}

/// `,}` / `,]` / `,)` on a line. May repeat per line.
fn trailing_comma(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    let closer = if trimmed.contains(",}") {
        '}'
    } else if trimmed.contains(",]") {
        ']'
    } else if trimmed.contains(",)") {
        ')'
    } else {
        return;
    };
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::TrailingComma,
        format!("Remove the trailing comma before {}.", closer),
    ));
}

/// Word-boundary match against the typo dictionary. May repeat per line.
fn misspelled_keyword(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    for (keyword, re) in MISSPELLED_RES.iter() {
        if re.is_match(trimmed) {
            diags.push(Diagnostic::on_line(
                line_num,
                trimmed,
                Category::MisspelledKeyword,
                format!(
                    "Keyword \"{}\" appears to be misspelled. Check the correct spelling.",
                    keyword
                ),
            ));
        }
    }
}

/// `===` / `!==` are illegal under the Java/C-family lens. May repeat.
fn invalid_assignment_operator(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if !trimmed.contains("===") && !trimmed.contains("!==") {
        return;
    }
    let op = if trimmed.contains("===") { "===" } else { "!==" };
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::InvalidAssignmentOperator,
        format!(
            "Use '==' for comparison or '=' for assignment. '{}' is not a valid assignment \
             operator.",
            op
        ),
    ));
}

/// A `case` without `:`, or a ternary `?` without `:`.
fn missing_colon(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    let case_without_colon = trimmed.contains("case") && !trimmed.contains(':');
    let ternary_without_colon = trimmed.contains('?') && !trimmed.contains(':');
    if case_without_colon || ternary_without_colon {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::MissingColon,
            "This statement requires a colon (:).".to_string(),
        ));
    }
}

/// Java import lines must end in a semicolon.
fn invalid_import(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if trimmed.contains("import") && !trimmed.ends_with(';') {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::InvalidImportStatement,
            format!("Import statements must end with semicolon: \"{}\"", trimmed),
        ));
    }
}

/// `word word(...)` with neither a body nor a terminator.
fn invalid_method_declaration(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if !METHOD_SHAPE.is_match(trimmed) || trimmed.contains('{') || trimmed.ends_with(';') {
        return;
    }
    // Calls like System.out.println(..) share the shape; leave them alone.
    if trimmed.contains("System.") || trimmed.contains("console.") || QUALIFIED_CALL.is_match(trimmed)
    {
        return;
    }
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::InvalidMethodDeclaration,
        "Method declarations must end with ';' or have a body with '{'.".to_string(),
    ));
}

/// `<reservedKeyword> name =` where the keyword is not acting as a type.
fn reserved_keyword_identifier(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    for (keyword, as_identifier, typed_with_keyword) in RESERVED_RES.iter() {
        if as_identifier.is_match(trimmed)
            && !typed_with_keyword.is_match(trimmed)
            && !VALID_TYPED_DECL.is_match(trimmed)
        {
            diags.push(Diagnostic::on_line(
                line_num,
                trimmed,
                Category::ReservedKeywordAsIdentifier,
                format!(
                    "\"{}\" is a reserved keyword and cannot be used as a variable name.",
                    keyword
                ),
            ));
        }
    }
}

/// Characters outside the permitted set, unless the line carries a string
/// literal or is a comment.
fn unexpected_token(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    let found: Vec<&str> = DISALLOWED_CHARS
        .find_iter(trimmed)
        .map(|m| m.as_str())
        .collect();
    if found.is_empty() {
        return;
    }
    if trimmed.contains('"')
        || trimmed.contains('\'')
        || trimmed.starts_with("//")
        || trimmed.starts_with("/*")
    {
        return;
    }
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::UnexpectedToken,
        format!(
            "Invalid character(s) found: {}. Remove these special characters.",
            found.join(", ")
        ),
    ));
}

/// A method header with a body but no recognizable return type.
fn missing_return_type(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if !METHOD_WITH_BODY.is_match(trimmed) || VALID_SIGNATURE_PREFIX.is_match(trimmed) {
        return;
    }
    if trimmed.contains("System.")
        || trimmed.contains("console.")
        || QUALIFIED_CALL.is_match(trimmed)
        || trimmed.contains("main")
    {
        return;
    }
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::MissingReturnType,
        "Method declarations must specify a return type.".to_string(),
    ));
}

/// A `for` without the three-clause header. May repeat per line.
fn invalid_loop_syntax(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if trimmed.contains("for") && !FOR_THREE_CLAUSE.is_match(trimmed) {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::InvalidLoopSyntax,
            "For loop syntax: \"for (initialization; condition; increment)\"".to_string(),
        ));
    }
}

/// An `if` without a parenthesized condition. May repeat per line.
fn invalid_conditional_syntax(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if trimmed.contains("if") && !IF_CONDITION.is_match(trimmed) {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::InvalidConditionalSyntax,
            "If statements require conditions in parentheses: \"if (condition)\"".to_string(),
        ));
    }
}

/// Java: the public class name must match the file it lives in. Only
/// applies when the caller supplied a file name.
fn class_name_mismatch(diags: &mut Diagnostics, code: &str, file_name: Option<&str>) {
    let Some(file_name) = file_name else {
        return;
    };
    let Some(caps) = PUBLIC_CLASS_NAME.captures(code) else {
        return;
    };
    let class_name = &caps[1];
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    if stem != class_name {
        diags.push(Diagnostic::whole_source(
            Category::FileNameClassNameMismatch,
            format!(
                "Java file should be named \"{}.java\" to match the public class name.",
                class_name
            ),
        ));
    }
}

/// `&&` / `||` without surrounding whitespace, outside quoted lines.
fn invalid_logical_operator(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if (!trimmed.contains("&&") && !trimmed.contains("||")) || SPACED_LOGICAL_OP.is_match(trimmed)
    {
        return;
    }
    if trimmed.contains('"') || trimmed.contains('\'') {
        return;
    }
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::InvalidLogicalOperator,
        "Logical operators require spaces around them.".to_string(),
    ));
}

/// Single-identifier-argument calls outside the known print forms.
fn invalid_function_call(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if !ANY_CALL.is_match(trimmed) || !SINGLE_IDENT_CALL.is_match(trimmed) {
        return;
    }
    if trimmed.contains("System.out.println")
        || trimmed.contains("console.log")
        || trimmed.contains("printf")
    {
        return;
    }
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::InvalidFunctionCall,
        "Function calls should have proper parameter syntax.".to_string(),
    ));
}

/// Doubled commas inside a parameter list.
fn incorrect_parameter_list(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if !ANY_CALL.is_match(trimmed) || !trimmed.contains(',') {
        return;
    }
    let Some(caps) = PARAM_LIST.captures(trimmed) else {
        return;
    };
    if caps[1].contains(",,") {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::IncorrectParameterList,
            "Double commas found in parameter list. Remove extra comma.".to_string(),
        ));
    }
}

/// Empty-parens call on a line that still carries a comma.
fn extra_argument(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if !EMPTY_CALL.is_match(trimmed) || !trimmed.contains(',') {
        return;
    }
    if DECL_OR_MODIFIER_PREFIX.is_match(trimmed) {
        return;
    }
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::ExtraArgument,
        "Function call has empty parentheses but arguments are provided.".to_string(),
    ));
}

/// Numeric-typed declaration initialized with a quoted string.
fn type_mismatch(diags: &mut Diagnostics, line_num: usize, trimmed: &str, language: Language) {
    let Some(caps) = STRING_INTO_NUMERIC.captures(trimmed) else {
        return;
    };
    let var_type = &caps[1];
    let var_name = &caps[2];
    let string_value = &caps[3];
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::TypeMismatch,
        format!(
            "You cannot assign a string value \"{}\" to a {} variable '{}'. In {}, {} can only \
             hold numeric values, not text. Fix: Change the variable type to 'String': \
             \"String {} = \\\"{}\\\"\" or use a numeric value: \"{} {} = 0\"",
            string_value,
            var_type,
            var_name,
            language.display_name(),
            var_type,
            var_name,
            string_value,
            var_type,
            var_name
        ),
    ));
}

/// `(word) word` that is neither a primitive cast nor a call.
fn invalid_cast(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if !CAST_SHAPE.is_match(trimmed) || PRIMITIVE_CAST.is_match(trimmed) {
        return;
    }
    if CAST_THEN_CALL.is_match(trimmed)
        || trimmed.contains("System.")
        || trimmed.contains("console.")
    {
        return;
    }
    diags.push(Diagnostic::on_line(
        line_num,
        trimmed,
        Category::InvalidCastingSyntax,
        "Invalid casting syntax. Use valid types: (int), (String), etc.".to_string(),
    ));
}

/// Literal `null.` / `NULL.` dereference.
fn null_dereference(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    if trimmed.contains("null.") || trimmed.contains("NULL.") {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::NullPointerAccess,
            "You're accessing a property on a null value. This will cause a null pointer \
             exception. Check if the object is null before accessing its properties."
                .to_string(),
        ));
    }
}

/// Odd quote counts on the line. The gate is computed once before either
/// finding is appended, so a line odd in both kinds reports both.
fn quote_balance(diags: &mut Diagnostics, line_num: usize, trimmed: &str) {
    let single_quotes = trimmed.matches('\'').count();
    let double_quotes = trimmed.matches('"').count();

    let has_quote_finding = diags.iter().any(|d| {
        d.line == line_num
            && matches!(
                d.category,
                Category::UnclosedSingleQuote | Category::UnclosedStringLiteral
            )
    });

    if single_quotes % 2 != 0 && !has_quote_finding {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::UnclosedSingleQuote,
            format!(
                "Add a closing single quote: \"{}'\" - Make sure every ' has a matching '.",
                trimmed
            ),
        ));
    }
    if double_quotes % 2 != 0 && !has_quote_finding {
        diags.push(Diagnostic::on_line(
            line_num,
            trimmed,
            Category::UnclosedStringLiteral,
            format!(
                "This string literal is missing a closing quote. The string starts with a quote \
                 but doesn't end with one. Fix: \"{}\\\"\" - Add the missing closing quote to \
                 complete the string.",
                trimmed
            ),
        ));
    }
}
