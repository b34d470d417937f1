//! Output formatting for snagcheck results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption. A single-source
//!   run serializes as an object with one `errors` array so any transport
//!   can forward it verbatim; directory runs serialize as an array of
//!   per-file reports.

use colored::*;
use serde::Serialize;

use crate::diagnostic::Diagnostic;
use crate::language::Language;

/// Diagnostics for one analyzed source, tagged with where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub language: Language,
    pub errors: Vec<Diagnostic>,
}

impl FileReport {
    /// Findings that describe an actual problem (sentinels excluded).
    pub fn finding_count(&self) -> usize {
        self.errors
            .iter()
            .filter(|d| !d.category.is_informational())
            .count()
    }
}

/// Single-source JSON body: the request/response boundary shape.
#[derive(Serialize)]
struct JsonReport<'a> {
    errors: &'a [Diagnostic],
}

/// Write a single-source result in JSON format.
pub fn write_json_single(report: &FileReport) -> anyhow::Result<()> {
    let body = JsonReport {
        errors: &report.errors,
    };
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

/// Write multi-file results in JSON format.
pub fn write_json_many(reports: &[FileReport]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

/// Write results in pretty (human-readable) format.
pub fn write_pretty(reports: &[FileReport]) {
    // Header
    println!();
    print!("  ");
    print!("{}", "snagcheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let mut total_findings = 0usize;

    for report in reports {
        total_findings += report.finding_count();

        print!("  {}", report.file.blue());
        println!("  {}", format!("({})", report.language).dimmed());

        for d in &report.errors {
            write_diagnostic(d);
        }
        println!();
    }

    write_summary(reports.len(), total_findings);
    println!();
}

fn write_diagnostic(d: &Diagnostic) {
    if d.category.is_informational() {
        println!("    {} {}", "✓".green(), d.category.as_str().green());
        return;
    }

    if d.line > 0 {
        print!("    {}", format!("{:>4}", d.line).dimmed());
    } else {
        print!("    {}", format!("{:>4}", "-").dimmed());
    }
    println!("  {}", d.category.as_str().yellow().bold());

    if let Some(content) = &d.line_content {
        println!("          {}", format!("> {}", content).dimmed());
    }
    println!("          {}", d.desc);
}

fn write_summary(files: usize, findings: usize) {
    let plural = if files != 1 { "s" } else { "" };
    if findings == 0 {
        println!(
            "  {} {} file{} checked, no syntax problems found",
            "✓".green(),
            files,
            plural
        );
    } else {
        println!(
            "  {} {} potential problem(s) across {} file{}",
            "✗".red(),
            findings.to_string().red().bold(),
            files,
            plural
        );
    }
}
