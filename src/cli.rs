//! Command-line interface for snagcheck.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::{self, Config};
use crate::engine::Analyzer;
use crate::language::{classify, Language};
use crate::report::{self, FileReport};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// File extensions picked up when scanning a directory.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "java", "py", "js", "mjs", "jsx", "c", "h", "cpp", "cc", "hpp",
];

/// Heuristic syntax checker - guesses the language and flags likely snags.
///
/// Snagcheck inspects a block of source text, guesses which language it is
/// written in, and reports human-readable diagnostics for likely syntax
/// problems. It is fast and best-effort: no AST, no compiler front end, and
/// intentionally tolerant of false positives in exchange for speed.
#[derive(Parser)]
#[command(name = "snagcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a file, a directory, or stdin for likely syntax problems
    #[command(visible_alias = "lint")]
    Check(CheckArgs),
}

/// Arguments for the check command.
#[derive(Parser)]
pub struct CheckArgs {
    /// Path to check (file or directory), or "-" for stdin
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Force the language instead of guessing from the source
    #[arg(short, long)]
    pub language: Option<String>,

    /// Lines searched backwards for array declarations
    #[arg(long)]
    pub lookback: Option<usize>,

    /// Glob patterns to exclude when scanning a directory
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Exit non-zero when findings are reported
    #[arg(long)]
    pub fail_on_findings: bool,
}

/// Resolve the effective config: file (explicit or discovered) plus CLI
/// overrides.
fn effective_config(args: &CheckArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::parse_file(path)?,
        None => match config::discover() {
            Some(path) => Config::parse_file(&path)?,
            None => Config::default(),
        },
    };

    if let Some(format) = &args.format {
        config.format = format.clone();
    }
    if let Some(lookback) = args.lookback {
        config.lookback = lookback;
    }
    if args.fail_on_findings {
        config.fail_on_findings = true;
    }

    config.validate()?;
    Ok(config)
}

/// Build the exclusion matcher from --exclude globs.
fn build_exclude_set(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid exclude pattern {:?}: {}", pattern, e))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Collect source files under a directory, sorted for deterministic output.
fn collect_files(root: &Path, exclude: &GlobSet) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            // The root itself is always walked, whatever it is named.
            if e.depth() == 0 {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            // Skip hidden and dependency directories
            if e.file_type().is_dir()
                && (name.starts_with('.')
                    || name == "vendor"
                    || name == "node_modules"
                    || name == "target"
                    || name == "__pycache__")
            {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !SUPPORTED_EXTENSIONS.contains(&ext) {
            continue;
        }
        if exclude.is_match(path) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Analyze one source string into a report.
fn analyze_source(
    source: &str,
    display: &str,
    file_name: Option<&str>,
    config: &Config,
    forced: Option<Language>,
) -> FileReport {
    let language = forced.unwrap_or_else(|| classify(source));

    let mut analyzer = Analyzer::new()
        .with_lookback(config.lookback)
        .with_language(language);
    if let Some(name) = file_name {
        analyzer = analyzer.with_file_name(name);
    }

    FileReport {
        file: display.to_string(),
        language,
        errors: analyzer.analyze(source),
    }
}

/// Run the check command.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<i32> {
    let config = effective_config(args)?;

    let forced = match &args.language {
        Some(s) => Some(Language::from_str(s).map_err(|e| anyhow::anyhow!(e))?),
        None => None,
    };

    // Gather reports
    let (reports, single) = if args.path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        (
            vec![analyze_source(&source, "<stdin>", None, &config, forced)],
            true,
        )
    } else {
        let metadata = std::fs::metadata(&args.path)
            .map_err(|e| anyhow::anyhow!("cannot access path {:?}: {}", args.path, e))?;

        if metadata.is_dir() {
            let exclude = build_exclude_set(&args.exclude)?;
            let files = collect_files(&args.path, &exclude)?;
            if files.is_empty() {
                eprintln!("Warning: no files to scan");
                return Ok(EXIT_SUCCESS);
            }

            // Each analysis is independent; scan files in parallel and keep
            // the sorted order of the collection.
            let reports: Vec<FileReport> = files
                .par_iter()
                .filter_map(|path| match std::fs::read_to_string(path) {
                    Ok(source) => {
                        let display = path.to_string_lossy().to_string();
                        let name = path.file_name().and_then(|n| n.to_str());
                        Some(analyze_source(&source, &display, name, &config, forced))
                    }
                    Err(e) => {
                        eprintln!("Warning: skipping {}: {}", path.display(), e);
                        None
                    }
                })
                .collect();
            (reports, false)
        } else {
            let source = std::fs::read_to_string(&args.path)?;
            let display = args.path.to_string_lossy().to_string();
            let name = args.path.file_name().and_then(|n| n.to_str());
            (
                vec![analyze_source(&source, &display, name, &config, forced)],
                true,
            )
        }
    };

    // Output
    match config.format.as_str() {
        "json" => {
            if single {
                report::write_json_single(&reports[0])?;
            } else {
                report::write_json_many(&reports)?;
            }
        }
        _ => report::write_pretty(&reports),
    }

    let has_findings = reports.iter().any(|r| r.finding_count() > 0);
    if config.fail_on_findings && has_findings {
        Ok(EXIT_FINDINGS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_files_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("b.java"), "public class B {}").unwrap();
        std::fs::write(temp.path().join("a.py"), "x = 1").unwrap();
        std::fs::write(temp.path().join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir(temp.path().join("node_modules")).unwrap();
        std::fs::write(temp.path().join("node_modules").join("dep.js"), "x").unwrap();

        let exclude = build_exclude_set(&[]).unwrap();
        let files = collect_files(temp.path(), &exclude).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.py", "b.java"]);
    }

    #[test]
    fn test_collect_files_respects_excludes() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("keep.js"), "let x = 1;").unwrap();
        std::fs::write(temp.path().join("skip.js"), "let y = 2;").unwrap();

        let exclude = build_exclude_set(&["**/skip.js".to_string()]).unwrap();
        let files = collect_files(temp.path(), &exclude).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.js"));
    }

    #[test]
    fn test_invalid_exclude_pattern_is_an_error() {
        assert!(build_exclude_set(&["[".to_string()]).is_err());
    }

    #[test]
    fn test_analyze_source_uses_forced_language() {
        let config = Config::default();
        let report = analyze_source("if x:\nprint(x)", "<stdin>", None, &config, Some(Language::Python));
        assert_eq!(report.language, Language::Python);
        assert!(report
            .errors
            .iter()
            .any(|d| d.category == crate::diagnostic::Category::MissingIndentation));
    }

    #[test]
    fn test_analyze_source_classifies_when_not_forced() {
        let config = Config::default();
        let report = analyze_source("let x = 5;", "f.js", Some("f.js"), &config, None);
        assert_eq!(report.language, Language::Javascript);
        assert_eq!(report.finding_count(), 0);
    }
}
