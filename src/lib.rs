//! Snagcheck - heuristic syntax checker.
//!
//! Snagcheck accepts a block of source text in an unspecified programming
//! language, guesses which language it is written in, and produces
//! human-readable diagnostics for likely syntax problems - without building
//! an AST or running a real compiler front end. It is a best-effort static
//! checker: fast, and intentionally tolerant of false positives and
//! negatives in exchange for simplicity.
//!
//! # Architecture
//!
//! - `language`: signature-based language classifier
//! - `engine`: the diagnostic rule engine (per-line batteries, lookback
//!   array-bounds check, whole-source brace balance, degraded mode)
//! - `diagnostic`: the finding model and dedup collector
//! - `config`: optional YAML configuration
//! - `report`: output formatting (pretty, JSON)
//! - `cli`: command-line front end
//!
//! # Example
//!
//! ```
//! use snagcheck::{analyze, Category};
//!
//! let diags = analyze("let x = 5");
//! assert_eq!(diags[0].category, Category::MissingSemicolon);
//! ```

pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod language;
pub mod report;

pub use config::Config;
pub use diagnostic::{Category, Diagnostic, Diagnostics};
pub use engine::{analyze, analyze_minimal, find_declared_size, Analyzer};
pub use language::{classify, Language};
