//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{BatchSummary, IssuerRule, ValidationResult};

/// Width the `issuer: number` label is padded to in human output
pub const LABEL_WIDTH: usize = 28;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// The `issuer: number` part of a display line, unpadded
fn label(result: &ValidationResult) -> String {
    format!("{}: {}", result.issuer, result.number)
}

const fn status(valid: bool) -> &'static str {
    if valid { " (valid)" } else { " (invalid)" }
}

/// Format a result as a plain display line
///
/// ```
/// use ccvalidator::core::models::ValidationResult;
/// use ccvalidator::output::format_line;
///
/// let result = ValidationResult {
///     issuer: "VISA".to_string(),
///     number: "4111111111111111".to_string(),
///     valid: true,
/// };
/// assert_eq!(format_line(&result), "VISA: 4111111111111111       (valid)");
/// ```
#[must_use]
pub fn format_line(result: &ValidationResult) -> String {
    let label = label(result);
    format!("{label:<LABEL_WIDTH$}{}", status(result.valid))
}

/// Results of a `check` run
#[derive(Debug, Serialize)]
pub struct BatchReport {
    /// One result per input line, in input order
    pub results: Vec<ValidationResult>,
    /// Totals over `results`
    pub summary: BatchSummary,
}

impl BatchReport {
    /// Wrap results and tally them
    #[must_use]
    pub fn new(results: Vec<ValidationResult>) -> Self {
        let summary = BatchSummary::from_results(&results);
        Self { results, summary }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for result in &self.results {
            let label = label(result);
            let status = if result.valid {
                status(true).green()
            } else {
                status(false).red()
            };
            println!("{label:<LABEL_WIDTH$}{status}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Active issuers, in registration order
#[derive(Debug, Serialize)]
pub struct IssuerListResult {
    /// Registered issuers
    pub issuers: Vec<IssuerRule>,
}

impl IssuerListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.issuers.is_empty() {
            println!("No issuers registered.");
            return;
        }

        println!("Issuers:\n");
        for issuer in &self.issuers {
            let lengths: Vec<String> = issuer.lengths().iter().map(ToString::to_string).collect();
            println!("  {}", issuer.name().bold());
            println!("    prefixes: {}", issuer.prefixes().join(", "));
            println!("    lengths:  {}\n", lengths.join(", "));
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Outcome of the built-in self test
#[derive(Debug, Serialize)]
pub struct SelfTestReport {
    /// Whether every line matched
    pub passed: bool,
    /// Lines the fixture should produce
    pub expected: Vec<String>,
    /// Lines actually produced
    pub actual: Vec<String>,
}

impl SelfTestReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.passed {
            println!("{}", "TEST PASSED!".green());
            return;
        }

        println!("{}\n", "TEST FAILED:".red());
        println!("Expected:\n{}\n", self.expected.join("\n"));
        println!("Got:\n{}", self.actual.join("\n"));
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
