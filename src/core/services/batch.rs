//! Batch processor - validates multi-line text
//!
//! Every line produces exactly one result, in input order. Blank lines are
//! kept and come back as `Unknown`. A trailing line terminator does not start
//! an extra empty line, and `\r\n` endings are accepted.

use log::debug;

use super::registry::IssuerRegistry;
use super::validator::NumberValidator;
use crate::core::models::{BatchSummary, ValidationResult};

/// Validate every line of `text` against `registry`
#[must_use]
pub fn process_batch(registry: &IssuerRegistry, text: &str) -> Vec<ValidationResult> {
    let validator = NumberValidator::new(registry);
    let results: Vec<ValidationResult> = text.lines().map(|line| validator.evaluate(line)).collect();

    let summary = BatchSummary::from_results(&results);
    debug!(
        "Processed {} line(s): {} valid, {} invalid ({} unknown)",
        summary.total, summary.valid, summary.invalid, summary.unknown
    );

    results
}
