//! Per-line validation results and batch totals

use serde::{Deserialize, Serialize};

use super::issuer::UNKNOWN_ISSUER;

/// Classification of one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Issuer name, or `Unknown`
    pub issuer: String,
    /// The normalized number (whitespace removed)
    pub number: String,
    /// Whether the number passed the Luhn checksum
    pub valid: bool,
}

impl ValidationResult {
    /// Whether no registered issuer claimed this number
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.issuer == UNKNOWN_ISSUER
    }
}

/// Counts over a batch of results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of lines processed
    pub total: usize,
    /// Lines with a known issuer and a passing checksum
    pub valid: usize,
    /// Lines that failed, including unknown issuers
    pub invalid: usize,
    /// Lines no issuer claimed
    pub unknown: usize,
}

impl BatchSummary {
    /// Tally a slice of results
    #[must_use]
    pub fn from_results(results: &[ValidationResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            summary.total += 1;
            if result.valid {
                summary.valid += 1;
            } else {
                summary.invalid += 1;
            }
            if result.is_unknown() {
                summary.unknown += 1;
            }
            summary
        })
    }

    /// Whether every line was valid
    #[must_use]
    pub const fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}
