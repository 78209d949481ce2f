//! Number validator - classifies a single input line
//!
//! Normalizes the line, resolves the issuer, and runs the Luhn checksum only
//! when an issuer was found. Never fails: anything malformed comes back as
//! `Unknown` and invalid.

use log::trace;

use super::luhn;
use super::registry::IssuerRegistry;
use crate::core::models::{CandidateNumber, ValidationResult};

/// Remove all whitespace from a line
///
/// ```
/// use ccvalidator::core::services::normalize;
///
/// assert_eq!(normalize(" 5105 1051\t0510 5106 \r"), "5105105105105106");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validates lines against a fixed registry
#[derive(Debug, Clone, Copy)]
pub struct NumberValidator<'r> {
    registry: &'r IssuerRegistry,
}

impl<'r> NumberValidator<'r> {
    /// Create a validator backed by `registry`
    #[must_use]
    pub const fn new(registry: &'r IssuerRegistry) -> Self {
        Self { registry }
    }

    /// Classify a line, keeping the raw text alongside the outcome
    #[must_use]
    pub fn classify(&self, raw: &str) -> CandidateNumber<'r> {
        let normalized = normalize(raw);
        let issuer = self.registry.match_number(&normalized);
        let is_valid = issuer.is_known() && luhn::is_valid(&normalized);

        trace!("{raw:?} -> {issuer} {normalized} valid={is_valid}");

        CandidateNumber::new(raw, normalized, issuer, is_valid)
    }

    /// Classify a line and produce its result record
    #[must_use]
    pub fn evaluate(&self, raw: &str) -> ValidationResult {
        self.classify(raw).into_result()
    }
}
