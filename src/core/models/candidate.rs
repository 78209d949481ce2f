//! A single input line after classification

use super::issuer::IssuerMatch;
use super::result::ValidationResult;

/// One input line, normalized and classified
///
/// Built once by the validator; the issuer and validity never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateNumber<'a> {
    raw: String,
    normalized: String,
    issuer: IssuerMatch<'a>,
    is_valid: bool,
}

impl<'a> CandidateNumber<'a> {
    /// Assemble a classified candidate
    ///
    /// Validity is forced to `false` when the issuer is unknown.
    #[must_use]
    pub fn new(raw: impl Into<String>, normalized: String, issuer: IssuerMatch<'a>, is_valid: bool) -> Self {
        Self {
            raw: raw.into(),
            normalized,
            issuer,
            is_valid: is_valid && issuer.is_known(),
        }
    }

    /// The line exactly as it was read
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The line with all whitespace removed
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The issuer lookup outcome
    #[must_use]
    pub const fn issuer(&self) -> IssuerMatch<'a> {
        self.issuer
    }

    /// Whether the number passed the checksum
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Convert into the externally visible result
    #[must_use]
    pub fn into_result(self) -> ValidationResult {
        ValidationResult {
            issuer: self.issuer.name().to_string(),
            number: self.normalized,
            valid: self.is_valid,
        }
    }
}
