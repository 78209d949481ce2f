//! Domain models for ccvalidator
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`IssuerRule`] - "Numbers starting with X and N digits long belong to Y"
//! - [`IssuerMatch`] - Outcome of an issuer lookup (matched rule or unknown)
//! - [`CandidateNumber`] - One input line, normalized and classified
//! - [`ValidationResult`] - The externally visible per-line result

mod candidate;
mod issuer;
mod result;

pub use candidate::CandidateNumber;
pub use issuer::{IssuerMatch, IssuerRule, RegistryError, UNKNOWN_ISSUER};
pub use result::{BatchSummary, ValidationResult};
