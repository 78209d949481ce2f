//! Issuer rules and lookup outcomes
//!
//! An [`IssuerRule`] describes one card network: the digit prefixes its
//! numbers start with and the exact lengths they come in. Prefixes are
//! compared as strings, so prefix `4` matches every number whose first
//! character is `4`, and prefix `34` matches numbers beginning with `34`.
//!
//! # Examples
//!
//! ```
//! use ccvalidator::core::models::IssuerRule;
//!
//! let amex = IssuerRule::new("AMEX", [34, 37], [15]).unwrap();
//! assert!(amex.matches("378282246310005"));
//! assert!(!amex.matches("378282246310"));
//!
//! // Ranges expand into one prefix per integer
//! let mastercard = IssuerRule::new("MasterCard", 51..=55, [16]).unwrap();
//! assert_eq!(mastercard.prefixes().len(), 5);
//! ```

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

/// Display name used for numbers no registered issuer claims
pub const UNKNOWN_ISSUER: &str = "Unknown";

/// Errors that can occur when defining an issuer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Issuer name was empty or whitespace
    #[error("issuer name must not be empty")]
    EmptyName,

    /// Issuer was given no prefixes at all
    #[error("issuer {0} has no prefixes")]
    NoPrefixes(String),

    /// A prefix was empty or contained something other than ASCII digits
    #[error("issuer {issuer} has invalid prefix {prefix:?}: prefixes must be non-empty digit strings")]
    InvalidPrefix {
        /// Issuer being defined
        issuer: String,
        /// Offending prefix
        prefix: String,
    },

    /// Issuer was given no accepted lengths
    #[error("issuer {0} has no accepted lengths")]
    NoLengths(String),

    /// An accepted length of zero digits
    #[error("issuer {0} has a zero length; lengths must be at least 1")]
    ZeroLength(String),
}

/// A card network identified by prefix and length
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuerRule {
    /// Network name, e.g. `VISA`
    name: String,

    /// Accepted leading digit strings, in registration order
    prefixes: Vec<String>,

    /// Accepted digit counts
    lengths: BTreeSet<usize>,
}

impl IssuerRule {
    /// Create a validated issuer rule
    ///
    /// Prefixes may be given as integers or digit strings; anything that
    /// implements [`ToString`] is accepted, including integer ranges.
    /// Duplicate prefixes are dropped, keeping the first occurrence.
    pub fn new<P, L>(name: impl Into<String>, prefixes: P, lengths: L) -> Result<Self, RegistryError>
    where
        P: IntoIterator,
        P::Item: ToString,
        L: IntoIterator<Item = usize>,
    {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let mut unique = Vec::new();
        for prefix in prefixes {
            let prefix = prefix.to_string();
            if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
                return Err(RegistryError::InvalidPrefix {
                    issuer: name,
                    prefix,
                });
            }
            if !unique.contains(&prefix) {
                unique.push(prefix);
            }
        }
        if unique.is_empty() {
            return Err(RegistryError::NoPrefixes(name));
        }

        let lengths: BTreeSet<usize> = lengths.into_iter().collect();
        if lengths.is_empty() {
            return Err(RegistryError::NoLengths(name));
        }
        if lengths.contains(&0) {
            return Err(RegistryError::ZeroLength(name));
        }

        Ok(Self {
            name,
            prefixes: unique,
            lengths,
        })
    }

    /// Build a rule from trusted static data
    pub(crate) fn from_static(name: &str, prefixes: &[&str], lengths: &[usize]) -> Self {
        Self {
            name: name.to_string(),
            prefixes: prefixes.iter().map(ToString::to_string).collect(),
            lengths: lengths.iter().copied().collect(),
        }
    }

    /// Network name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepted prefixes, in registration order
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Accepted lengths, ascending
    #[must_use]
    pub const fn lengths(&self) -> &BTreeSet<usize> {
        &self.lengths
    }

    /// Check whether a normalized number has an accepted length and prefix
    ///
    /// This does not check that `number` is numeric; the registry does that
    /// once before consulting any rule.
    #[must_use]
    pub fn matches(&self, number: &str) -> bool {
        self.lengths.contains(&number.len())
            && self.prefixes.iter().any(|prefix| number.starts_with(prefix.as_str()))
    }
}

impl std::fmt::Display for IssuerRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Outcome of looking a number up in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuerMatch<'a> {
    /// The first registered rule that accepts the number
    Matched(&'a IssuerRule),
    /// No rule accepts the number, or it is not a canonical digit string
    Unknown,
}

impl<'a> IssuerMatch<'a> {
    /// Name to report: the rule's name, or [`UNKNOWN_ISSUER`]
    #[must_use]
    pub fn name(self) -> &'a str {
        match self {
            Self::Matched(rule) => rule.name(),
            Self::Unknown => UNKNOWN_ISSUER,
        }
    }

    /// Whether an issuer was found
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// The matched rule, if any
    #[must_use]
    pub const fn rule(self) -> Option<&'a IssuerRule> {
        match self {
            Self::Matched(rule) => Some(rule),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for IssuerMatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
