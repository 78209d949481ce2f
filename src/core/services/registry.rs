//! Issuer registry - resolves a number to the first issuer that accepts it
//!
//! The registry is built once at startup and passed explicitly to the
//! validator. Registration order is significant: when more than one rule
//! accepts a number, the earliest registered one wins.

use log::debug;

use crate::core::models::{IssuerMatch, IssuerRule, RegistryError};

/// Built-in issuers as `(name, prefixes, lengths)`, in registration order
pub const DEFAULT_ISSUERS: &[(&str, &[&str], &[usize])] = &[
    ("AMEX", &["34", "37"], &[15]),
    ("Discover", &["6011"], &[16]),
    ("MasterCard", &["51", "52", "53", "54", "55"], &[16]),
    ("VISA", &["4"], &[13, 16]),
];

/// Ordered collection of issuer rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuerRegistry {
    rules: Vec<IssuerRule>,
}

impl IssuerRegistry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry holding the built-in issuers
    #[must_use]
    pub fn with_defaults() -> Self {
        let rules = DEFAULT_ISSUERS
            .iter()
            .map(|(name, prefixes, lengths)| IssuerRule::from_static(name, prefixes, lengths))
            .collect();
        Self { rules }
    }

    /// Define and append an issuer
    ///
    /// Prefixes may be integers, digit strings, or an integer range such as
    /// `51..=55`. Lengths may be any collection of digit counts; pass `[15]`
    /// for a single length.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccvalidator::core::services::IssuerRegistry;
    ///
    /// let mut registry = IssuerRegistry::new();
    /// registry.register("Discover", [6011], [16]).unwrap();
    /// registry.register("MasterCard", 51..=55, [16]).unwrap();
    ///
    /// assert_eq!(registry.match_number("5105105105105100").name(), "MasterCard");
    /// ```
    pub fn register<P, L>(&mut self, name: &str, prefixes: P, lengths: L) -> Result<&IssuerRule, RegistryError>
    where
        P: IntoIterator,
        P::Item: ToString,
        L: IntoIterator<Item = usize>,
    {
        let rule = IssuerRule::new(name, prefixes, lengths)?;
        Ok(self.push(rule))
    }

    /// Append an already-built rule
    pub fn push(&mut self, rule: IssuerRule) -> &IssuerRule {
        debug!(
            "Registered issuer {} (prefixes: {}, lengths: {:?})",
            rule.name(),
            rule.prefixes().join(","),
            rule.lengths()
        );
        let index = self.rules.len();
        self.rules.push(rule);
        &self.rules[index]
    }

    /// Resolve a normalized number to its issuer
    ///
    /// Non-canonical input (empty, non-digit, or with a leading zero) never
    /// matches.
    #[must_use]
    pub fn match_number(&self, number: &str) -> IssuerMatch<'_> {
        if !is_canonical_number(number) {
            return IssuerMatch::Unknown;
        }

        self.rules
            .iter()
            .find(|rule| rule.matches(number))
            .map_or(IssuerMatch::Unknown, IssuerMatch::Matched)
    }

    /// Rules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &IssuerRule> {
        self.rules.iter()
    }

    /// Number of registered issuers
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no issuers are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Check that a string is the canonical decimal form of a non-negative integer
///
/// Equivalent to "parsing to an integer and printing it back yields the same
/// string", without an upper bound on magnitude: only ASCII digits, at least
/// one of them, and no leading zero unless the whole string is `0`.
#[must_use]
pub fn is_canonical_number(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    number == "0" || !number.starts_with('0')
}
