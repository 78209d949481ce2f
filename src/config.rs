//! Issuer file loading
//!
//! Extra issuers can be declared in TOML and are registered after the
//! built-in ones, so the built-ins keep priority unless `replace_defaults`
//! is set:
//!
//! ```toml
//! replace_defaults = false
//!
//! [[issuer]]
//! name = "JCB"
//! prefixes = ["3528-3589"]
//! lengths = [16, 17, 18, 19]
//!
//! [[issuer]]
//! name = "Diners Club"
//! prefixes = [36, "300-305"]
//! lengths = 14
//! ```
//!
//! The file is looked up from `--issuers`, then `./.ccvalidator.toml`, then
//! `~/.ccvalidator/issuers.toml`. With none present the built-ins are used.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{IssuerRule, RegistryError};
use crate::core::services::IssuerRegistry;
use crate::paths;

/// Upper bound on the prefixes a single range entry may expand to
pub const MAX_RANGE_PREFIXES: u64 = 10_000;

/// Errors that can occur while loading an issuer file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read issuer file {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has the wrong shape
    #[error("failed to parse issuer file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `low-high` prefix range was malformed or reversed
    #[error("invalid prefix range {0:?}: expected \"low-high\" with digits and low <= high")]
    InvalidRange(String),

    /// A prefix range would expand to too many prefixes
    #[error("prefix range {0:?} expands to more than {max} prefixes", max = MAX_RANGE_PREFIXES)]
    RangeTooLarge(String),

    /// An issuer definition was rejected
    #[error(transparent)]
    Issuer(#[from] RegistryError),
}

/// Contents of an issuer file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssuerFile {
    /// Start from an empty registry instead of the built-in issuers
    #[serde(default)]
    pub replace_defaults: bool,

    /// Issuers to register, in order
    #[serde(default, rename = "issuer")]
    pub issuers: Vec<IssuerEntry>,
}

/// One `[[issuer]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct IssuerEntry {
    /// Network name
    pub name: String,

    /// Prefixes: integers, digit strings, or `"low-high"` ranges
    pub prefixes: Vec<PrefixSpec>,

    /// A single length or a list of them
    pub lengths: LengthSpec,
}

/// A prefix as written in the issuer file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PrefixSpec {
    /// `51`
    Number(u64),
    /// `"51"` or `"51-55"`
    Text(String),
}

/// Accepted lengths as written in the issuer file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LengthSpec {
    /// `lengths = 16`
    One(usize),
    /// `lengths = [13, 16]`
    Many(Vec<usize>),
}

impl PrefixSpec {
    /// Expand into one or more prefix strings
    pub fn expand(&self) -> Result<Vec<String>, ConfigError> {
        match self {
            Self::Number(n) => Ok(vec![n.to_string()]),
            Self::Text(text) => {
                let text = text.trim();
                match text.split_once('-') {
                    Some((low, high)) => expand_range(text, low.trim(), high.trim()),
                    None => Ok(vec![text.to_string()]),
                }
            },
        }
    }
}

fn expand_range(text: &str, low: &str, high: &str) -> Result<Vec<String>, ConfigError> {
    let parse = |bound: &str| -> Option<u64> {
        if bound.is_empty() || !bound.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        bound.parse().ok()
    };

    let (Some(low), Some(high)) = (parse(low), parse(high)) else {
        return Err(ConfigError::InvalidRange(text.to_string()));
    };
    if low > high {
        return Err(ConfigError::InvalidRange(text.to_string()));
    }
    if high - low >= MAX_RANGE_PREFIXES {
        return Err(ConfigError::RangeTooLarge(text.to_string()));
    }

    Ok((low..=high).map(|n| n.to_string()).collect())
}

impl LengthSpec {
    /// Lengths as a list
    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        match self {
            Self::One(length) => vec![*length],
            Self::Many(lengths) => lengths.clone(),
        }
    }
}

impl IssuerEntry {
    /// Build the validated rule for this entry
    pub fn to_rule(&self) -> Result<IssuerRule, ConfigError> {
        let mut prefixes = Vec::new();
        for spec in &self.prefixes {
            prefixes.extend(spec.expand()?);
        }
        Ok(IssuerRule::new(self.name.as_str(), prefixes, self.lengths.to_vec())?)
    }
}

impl IssuerFile {
    /// Parse issuer file contents
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse an issuer file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Build a registry: the built-ins (unless replaced) followed by this file's issuers
    pub fn build_registry(&self) -> Result<IssuerRegistry, ConfigError> {
        let mut registry = if self.replace_defaults {
            IssuerRegistry::new()
        } else {
            IssuerRegistry::with_defaults()
        };

        for entry in &self.issuers {
            registry.push(entry.to_rule()?);
        }
        Ok(registry)
    }
}

/// Find the issuer file to use, if any
///
/// An explicit path is returned as-is, even if it does not exist, so that
/// loading reports the problem.
#[must_use]
pub fn locate_issuer_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    [paths::project_issuers(), paths::global_issuers()]
        .into_iter()
        .find(|path| path.is_file())
}

/// Build the registry for this run
pub fn load_registry(explicit: Option<&Path>) -> Result<IssuerRegistry, ConfigError> {
    match locate_issuer_file(explicit) {
        Some(path) => {
            debug!("Loading issuers from {}", path.display());
            IssuerFile::load(&path)?.build_registry()
        },
        None => {
            debug!("No issuer file found, using built-in issuers");
            Ok(IssuerRegistry::with_defaults())
        },
    }
}
