//! ccvalidator - identify credit card issuers and validate card numbers
//!
//! This library provides the issuer registry, the Luhn checksum, and the batch
//! processor that turns multi-line text into one validation result per line.
//!
//! ```
//! use ccvalidator::core::services::{IssuerRegistry, process_batch};
//!
//! let registry = IssuerRegistry::with_defaults();
//! let results = process_batch(&registry, "4111111111111111\n9111111111111111");
//!
//! assert_eq!(results[0].issuer, "VISA");
//! assert!(results[0].valid);
//! assert_eq!(results[1].issuer, "Unknown");
//! assert!(!results[1].valid);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod input;
pub mod output;
pub mod paths;
