//! ccvalidator - identify credit card issuers and validate card numbers
//!
//! Reads card numbers from an argument, a file, or stdin and prints the
//! issuer of each one along with whether it passes the Luhn checksum.

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

mod cli;
mod commands;

/// Main entry point for the ccvalidator CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
