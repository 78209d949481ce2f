//! Core domain logic for ccvalidator
//!
//! This module contains pure classification logic with no I/O dependencies.
//! Every function here is total: malformed input is classified, never rejected.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`IssuerRule`, `IssuerMatch`, `ValidationResult`)
//! - `services/` - Registry lookup, Luhn checksum, per-line and batch validation

pub mod models;
pub mod services;
