//! Classification services
//!
//! Pure logic that operates on the domain models. These services have no
//! I/O dependencies - they operate on data passed in and return results.
//!
//! - [`registry`] - Ordered issuer rules and number lookup
//! - [`luhn`] - The Luhn checksum
//! - [`validator`] - Classify one input line
//! - [`batch`] - Classify multi-line text

pub mod batch;
pub mod luhn;
pub mod registry;
pub mod validator;

pub use batch::process_batch;
pub use registry::{DEFAULT_ISSUERS, IssuerRegistry, is_canonical_number};
pub use validator::{NumberValidator, normalize};
