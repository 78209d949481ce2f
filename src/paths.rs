//! Centralized path definitions for ccvalidator
//!
//! This module provides a single source of truth for the filesystem paths
//! ccvalidator reads. The core never touches the filesystem; only the issuer
//! file lookup in [`crate::config`] uses these.
//!
//! ## Layout
//!
//! ```text
//! project/
//! └── .ccvalidator.toml          # Project issuer definitions
//!
//! ~/.ccvalidator/
//! └── issuers.toml               # User issuer definitions
//! ```

use std::path::PathBuf;

// =============================================================================
// Project-level paths
// =============================================================================

/// Project issuer file name, looked up in the current directory
pub const PROJECT_ISSUERS_FILE: &str = ".ccvalidator.toml";

/// Get path to `.ccvalidator.toml` in the current directory.
#[must_use]
pub fn project_issuers() -> PathBuf {
    PathBuf::from(PROJECT_ISSUERS_FILE)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".ccvalidator";

/// Global issuer filename
const GLOBAL_ISSUERS_FILE: &str = "issuers.toml";

/// Get the global ccvalidator directory.
///
/// Returns `~/.ccvalidator/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global issuer file path.
///
/// Returns `~/.ccvalidator/issuers.toml`.
#[must_use]
pub fn global_issuers() -> PathBuf {
    global_config_dir().join(GLOBAL_ISSUERS_FILE)
}
