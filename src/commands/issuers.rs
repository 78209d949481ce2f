//! List the active issuer registry

use std::path::Path;

use ccvalidator::config;
use ccvalidator::output::{IssuerListResult, OutputMode};

/// Print the registered issuers in match order
pub fn issuers(issuers: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let registry = config::load_registry(issuers)?;

    let result = IssuerListResult {
        issuers: registry.iter().cloned().collect(),
    };
    result.render(mode);

    Ok(())
}
