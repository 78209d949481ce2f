//! Identify and validate card numbers

use std::path::Path;

use log::info;

use ccvalidator::config;
use ccvalidator::core::services::process_batch;
use ccvalidator::input::InputSource;
use ccvalidator::output::{BatchReport, OutputMode};

/// Validate every line of the input and print one result per line
pub fn check(input: &str, strict: bool, issuers: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let registry = config::load_registry(issuers)?;
    let text = InputSource::resolve(input).read()?;

    let report = BatchReport::new(process_batch(&registry, &text));
    report.render(mode);

    if strict && !report.summary.all_valid() {
        info!("{} of {} number(s) invalid", report.summary.invalid, report.summary.total);
        std::process::exit(1);
    }

    Ok(())
}
