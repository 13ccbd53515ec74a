//! Readme command - check one README for API version drift.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::readme::check_version_consistency;
use crate::report::terminal;

/// Execute the readme command
pub fn execute(file: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read README: {}", file.display()))?;

    let check = check_version_consistency(&content);
    terminal::print_version_check(&file.display().to_string(), &check);

    if check.has_uniformity_issue() {
        bail!("Default tag references more than one API version folder");
    }
    Ok(())
}
