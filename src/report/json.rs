//! JSON rendering of the full scan.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::REPORT_JSON;
use crate::scan::ScanReport;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a ScanReport,
}

pub fn to_json(report: &ScanReport, generated_at: DateTime<Utc>) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        generated_at,
        report,
    })
    .context("Failed to serialize report")
}

/// Write the JSON report into `dir` and return its path.
pub fn write_report(report: &ScanReport, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join(REPORT_JSON);
    let json = to_json(report, Utc::now())?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
