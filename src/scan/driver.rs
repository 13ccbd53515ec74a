//! Organization enumeration and the scan loop.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use super::organization::scan_organization;
use crate::error::ScanError;
use crate::models::{OrganizationRecord, Summary, SummaryAccumulator};

/// Names under the root that are never organizations.
pub const DEFAULT_EXCLUDES: &[&str] = &["suppressions.yaml"];

/// Which organizations to scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Names skipped during enumeration
    pub exclude: Vec<String>,
    /// When set, only these organizations are scanned
    pub organizations: Option<Vec<String>>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            organizations: None,
        }
    }
}

/// Records for every organization plus the aggregate summary.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub summary: Summary,
    pub organizations: Vec<OrganizationRecord>,
}

impl ScanReport {
    pub fn failed(&self) -> impl Iterator<Item = &OrganizationRecord> {
        self.organizations.iter().filter(|r| r.is_failed())
    }
}

/// List organization folders directly below `root`, sorted by name.
///
/// Hidden entries and excluded names are skipped.
pub fn enumerate_organizations(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, ScanError> {
    let entries = std::fs::read_dir(root).map_err(|e| ScanError::io(root, e))?;

    let mut orgs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::io(root, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if name.starts_with('.') || options.exclude.iter().any(|ex| *ex == name) {
            continue;
        }
        if let Some(only) = &options.organizations {
            if !only.iter().any(|o| *o == name) {
                continue;
            }
        }

        let path = entry.path();
        if path.is_dir() {
            orgs.push(path);
        }
    }

    orgs.sort();
    Ok(orgs)
}

/// Scan every organization below `root`.
///
/// A failing organization is recorded with its error and the scan moves on;
/// only failure to list `root` itself is returned as an error.
pub fn run_scan(root: &Path, options: &ScanOptions) -> Result<ScanReport, ScanError> {
    run_scan_with(root, options, scan_organization)
}

/// [`run_scan`] with the per-organization scan supplied by the caller.
fn run_scan_with<F>(
    root: &Path,
    options: &ScanOptions,
    mut scan_org: F,
) -> Result<ScanReport, ScanError>
where
    F: FnMut(&Path, &Path) -> Result<OrganizationRecord, ScanError>,
{
    let org_dirs = enumerate_organizations(root, options)?;
    info!(
        root = %root.display(),
        count = org_dirs.len(),
        "Found organization directories to analyze"
    );

    let mut accumulator = SummaryAccumulator::new();
    let mut organizations = Vec::with_capacity(org_dirs.len());

    for (i, org_dir) in org_dirs.iter().enumerate() {
        let name = org_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(organization = %name, "Analyzing {}/{}", i + 1, org_dirs.len());

        let record = match scan_org(org_dir, root) {
            Ok(record) => record,
            Err(e) => {
                warn!(organization = %name, error = %e, "Organization analysis failed");
                OrganizationRecord::failed(name, e)
            }
        };

        accumulator.record(&record);
        organizations.push(record);
    }

    Ok(ScanReport {
        root: root.to_path_buf(),
        summary: accumulator.finish(),
        organizations,
    })
}
