//! Repository scanning.
//!
//! The driver enumerates organization folders below the repository root and
//! scans them one at a time. Each scan walks the organization once and
//! produces an immutable [`OrganizationRecord`](crate::models::OrganizationRecord);
//! the driver folds the records into a summary.

pub mod driver;
pub mod inventory;
pub mod organization;

use std::path::{Component, Path};

pub use driver::{enumerate_organizations, run_scan, ScanOptions, ScanReport};
pub use inventory::OrgInventory;
pub use organization::{is_simple_structure, scan_organization};

/// `path` relative to `base`, always `/`-separated.
pub fn rel_display(path: &Path, base: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
