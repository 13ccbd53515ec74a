//! Report rendering.
//!
//! Every format consumes the same [`ScanReport`](crate::scan::ScanReport):
//! a flat row per organization plus the aggregate summary table.

pub mod csv;
pub mod json;
pub mod terminal;

use crate::models::OrganizationRecord;

pub const REPORT_CSV: &str = "folder-structure-report.csv";
pub const SUMMARY_CSV: &str = "folder-structure-summary.csv";
pub const REPORT_JSON: &str = "folder-structure-report.json";

/// Separator for multi-valued report cells.
pub const LIST_SEPARATOR: &str = ";";

/// Flattened view of one organization record.
///
/// Non-compliant folders are listed without their reasons; the full record
/// carries them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub organization: String,
    pub fully_compliant: bool,
    pub simple_structure: bool,
    pub rpaas: bool,
    pub has_data_plane: bool,
    pub has_typespec: bool,
    pub version_uniform_issue: bool,
    pub problematic_readmes: String,
    pub compliant_folders: String,
    pub non_compliant_folders: String,
}

impl ReportRow {
    pub const HEADERS: [&'static str; 10] = [
        "Organization",
        "Fully Compliant",
        "Is Simple Structure",
        "Is RPaaS Service",
        "Has Data Plane",
        "Has TypeSpec",
        "Has Version Uniform Issue",
        "Problematic Readmes",
        "Compliant Folders",
        "Non-Compliant Folders",
    ];

    pub fn cells(&self) -> [String; 10] {
        [
            self.organization.clone(),
            bool_cell(self.fully_compliant),
            bool_cell(self.simple_structure),
            bool_cell(self.rpaas),
            bool_cell(self.has_data_plane),
            bool_cell(self.has_typespec),
            bool_cell(self.version_uniform_issue),
            self.problematic_readmes.clone(),
            self.compliant_folders.clone(),
            self.non_compliant_folders.clone(),
        ]
    }
}

impl From<&OrganizationRecord> for ReportRow {
    fn from(record: &OrganizationRecord) -> Self {
        let non_compliant: Vec<&str> = record
            .non_compliant_folders
            .iter()
            .map(|f| f.path.as_str())
            .collect();

        Self {
            organization: record.organization.clone(),
            fully_compliant: record.is_fully_compliant,
            simple_structure: record.is_simple_structure,
            rpaas: record.is_rpaas_service,
            has_data_plane: record.has_data_plane(),
            has_typespec: record.has_typespec(),
            version_uniform_issue: record.has_version_uniform_issue(),
            problematic_readmes: record.problematic_readmes.join(LIST_SEPARATOR),
            compliant_folders: record.compliant_folders.join(LIST_SEPARATOR),
            non_compliant_folders: non_compliant.join(LIST_SEPARATOR),
        }
    }
}

fn bool_cell(value: bool) -> String {
    let cell = if value { "TRUE" } else { "FALSE" };
    cell.to_string()
}
