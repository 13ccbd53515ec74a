use serde::{Deserialize, Serialize};

use super::PlaneCounts;

/// A folder that failed the compliance check, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonCompliantFolder {
    /// Path relative to the repository root
    pub path: String,
    pub reason: String,
}

/// Everything the scanner learned about one organization.
///
/// Built once per organization and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRecord {
    pub organization: String,

    /// TypeSpec project roots per plane
    pub typespec_projects: PlaneCounts,
    pub mgmt_typespec_project_paths: Vec<String>,
    pub data_typespec_project_paths: Vec<String>,

    /// Non-example `.json` definition files. `total` includes files that sit
    /// under neither plane folder.
    pub swagger_files: PlaneCounts,
    pub total_swagger_files: usize,

    /// Folder paths relative to the repository root
    pub compliant_folders: Vec<String>,
    pub non_compliant_folders: Vec<NonCompliantFolder>,

    pub is_fully_compliant: bool,
    pub is_simple_structure: bool,
    pub has_data_plane_swagger: bool,
    pub readme_count_in_rm: usize,
    pub is_rpaas_service: bool,

    /// READMEs (relative to the organization) whose default tag mixes API versions
    pub problematic_readmes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrganizationRecord {
    /// Placeholder record for an organization whose scan failed.
    pub fn failed(organization: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            organization: organization.into(),
            is_simple_structure: true,
            error: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn total_folders(&self) -> usize {
        self.compliant_folders.len() + self.non_compliant_folders.len()
    }

    pub fn has_version_uniform_issue(&self) -> bool {
        !self.problematic_readmes.is_empty()
    }

    /// Data plane exists as either TypeSpec or Swagger.
    pub fn has_data_plane(&self) -> bool {
        self.typespec_projects.data > 0 || self.has_data_plane_swagger
    }

    pub fn has_typespec(&self) -> bool {
        self.typespec_projects.total() > 0
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
