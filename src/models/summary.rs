use serde::{Deserialize, Serialize};

use super::{OrganizationRecord, PlaneCounts};

/// Aggregate counts across every scanned organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_organizations: usize,
    pub fully_compliant_organizations: usize,
    pub rpaas_organizations: usize,
    pub data_plane_organizations: usize,
    pub typespec_organizations: usize,
    pub swagger_organizations: usize,
    pub failed_organizations: usize,

    pub typespec_projects: PlaneCounts,
    pub swagger_files: PlaneCounts,
    pub total_swagger_files: usize,

    pub total_folders: usize,
    pub compliant_folders: usize,
    pub non_compliant_folders: usize,
}

impl Summary {
    /// Metric/count rows in report order.
    pub fn metrics(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Total Organizations", self.total_organizations),
            (
                "Fully Compliant Organizations",
                self.fully_compliant_organizations,
            ),
            ("RPaaS Organizations", self.rpaas_organizations),
            (
                "Organizations with Data Plane (TypeSpec or Swagger)",
                self.data_plane_organizations,
            ),
            (
                "Organizations with TypeSpec Projects",
                self.typespec_organizations,
            ),
            (
                "Organizations with Swagger Files",
                self.swagger_organizations,
            ),
            (
                "Organizations with TypeSpec (Mgmt or Data Plane)",
                self.typespec_organizations,
            ),
        ]
    }
}

/// Folds organization records into a [`Summary`] as the driver produces them.
#[derive(Debug, Default)]
pub struct SummaryAccumulator {
    summary: Summary,
}

impl SummaryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &OrganizationRecord) {
        let s = &mut self.summary;
        s.total_organizations += 1;
        if record.is_fully_compliant {
            s.fully_compliant_organizations += 1;
        }
        if record.is_rpaas_service {
            s.rpaas_organizations += 1;
        }
        if record.has_data_plane() {
            s.data_plane_organizations += 1;
        }
        if record.has_typespec() {
            s.typespec_organizations += 1;
        }
        if record.total_swagger_files > 0 {
            s.swagger_organizations += 1;
        }
        if record.is_failed() {
            s.failed_organizations += 1;
        }

        s.typespec_projects.management += record.typespec_projects.management;
        s.typespec_projects.data += record.typespec_projects.data;
        s.swagger_files.management += record.swagger_files.management;
        s.swagger_files.data += record.swagger_files.data;
        s.total_swagger_files += record.total_swagger_files;

        s.total_folders += record.total_folders();
        s.compliant_folders += record.compliant_folders.len();
        s.non_compliant_folders += record.non_compliant_folders.len();
    }

    pub fn finish(self) -> Summary {
        self.summary
    }
}
