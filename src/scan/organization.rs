//! Per-organization analysis.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::inventory::OrgInventory;
use super::rel_display;
use crate::classify::{classify_plane, plane_from_keyword, DATA_PLANE, RESOURCE_MANAGER};
use crate::compliance::{check_folder, FolderFacts};
use crate::error::ScanError;
use crate::models::{NonCompliantFolder, OrganizationRecord, Plane, PlaneCounts};
use crate::readme::{check_version_consistency, VersionCheck};

/// Analyze one organization folder below `root`.
///
/// Fails only when the folder tree itself cannot be walked; unreadable
/// README files degrade the check they feed.
pub fn scan_organization(org_dir: &Path, root: &Path) -> Result<OrganizationRecord, ScanError> {
    let organization = org_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let inventory = OrgInventory::collect(org_dir)?;

    let mut record = OrganizationRecord {
        organization,
        ..Default::default()
    };

    for project in &inventory.projects {
        let plane = classify_plane(project);
        let rel = rel_display(project, root);
        match plane {
            Plane::Management => record.mgmt_typespec_project_paths.push(rel),
            Plane::Data => record.data_typespec_project_paths.push(rel),
        }
        record.typespec_projects.add(plane);
    }

    record.total_swagger_files = inventory.definition_files.len();
    for file in &inventory.definition_files {
        let rel = rel_display(file, org_dir);
        if rel.contains(RESOURCE_MANAGER) {
            record.swagger_files.management += 1;
        } else if rel.contains(DATA_PLANE) {
            record.swagger_files.data += 1;
        }
    }

    check_candidates(&inventory, root, &mut record)?;

    // Folders under neither plane keyword count for no plane
    let version_folders: Vec<(PathBuf, Plane)> = inventory
        .version_folders
        .iter()
        .filter_map(|folder| {
            plane_from_keyword(&rel_display(folder, root)).map(|plane| (folder.clone(), plane))
        })
        .collect();
    record.is_simple_structure = is_simple_structure(&record.typespec_projects, &version_folders);

    record.has_data_plane_swagger = has_data_plane_swagger(&inventory, org_dir);

    let rm_dir = org_dir.join(RESOURCE_MANAGER);
    let rm_readmes: Vec<&PathBuf> = inventory
        .readmes
        .iter()
        .filter(|readme| readme.starts_with(&rm_dir))
        .collect();
    record.readme_count_in_rm = rm_readmes.len();
    record.is_rpaas_service = is_rpaas_service(&rm_dir);

    for readme in rm_readmes {
        if readme_has_version_drift(readme) {
            record.problematic_readmes.push(rel_display(readme, org_dir));
        }
    }

    record.is_fully_compliant =
        record.non_compliant_folders.is_empty() && record.total_folders() > 0;

    Ok(record)
}

/// Run the compliance rules once per project root or version folder.
fn check_candidates(
    inventory: &OrgInventory,
    root: &Path,
    record: &mut OrganizationRecord,
) -> Result<(), ScanError> {
    let mut candidates: BTreeMap<&PathBuf, FolderFacts> = BTreeMap::new();
    for folder in inventory.projects.iter().chain(&inventory.version_folders) {
        candidates.entry(folder).or_insert_with(|| FolderFacts {
            is_project_root: inventory.projects.contains(folder),
            plane: classify_plane(folder),
        });
    }

    for (folder, facts) in candidates {
        let verdict = check_folder(folder, root, facts)?;
        let rel = rel_display(folder, root);
        if verdict.is_compliant() {
            record.compliant_folders.push(rel);
        } else {
            debug!(folder = %rel, reason = verdict.reason(), "Non-compliant folder");
            record.non_compliant_folders.push(NonCompliantFolder {
                path: rel,
                reason: verdict.reason().to_string(),
            });
        }
    }

    Ok(())
}

/// Each plane with projects must have exactly one version-folder parent per project.
///
/// A plane without projects is not checked.
pub fn is_simple_structure(projects: &PlaneCounts, version_folders: &[(PathBuf, Plane)]) -> bool {
    [Plane::Management, Plane::Data].into_iter().all(|plane| {
        let project_count = projects.get(plane);
        if project_count == 0 {
            return true;
        }
        let parents: BTreeSet<&Path> = version_folders
            .iter()
            .filter(|(_, p)| *p == plane)
            .filter_map(|(folder, _)| folder.parent())
            .collect();
        parents.len() == project_count
    })
}

/// Any `.json` below `{org}/data-plane` named like a swagger or openapi document.
///
/// Only `examples` folders are skipped; the file name itself may mention examples.
fn has_data_plane_swagger(inventory: &OrgInventory, org_dir: &Path) -> bool {
    let dp_dir = org_dir.join(DATA_PLANE);
    inventory.json_files.iter().any(|file| {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        file.starts_with(&dp_dir) && (name.contains("swagger") || name.contains("openapi"))
    })
}

/// The organization's top-level management README declares an RPaaS subtype.
fn is_rpaas_service(rm_dir: &Path) -> bool {
    let Some(path) = ["readme.md", "README.md"]
        .iter()
        .map(|name| rm_dir.join(name))
        .find(|path| path.is_file())
    else {
        return false;
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            content.contains("openapi-subtype:") && content.to_lowercase().contains("rpaas")
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read README for RPaaS check");
            false
        }
    }
}

fn readme_has_version_drift(readme: &Path) -> bool {
    let content = match std::fs::read_to_string(readme) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %readme.display(), error = %e, "Skipping unreadable README");
            return false;
        }
    };

    match check_version_consistency(&content) {
        VersionCheck::NotApplicable(skip) => {
            debug!(path = %readme.display(), %skip, "Version check not applicable");
            false
        }
        check => check.has_uniformity_issue(),
    }
}
