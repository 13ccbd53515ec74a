//! Ordered rule table for a single folder.

use std::path::{Component, Path};

use crate::classify::{
    is_namespace_pattern, is_service_name_token, is_version_folder_name, plane_from_keyword,
    DATA_PLANE, RESOURCE_MANAGER,
};
use crate::error::ScanError;
use crate::models::{Anchor, ComplianceVerdict, Plane, Violation};

/// Top-level folder shared by every organization; always compliant.
pub const COMMON_TYPES: &str = "common-types";

/// What the scanner already knows about a candidate folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderFacts {
    /// Folder holds `tspconfig.yaml` or `main.tsp`
    pub is_project_root: bool,
    pub plane: Plane,
}

/// Split `folder` into its path segments below `root`.
pub fn relative_segments(folder: &Path, root: &Path) -> Result<Vec<String>, ScanError> {
    let rel = folder
        .strip_prefix(root)
        .map_err(|_| ScanError::OutsideRoot {
            path: folder.to_path_buf(),
            root: root.to_path_buf(),
        })?;

    Ok(rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect())
}

/// Check one folder on disk against folder structure v2.
pub fn check_folder(
    folder: &Path,
    root: &Path,
    facts: FolderFacts,
) -> Result<ComplianceVerdict, ScanError> {
    let segments = relative_segments(folder, root)?;
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    Ok(evaluate(&segments, facts))
}

/// Evaluate root-relative path segments. The first matching rule wins.
pub fn evaluate(segments: &[&str], facts: FolderFacts) -> ComplianceVerdict {
    let rel_path = segments.join("/");

    if segments.first() == Some(&COMMON_TYPES) {
        return ComplianceVerdict::compliant(Anchor::Shared);
    }

    if segments.len() < 2 {
        return ComplianceVerdict::non_compliant(Violation::PathTooShort { rel_path });
    }

    if facts.is_project_root {
        return match project_root(segments, facts.plane, &rel_path) {
            Ok(()) => ComplianceVerdict::compliant(Anchor::ProjectRoot(facts.plane)),
            Err(violation) => ComplianceVerdict::non_compliant(violation),
        };
    }

    let folder = segments[segments.len() - 1];
    if is_version_folder_name(folder) {
        return version_folder(segments, folder, &rel_path);
    }

    ComplianceVerdict::non_compliant(Violation::NotAnAnchor { rel_path })
}

fn project_root(segments: &[&str], plane: Plane, rel_path: &str) -> Result<(), Violation> {
    match (plane, segments) {
        (Plane::Management, [_, keyword, namespace, service]) if *keyword == RESOURCE_MANAGER => {
            check_names(Some(*namespace), service)
        }
        (Plane::Data, [_, keyword, service]) if *keyword == DATA_PLANE => {
            check_names(None, service)
        }
        _ => Err(Violation::ProjectShape {
            plane,
            rel_path: rel_path.to_string(),
        }),
    }
}

fn version_folder(segments: &[&str], folder: &str, rel_path: &str) -> ComplianceVerdict {
    let Some(plane) = plane_from_keyword(rel_path) else {
        return ComplianceVerdict::non_compliant(Violation::OutsidePlanes {
            folder: folder.to_string(),
            rel_path: rel_path.to_string(),
        });
    };

    let names = match (plane, segments) {
        (Plane::Management, [_, keyword, namespace, service, _]) if *keyword == RESOURCE_MANAGER => {
            check_names(Some(*namespace), service)
        }
        (Plane::Data, [_, keyword, service, _]) if *keyword == DATA_PLANE => {
            check_names(None, service)
        }
        _ => Err(Violation::VersionFolderShape {
            plane,
            folder: folder.to_string(),
            rel_path: rel_path.to_string(),
        }),
    };

    match names {
        Ok(()) => ComplianceVerdict::compliant(Anchor::VersionFolder {
            plane,
            folder: folder.to_string(),
        }),
        Err(violation) => ComplianceVerdict::non_compliant(violation),
    }
}

fn check_names(namespace: Option<&str>, service: &str) -> Result<(), Violation> {
    if let Some(namespace) = namespace {
        if !is_namespace_pattern(namespace) {
            return Err(Violation::NamespacePattern {
                namespace: namespace.to_string(),
            });
        }
    }
    if !is_service_name_token(service) {
        return Err(Violation::ServiceName {
            service: service.to_string(),
        });
    }
    Ok(())
}
