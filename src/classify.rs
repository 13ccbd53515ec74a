//! Path classification for specification folders.
//!
//! These predicates decide which plane a folder belongs to and whether the
//! names that make up a folder path are well-formed namespace or service
//! tokens. They never touch the filesystem.

use std::path::Path;

use crate::models::Plane;

/// Path segment that marks the management plane.
pub const RESOURCE_MANAGER: &str = "resource-manager";

/// Path segment that marks the data plane.
pub const DATA_PLANE: &str = "data-plane";

/// Substring that marks a TypeSpec project folder as management plane.
const MANAGEMENT_SUFFIX: &str = ".Management";

/// Folder names that group definition documents by maturity.
pub const VERSION_FOLDER_NAMES: &[&str] = &["stable", "preview"];

/// Classify a project or folder path into a plane.
///
/// A path is management plane when its last segment contains `.Management`
/// or when any part of it contains `resource-manager`. Everything else is
/// data plane.
///
/// # Examples
///
/// ```
/// use foldscan::classify::classify_plane;
/// use foldscan::models::Plane;
///
/// assert_eq!(classify_plane("contoso/resource-manager/Microsoft.Contoso/widgets"), Plane::Management);
/// assert_eq!(classify_plane("contoso/Contoso.Management"), Plane::Management);
/// assert_eq!(classify_plane("contoso/data-plane/widgets"), Plane::Data);
/// ```
pub fn classify_plane(path: impl AsRef<Path>) -> Plane {
    let path = path.as_ref();
    let last = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    if last.contains(MANAGEMENT_SUFFIX) || path.to_string_lossy().contains(RESOURCE_MANAGER) {
        Plane::Management
    } else {
        Plane::Data
    }
}

/// Plane named by a `resource-manager` or `data-plane` keyword in `rel_path`.
///
/// Unlike [`classify_plane`] there is no fallback: a path under neither
/// keyword belongs to no plane.
///
/// # Examples
///
/// ```
/// use foldscan::classify::plane_from_keyword;
/// use foldscan::models::Plane;
///
/// assert_eq!(plane_from_keyword("contoso/data-plane/widgets/stable"), Some(Plane::Data));
/// assert_eq!(plane_from_keyword("contoso/legacy/stable"), None);
/// ```
pub fn plane_from_keyword(rel_path: &str) -> Option<Plane> {
    if rel_path.contains(RESOURCE_MANAGER) {
        Some(Plane::Management)
    } else if rel_path.contains(DATA_PLANE) {
        Some(Plane::Data)
    } else {
        None
    }
}

/// True if `s` starts with an uppercase letter and holds only alphanumerics or dots.
pub fn is_pascal_case_token(s: &str) -> bool {
    match s.chars().next() {
        Some(first) if first.is_uppercase() => {}
        _ => return false,
    }
    s.chars().all(|c| c.is_alphanumeric() || c == '.')
}

/// True if `s` is an `A.B` namespace where both halves are PascalCase.
///
/// # Examples
///
/// ```
/// use foldscan::classify::is_namespace_pattern;
///
/// assert!(is_namespace_pattern("Microsoft.Compute"));
/// assert!(!is_namespace_pattern("microsoft.compute"));
/// assert!(!is_namespace_pattern("Microsoft.Compute.Extra"));
/// ```
pub fn is_namespace_pattern(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 2 {
        return false;
    }
    parts
        .iter()
        .all(|part| is_pascal_case_token(part) && !part.contains('.'))
}

/// True if every character of `s` is alphanumeric or a hyphen.
pub fn is_service_name_token(s: &str) -> bool {
    s.chars().all(|c| c.is_alphanumeric() || c == '-')
}

/// True for `stable` or `preview`, ignoring case.
pub fn is_version_folder_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    VERSION_FOLDER_NAMES.contains(&lower.as_str())
}
