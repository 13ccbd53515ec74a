use std::fmt;

use super::Plane;

/// Structural role a compliant folder was recognised as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// Shared folder such as `common-types`
    Shared,

    /// TypeSpec project root in its mandated location
    ProjectRoot(Plane),

    /// `stable` or `preview` folder in its mandated location
    VersionFolder { plane: Plane, folder: String },
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Shared => write!(f, "Shared/common folder - compliant"),
            Anchor::ProjectRoot(plane) => {
                write!(f, "Compliant {} TypeSpec project root", plane.label())
            }
            Anchor::VersionFolder { plane, folder } => {
                write!(f, "Compliant {} Swagger {folder} folder", plane.label())
            }
        }
    }
}

/// Reason a folder does not follow folder structure v2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    PathTooShort {
        rel_path: String,
    },
    NamespacePattern {
        namespace: String,
    },
    ServiceName {
        service: String,
    },
    ProjectShape {
        plane: Plane,
        rel_path: String,
    },
    VersionFolderShape {
        plane: Plane,
        folder: String,
        rel_path: String,
    },
    /// Version folder outside both `resource-manager` and `data-plane`
    OutsidePlanes {
        folder: String,
        rel_path: String,
    },
    /// Neither a project root nor a version folder
    NotAnAnchor {
        rel_path: String,
    },
}

impl Violation {
    /// True for violations caused by the depth or keywords of the path.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Violation::PathTooShort { .. }
                | Violation::ProjectShape { .. }
                | Violation::VersionFolderShape { .. }
                | Violation::OutsidePlanes { .. }
        )
    }
}

fn mandated_shape(plane: Plane) -> &'static str {
    match plane {
        Plane::Management => {
            "specification/{orgName}/resource-manager/{namespaceName}/{serviceName}"
        }
        Plane::Data => "specification/{orgName}/data-plane/{serviceName}",
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::PathTooShort { rel_path } => write!(f, "Path too short: {rel_path}"),
            Violation::NamespacePattern { namespace } => write!(
                f,
                "Non-compliant namespace pattern '{namespace}': should be A.B format with PascalCase (e.g., Microsoft.Compute)"
            ),
            Violation::ServiceName { service } => write!(
                f,
                "Non-compliant service name '{service}': should not contain special characters"
            ),
            Violation::ProjectShape { plane, rel_path } => write!(
                f,
                "Non-compliant {} TypeSpec structure: {rel_path} (must be exactly {})",
                plane.label(),
                mandated_shape(*plane)
            ),
            Violation::VersionFolderShape {
                plane,
                folder,
                rel_path,
            } => write!(
                f,
                "Non-compliant {} Swagger {folder} structure: {rel_path} (must be exactly {}/{folder})",
                plane.label(),
                mandated_shape(*plane)
            ),
            Violation::OutsidePlanes { folder, rel_path } => write!(
                f,
                "Swagger {folder} folder not in resource-manager or data-plane structure: {rel_path}"
            ),
            Violation::NotAnAnchor { rel_path } => write!(
                f,
                "Not a TypeSpec project root or Swagger stable/preview folder: {rel_path}"
            ),
        }
    }
}

/// Outcome of one compliance check.
///
/// The flag and the reason are always produced together; the constructors
/// are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceVerdict {
    is_compliant: bool,
    reason: String,
    violation: Option<Violation>,
}

impl ComplianceVerdict {
    pub fn compliant(anchor: Anchor) -> Self {
        Self {
            is_compliant: true,
            reason: anchor.to_string(),
            violation: None,
        }
    }

    pub fn non_compliant(violation: Violation) -> Self {
        Self {
            is_compliant: false,
            reason: violation.to_string(),
            violation: Some(violation),
        }
    }

    pub fn is_compliant(&self) -> bool {
        self.is_compliant
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn violation(&self) -> Option<&Violation> {
        self.violation.as_ref()
    }
}
