//! API version uniformity check for a README's default tag.

use std::collections::BTreeSet;
use std::fmt;

use regex::Regex;
use serde_yaml::Value;

use super::extraction::{basic_information_section, default_tag, tag_block_bodies};

/// Why a README produced no verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    NoBasicInformation,
    NoDefaultTag,
    NoTagBlock { tag: String },
    InvalidBlock { tag: String },
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::NoBasicInformation => write!(f, "no Basic Information section"),
            Skip::NoDefaultTag => write!(f, "no default tag declared"),
            Skip::NoTagBlock { tag } => write!(f, "no yaml block for tag '{tag}'"),
            Skip::InvalidBlock { tag } => write!(f, "yaml block for tag '{tag}' is not a mapping"),
        }
    }
}

/// Result of checking one README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    NotApplicable(Skip),
    Checked {
        tag: String,
        input_files: Vec<String>,
        /// Distinct version folder names referenced by the input files
        versions: BTreeSet<String>,
    },
}

impl VersionCheck {
    /// The default tag pulls Swagger files from more than one API version.
    pub fn has_uniformity_issue(&self) -> bool {
        matches!(self, VersionCheck::Checked { versions, .. } if versions.len() > 1)
    }
}

/// Check that the default tag of a README references a single API version.
///
/// Never fails: anything that cannot be understood is reported as
/// [`VersionCheck::NotApplicable`].
pub fn check_version_consistency(content: &str) -> VersionCheck {
    let Some(section) = basic_information_section(content) else {
        return VersionCheck::NotApplicable(Skip::NoBasicInformation);
    };
    let Some(tag) = default_tag(section) else {
        return VersionCheck::NotApplicable(Skip::NoDefaultTag);
    };

    let bodies = tag_block_bodies(content, &tag);
    if bodies.is_empty() {
        return VersionCheck::NotApplicable(Skip::NoTagBlock { tag });
    }

    // Both guard syntaxes are tried; the first block that is a yaml mapping wins.
    let Some(input_files) = bodies.into_iter().find_map(input_files) else {
        return VersionCheck::NotApplicable(Skip::InvalidBlock { tag });
    };

    let versions = api_versions(&input_files);
    VersionCheck::Checked {
        tag,
        input_files,
        versions,
    }
}

/// Read `input-file` from a yaml block body. `None` if the body is not a mapping.
fn input_files(body: &str) -> Option<Vec<String>> {
    let value: Value = serde_yaml::from_str(body).ok()?;
    let mapping = value.as_mapping()?;

    let files = match mapping.get("input-file") {
        Some(Value::String(file)) => vec![file.clone()],
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };
    Some(files)
}

/// Collect the folder name that follows `stable/` or `preview/` in each path.
pub fn api_versions(input_files: &[String]) -> BTreeSet<String> {
    let Ok(re) = Regex::new(r"/(?:stable|preview)/([^/]+)/") else {
        return BTreeSet::new();
    };

    input_files
        .iter()
        .filter_map(|file| re.captures(file))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
