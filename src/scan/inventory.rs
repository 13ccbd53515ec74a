//! Single-pass collection of the folders and files an organization holds.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::classify::is_version_folder_name;
use crate::error::ScanError;

/// Files whose presence marks a TypeSpec project root.
pub const PROJECT_MARKERS: &[&str] = &["tspconfig.yaml", "main.tsp"];

/// Example payload folders; never part of the structure.
pub const EXAMPLES_DIR: &str = "examples";

/// Build-configuration document name, compared case-insensitively.
pub const README_NAME: &str = "readme.md";

/// Everything found below one organization folder.
#[derive(Debug, Default)]
pub struct OrgInventory {
    /// Folders holding a project marker file
    pub projects: BTreeSet<PathBuf>,
    /// `.json` files whose organization-relative path never mentions examples
    pub definition_files: Vec<PathBuf>,
    /// Every `.json` file reached by the walk, examples folders pruned
    pub json_files: Vec<PathBuf>,
    /// `stable` / `preview` folders with at least one definition file below them
    pub version_folders: BTreeSet<PathBuf>,
    pub readmes: Vec<PathBuf>,
}

impl OrgInventory {
    /// Walk `org_dir` once, skipping examples folders at any depth.
    pub fn collect(org_dir: &Path) -> Result<Self, ScanError> {
        let mut inventory = OrgInventory::default();

        let walker = WalkDir::new(org_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_examples_dir(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            if PROJECT_MARKERS.contains(&name.as_str()) {
                if let Some(parent) = path.parent() {
                    inventory.projects.insert(parent.to_path_buf());
                }
            }

            if name.to_lowercase() == README_NAME {
                inventory.readmes.push(path.to_path_buf());
            }

            if name.ends_with(".json") {
                inventory.json_files.push(path.to_path_buf());
                if !under_examples(path, org_dir) {
                    inventory.mark_version_folders(path, org_dir);
                    inventory.definition_files.push(path.to_path_buf());
                }
            }
        }

        Ok(inventory)
    }

    fn mark_version_folders(&mut self, file: &Path, org_dir: &Path) {
        for ancestor in file.ancestors().skip(1) {
            if ancestor == org_dir {
                break;
            }
            let is_version = ancestor
                .file_name()
                .is_some_and(|n| is_version_folder_name(&n.to_string_lossy()));
            if is_version {
                self.version_folders.insert(ancestor.to_path_buf());
            }
        }
    }
}

fn is_examples_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_string_lossy().to_lowercase() == EXAMPLES_DIR
}

/// Any part of the organization-relative path mentions examples.
fn under_examples(path: &Path, org_dir: &Path) -> bool {
    let rel = path.strip_prefix(org_dir).unwrap_or(path);
    rel.to_string_lossy().to_lowercase().contains(EXAMPLES_DIR)
}
