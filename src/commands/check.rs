//! Check command - run the compliance rules against a single folder.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::classify::classify_plane;
use crate::compliance::{check_folder, FolderFacts};
use crate::report::terminal;
use crate::scan::inventory::PROJECT_MARKERS;
use crate::scan::rel_display;

/// Conventional name of the repository root folder.
const SPECIFICATION_DIR: &str = "specification";

/// Execute the check command
pub fn execute(dir: PathBuf, root: Option<PathBuf>) -> Result<()> {
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Folder not found: {}", dir.display()))?;

    let root = match root {
        Some(root) => root
            .canonicalize()
            .with_context(|| format!("Repository root not found: {}", root.display()))?,
        None => infer_root(&dir).with_context(|| {
            format!(
                "No '{SPECIFICATION_DIR}' folder above {}; pass --root",
                dir.display()
            )
        })?,
    };

    let facts = FolderFacts {
        is_project_root: PROJECT_MARKERS.iter().any(|m| dir.join(m).is_file()),
        plane: classify_plane(&dir),
    };

    let verdict = check_folder(&dir, &root, facts)?;
    terminal::print_verdict(&rel_display(&dir, &root), &verdict);

    if !verdict.is_compliant() {
        bail!("Folder does not follow folder structure v2");
    }
    Ok(())
}

/// Nearest ancestor of `dir` named `specification`.
fn infer_root(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .skip(1)
        .find(|a| a.file_name().is_some_and(|n| n == SPECIFICATION_DIR))
        .map(Path::to_path_buf)
}
