//! Shared fixture builders for scanner integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary `specification` folder populated file by file.
pub struct SpecTree {
    _temp: TempDir,
    root: PathBuf,
}

impl SpecTree {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("specification");
        fs::create_dir_all(&root).expect("Failed to create specification folder");
        // Scanner paths are compared after canonicalization
        let root = root.canonicalize().expect("Failed to canonicalize root");
        Self { _temp: temp, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn org(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Write `content` at a root-relative path, creating parent folders.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.root.join(rel);
        fs::create_dir_all(path.parent().expect("file path has a parent"))
            .expect("Failed to create parent folders");
        fs::write(&path, content).expect("Failed to write fixture file");
        self
    }

    pub fn swagger(&self, rel: &str) -> &Self {
        self.file(rel, r#"{"swagger": "2.0"}"#)
    }

    pub fn marker(&self, rel_dir: &str) -> &Self {
        self.file(&format!("{rel_dir}/tspconfig.yaml"), "emit: []\n")
    }
}

/// Management README whose default tag lists `inputs`.
pub fn readme_with_inputs(subtype: Option<&str>, inputs: &[&str]) -> String {
    let subtype = subtype
        .map(|s| format!("openapi-subtype: {s}\n"))
        .unwrap_or_default();
    let inputs: String = inputs.iter().map(|i| format!("  - {i}\n")).collect();

    format!(
        r#"# Contoso

> see https://aka.ms/autorest

## Getting Started

To build the SDKs for this service, run autorest against this file.

## Basic Information

These are the global settings for the API.

```yaml
openapi-type: arm
{subtype}tag: package-2022-02
```

### Tag: package-2022-02

These settings apply only when `--tag=package-2022-02` is specified on the command line.

```yaml $(tag) == 'package-2022-02'
input-file:
{inputs}```
"#
    )
}

/// A fully compliant organization with both planes.
pub fn compliant_org(tree: &SpecTree, name: &str) {
    let ns = "Microsoft.Contoso";
    tree.marker(&format!("{name}/resource-manager/{ns}/widgets"))
        .swagger(&format!(
            "{name}/resource-manager/{ns}/widgets/stable/2021-01-01/widgets.json"
        ))
        .swagger(&format!(
            "{name}/resource-manager/{ns}/widgets/preview/2022-01-01-preview/widgets.json"
        ))
        .file(
            &format!("{name}/resource-manager/{ns}/widgets/stable/2021-01-01/examples/Widgets_Get.json"),
            "{}",
        )
        .file(
            &format!("{name}/resource-manager/readme.md"),
            &readme_with_inputs(
                Some("rpaas"),
                &[
                    "Microsoft.Contoso/widgets/stable/2021-01-01/widgets.json",
                    "Microsoft.Contoso/widgets/stable/2021-01-01/operations.json",
                ],
            ),
        )
        .file(&format!("{name}/data-plane/widgets/main.tsp"), "import \"@typespec/http\";\n")
        .swagger(&format!("{name}/data-plane/widgets/stable/2021-01-01/openapi.json"));
}
