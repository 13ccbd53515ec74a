//! Whole-repository scans

use std::fs;

use foldscan::scan::{run_scan, ScanOptions};

use super::helpers::{compliant_org, readme_with_inputs, SpecTree};

fn mixed_tree() -> SpecTree {
    let tree = SpecTree::new();
    compliant_org(&tree, "contoso");
    tree.swagger("fabrikam/resource-manager/Microsoft.Fabrikam/stable/2020-01-01/fabrikam.json")
        .file(
            "fabrikam/resource-manager/readme.md",
            &readme_with_inputs(
                None,
                &[
                    "Microsoft.Fabrikam/stable/2020-01-01/a.json",
                    "Microsoft.Fabrikam/stable/2021-01-01/b.json",
                ],
            ),
        )
        .swagger("common-types/resource-management/v5/types.json")
        .file("suppressions.yaml", "- tool: none\n");
    fs::create_dir_all(tree.root().join(".github")).expect("Failed to create hidden folder");
    tree
}

#[test]
fn test_summary_aggregates_organizations() {
    let tree = mixed_tree();
    let report = run_scan(tree.root(), &ScanOptions::default()).unwrap();

    let names: Vec<&str> = report
        .organizations
        .iter()
        .map(|r| r.organization.as_str())
        .collect();
    assert_eq!(names, vec!["common-types", "contoso", "fabrikam"]);

    let summary = &report.summary;
    assert_eq!(summary.total_organizations, 3);
    assert_eq!(summary.fully_compliant_organizations, 1);
    assert_eq!(summary.rpaas_organizations, 1);
    assert_eq!(summary.data_plane_organizations, 1);
    assert_eq!(summary.typespec_organizations, 1);
    assert_eq!(summary.swagger_organizations, 3);
    assert_eq!(summary.failed_organizations, 0);
    assert_eq!(summary.typespec_projects.total(), 2);
    assert_eq!(summary.total_swagger_files, 5);
    assert_eq!(summary.total_folders, 6);
    assert_eq!(summary.compliant_folders, 5);
    assert_eq!(summary.non_compliant_folders, 1);
    assert_eq!(report.failed().count(), 0);
}

#[test]
fn test_common_types_has_no_version_folders() {
    let tree = mixed_tree();
    let report = run_scan(tree.root(), &ScanOptions::default()).unwrap();

    let common = &report.organizations[0];
    assert_eq!(common.total_swagger_files, 1);
    assert_eq!(common.total_folders(), 0);
    assert!(!common.is_fully_compliant);
}

#[test]
fn test_common_types_version_folder_is_compliant() {
    let tree = SpecTree::new();
    tree.swagger("common-types/data-plane/stable/v1/types.json");

    let report = run_scan(tree.root(), &ScanOptions::default()).unwrap();
    let record = &report.organizations[0];

    assert_eq!(record.compliant_folders, vec!["common-types/data-plane/stable"]);
    assert!(record.is_fully_compliant);
}

#[test]
fn test_allow_list_limits_scan() {
    let tree = mixed_tree();
    let options = ScanOptions {
        organizations: Some(vec!["fabrikam".to_string(), "missing".to_string()]),
        ..Default::default()
    };
    let report = run_scan(tree.root(), &options).unwrap();

    assert_eq!(report.organizations.len(), 1);
    assert_eq!(report.organizations[0].organization, "fabrikam");
    assert!(report.organizations[0].has_version_uniform_issue());
}

#[test]
fn test_repeated_scans_are_identical() {
    let tree = mixed_tree();
    let first = run_scan(tree.root(), &ScanOptions::default()).unwrap();
    let second = run_scan(tree.root(), &ScanOptions::default()).unwrap();

    assert_eq!(first.summary, second.summary);
    for (a, b) in first.organizations.iter().zip(&second.organizations) {
        assert_eq!(a.organization, b.organization);
        assert_eq!(a.compliant_folders, b.compliant_folders);
        assert_eq!(a.non_compliant_folders, b.non_compliant_folders);
        assert_eq!(a.problematic_readmes, b.problematic_readmes);
    }
}

#[test]
fn test_files_at_root_are_not_organizations() {
    let tree = SpecTree::new();
    tree.file("cspell.yaml", "words: []\n");

    let report = run_scan(tree.root(), &ScanOptions::default()).unwrap();
    assert!(report.organizations.is_empty());
    assert_eq!(report.summary.total_organizations, 0);
}
