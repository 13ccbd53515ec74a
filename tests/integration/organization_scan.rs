//! Single-organization scans over fixture trees

use foldscan::scan::scan_organization;

use super::helpers::{compliant_org, readme_with_inputs, SpecTree};

#[test]
fn test_compliant_organization() {
    let tree = SpecTree::new();
    compliant_org(&tree, "contoso");

    let record = scan_organization(&tree.org("contoso"), tree.root()).unwrap();

    assert_eq!(record.organization, "contoso");
    assert_eq!(record.typespec_projects.management, 1);
    assert_eq!(record.typespec_projects.data, 1);
    assert_eq!(
        record.mgmt_typespec_project_paths,
        vec!["contoso/resource-manager/Microsoft.Contoso/widgets"]
    );
    assert_eq!(
        record.data_typespec_project_paths,
        vec!["contoso/data-plane/widgets"]
    );

    assert_eq!(record.total_swagger_files, 3);
    assert_eq!(record.swagger_files.management, 2);
    assert_eq!(record.swagger_files.data, 1);

    assert_eq!(record.total_folders(), 5, "{:?}", record.non_compliant_folders);
    assert!(record.non_compliant_folders.is_empty());
    assert!(record.is_fully_compliant);
    assert!(record.is_simple_structure);
    assert!(record.has_data_plane_swagger);
    assert!(record.is_rpaas_service);
    assert_eq!(record.readme_count_in_rm, 1);
    assert!(!record.has_version_uniform_issue());
    assert!(record.error.is_none());
}

#[test]
fn test_legacy_swagger_layout() {
    let tree = SpecTree::new();
    tree.swagger("fabrikam/resource-manager/Microsoft.Fabrikam/stable/2020-01-01/fabrikam.json")
        .swagger(
            "fabrikam/resource-manager/Microsoft.Fabrikam/preview/2021-01-01-preview/fabrikam.json",
        )
        .file(
            "fabrikam/resource-manager/readme.md",
            &readme_with_inputs(
                None,
                &[
                    "Microsoft.Fabrikam/stable/2020-01-01/fabrikam.json",
                    "Microsoft.Fabrikam/preview/2021-01-01-preview/fabrikam.json",
                ],
            ),
        );

    let record = scan_organization(&tree.org("fabrikam"), tree.root()).unwrap();

    assert!(!record.has_typespec());
    assert_eq!(record.total_folders(), 2);
    assert_eq!(record.non_compliant_folders.len(), 2);
    assert!(record.non_compliant_folders.iter().all(|f| f
        .reason
        .starts_with("Non-compliant management plane Swagger")));
    assert!(!record.is_fully_compliant);
    // No TypeSpec projects, so nothing to compare against
    assert!(record.is_simple_structure);
    assert!(!record.is_rpaas_service);

    assert!(record.has_version_uniform_issue());
    assert_eq!(record.problematic_readmes, vec!["resource-manager/readme.md"]);
}

#[test]
fn test_nested_readmes_are_checked() {
    let tree = SpecTree::new();
    tree.file(
        "fabrikam/resource-manager/Microsoft.Fabrikam/widgets/readme.md",
        &readme_with_inputs(
            None,
            &[
                "Microsoft.Fabrikam/widgets/stable/2020-01-01/a.json",
                "Microsoft.Fabrikam/widgets/stable/2021-01-01/b.json",
            ],
        ),
    )
    .file(
        "fabrikam/resource-manager/Microsoft.Fabrikam/gadgets/README.md",
        &readme_with_inputs(None, &["Microsoft.Fabrikam/gadgets/stable/2020-01-01/a.json"]),
    )
    .file(
        "fabrikam/data-plane/widgets/readme.md",
        &readme_with_inputs(None, &["widgets/stable/1/a.json", "widgets/stable/2/b.json"]),
    );

    let record = scan_organization(&tree.org("fabrikam"), tree.root()).unwrap();

    assert_eq!(record.readme_count_in_rm, 2);
    assert_eq!(
        record.problematic_readmes,
        vec!["resource-manager/Microsoft.Fabrikam/widgets/readme.md"]
    );
}

#[test]
fn test_not_simple_when_parents_outnumber_projects() {
    let tree = SpecTree::new();
    let base = "tailspin/resource-manager/Microsoft.Tailspin";
    tree.marker(&format!("{base}/widgets"))
        .marker(&format!("{base}/gadgets"))
        .swagger(&format!("{base}/widgets/stable/2021-01-01/a.json"))
        .swagger(&format!("{base}/gadgets/stable/2021-01-01/b.json"))
        .swagger(&format!("{base}/gizmos/preview/2021-01-01-preview/c.json"));

    let record = scan_organization(&tree.org("tailspin"), tree.root()).unwrap();

    assert_eq!(record.typespec_projects.management, 2);
    assert!(!record.is_simple_structure);
    // The stray gizmos folder still has a valid shape
    assert!(record.is_fully_compliant);
}

#[test]
fn test_misplaced_project_and_version_folder() {
    let tree = SpecTree::new();
    tree.marker("woodgrove/Woodgrove.Management")
        .marker("woodgrove/data-plane/widgets/v1")
        .swagger("woodgrove/resource-manager/Microsoft.Woodgrove/widgets/extra/stable/2021-01-01/a.json")
        .swagger("woodgrove/stable/2021-01-01/b.json");

    let record = scan_organization(&tree.org("woodgrove"), tree.root()).unwrap();
    let reasons: Vec<&str> = record
        .non_compliant_folders
        .iter()
        .map(|f| f.reason.as_str())
        .collect();

    assert_eq!(record.typespec_projects.management, 1);
    assert_eq!(record.typespec_projects.data, 1);
    assert_eq!(record.non_compliant_folders.len(), 4, "{reasons:?}");
    assert!(record.compliant_folders.is_empty());
    assert!(reasons
        .iter()
        .any(|r| r.starts_with("Non-compliant management plane TypeSpec structure: woodgrove/Woodgrove.Management")));
    assert!(reasons
        .iter()
        .any(|r| r.starts_with("Non-compliant data plane TypeSpec structure: woodgrove/data-plane/widgets/v1")));
    assert!(reasons.iter().any(|r| r.contains("/extra/stable")));
    assert!(reasons
        .iter()
        .any(|r| r.starts_with("Swagger stable folder not in resource-manager or data-plane structure")));
}

#[test]
fn test_project_inside_version_folder_checked_once() {
    let tree = SpecTree::new();
    tree.marker("contoso/data-plane/widgets/stable")
        .swagger("contoso/data-plane/widgets/stable/2021-01-01/a.json");

    let record = scan_organization(&tree.org("contoso"), tree.root()).unwrap();

    assert_eq!(record.total_folders(), 1);
    assert!(record.non_compliant_folders[0]
        .reason
        .contains("TypeSpec structure"));
}

#[test]
fn test_rpaas_requires_subtype_marker() {
    let tree = SpecTree::new();
    tree.file(
        "contoso/resource-manager/readme.md",
        "# Contoso\n\nThis service is onboarded to RPaaS.\n",
    );
    let record = scan_organization(&tree.org("contoso"), tree.root()).unwrap();
    assert!(!record.is_rpaas_service);

    tree.file(
        "contoso/resource-manager/readme.md",
        "# Contoso\n\n```yaml\nopenapi-subtype: RPaaS\n```\n",
    );
    let record = scan_organization(&tree.org("contoso"), tree.root()).unwrap();
    assert!(record.is_rpaas_service);
}

#[test]
fn test_data_plane_swagger_needs_swagger_or_openapi_name() {
    let tree = SpecTree::new();
    tree.swagger("contoso/data-plane/widgets/stable/2021-01-01/widgets.json");
    let record = scan_organization(&tree.org("contoso"), tree.root()).unwrap();
    assert!(!record.has_data_plane_swagger);
    assert_eq!(record.swagger_files.data, 1);

    tree.swagger("contoso/data-plane/widgets/stable/2021-01-01/WidgetsSwagger.json");
    let record = scan_organization(&tree.org("contoso"), tree.root()).unwrap();
    assert!(record.has_data_plane_swagger);
    assert!(record.has_data_plane());
}

#[test]
fn test_version_folder_outside_planes_counts_for_no_plane() {
    let tree = SpecTree::new();
    tree.marker("contoso/data-plane/widgets")
        .swagger("contoso/data-plane/widgets/stable/2021-01-01/a.json")
        .swagger("contoso/legacy/stable/2020-01-01/b.json");

    let record = scan_organization(&tree.org("contoso"), tree.root()).unwrap();

    assert_eq!(record.typespec_projects.data, 1);
    assert!(record.is_simple_structure);
    // The stray folder is still reported by the rule table
    assert_eq!(
        record.non_compliant_folders[0].path,
        "contoso/legacy/stable"
    );
}

#[test]
fn test_data_plane_swagger_name_may_mention_examples() {
    let tree = SpecTree::new();
    tree.swagger("contoso/data-plane/widgets/examples/openapi.json");
    let record = scan_organization(&tree.org("contoso"), tree.root()).unwrap();
    assert!(!record.has_data_plane_swagger);

    tree.swagger("contoso/data-plane/widgets/stable/2021-01-01/openapi-examples.json");
    let record = scan_organization(&tree.org("contoso"), tree.root()).unwrap();
    assert!(record.has_data_plane_swagger);
    // Still not a definition file for the counts
    assert_eq!(record.total_swagger_files, 0);
}
