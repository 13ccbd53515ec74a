//! Colored terminal summary.

use colored::Colorize;

use crate::models::{ComplianceVerdict, Summary};
use crate::readme::{Skip, VersionCheck};
use crate::scan::ScanReport;

/// Plain-text summary lines, shared by the terminal output and tests.
pub fn summary_lines(summary: &Summary) -> Vec<String> {
    vec![
        format!("Total organizations analyzed: {}", summary.total_organizations),
        format!(
            "Fully compliant organizations: {}",
            summary.fully_compliant_organizations
        ),
        format!(
            "Total TypeSpec projects: {}",
            summary.typespec_projects.total()
        ),
        format!(
            "  - Management plane TypeSpec: {}",
            summary.typespec_projects.management
        ),
        format!("  - Data plane TypeSpec: {}", summary.typespec_projects.data),
        format!("Total Swagger files: {}", summary.total_swagger_files),
        format!(
            "  - Management plane Swagger: {}",
            summary.swagger_files.management
        ),
        format!("  - Data plane Swagger: {}", summary.swagger_files.data),
        format!("Total folders analyzed: {}", summary.total_folders),
        format!(
            "Folder structure v2 compliant folders: {}",
            summary.compliant_folders
        ),
        format!(
            "Folder structure v2 non-compliant folders: {}",
            summary.non_compliant_folders
        ),
    ]
}

pub fn print_summary(report: &ScanReport) {
    println!("\n{}", "=== SUMMARY ===".bold().blue());
    for line in summary_lines(&report.summary) {
        println!("{line}");
    }

    println!("\n{}", "Metrics".bold());
    for (metric, count) in report.summary.metrics() {
        println!("  {metric}: {count}");
    }

    let failed: Vec<_> = report.failed().collect();
    if !failed.is_empty() {
        println!("\n{}", "Failed organizations".bold().red());
        for record in failed {
            println!(
                "  {} {}: {}",
                "✗".red(),
                record.organization,
                record.error.as_deref().unwrap_or_default()
            );
        }
    }
}

/// Follow-up line for a non-compliant verdict.
pub fn verdict_hint(verdict: &ComplianceVerdict) -> Option<&'static str> {
    let violation = verdict.violation()?;
    if violation.is_structural() {
        Some("move the folder to the mandated depth under resource-manager or data-plane")
    } else {
        Some("the location is right; rename the namespace or service folder")
    }
}

pub fn print_verdict(rel_path: &str, verdict: &ComplianceVerdict) {
    if verdict.is_compliant() {
        println!("{} {rel_path}", "✓".green().bold());
    } else {
        println!("{} {rel_path}", "✗".red().bold());
    }
    println!("  {}", verdict.reason());
    if let Some(hint) = verdict_hint(verdict) {
        println!("  {} {}", "→".cyan(), hint.dimmed());
    }
}

pub fn print_version_check(path: &str, check: &VersionCheck) {
    match check {
        VersionCheck::NotApplicable(skip) => {
            println!("{} {path}: not applicable ({skip})", "-".dimmed());
            if matches!(skip, Skip::InvalidBlock { .. }) {
                println!("  the tag block could not be parsed as yaml");
            }
        }
        VersionCheck::Checked {
            tag,
            input_files,
            versions,
        } => {
            let versions: Vec<&str> = versions.iter().map(String::as_str).collect();
            if check.has_uniformity_issue() {
                println!("{} {path}: default tag mixes API versions", "✗".red().bold());
            } else {
                println!("{} {path}: default tag uses one API version", "✓".green().bold());
            }
            println!("  Tag:         {tag}");
            println!("  Input files: {}", input_files.len());
            println!("  Versions:    {}", versions.join(", "));
        }
    }
}
