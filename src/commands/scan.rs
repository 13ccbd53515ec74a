//! Scan command - analyze every organization and write the report.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{ReportFormat, Settings};
use crate::report::{csv, json, terminal};
use crate::scan::run_scan;

/// Execute the scan command
pub fn execute(settings: Settings) -> Result<()> {
    let root = settings
        .root
        .canonicalize()
        .with_context(|| format!("Repository root not found: {}", settings.root.display()))?;

    println!(
        "{} Scanning organizations under {}...",
        "→".cyan().bold(),
        root.display()
    );

    let report = run_scan(&root, &settings.scan)
        .with_context(|| format!("Failed to list organizations in {}", root.display()))?;

    terminal::print_summary(&report);

    let written = match settings.format {
        ReportFormat::Csv => csv::write_reports(&report, &settings.output_dir)?,
        ReportFormat::Json => vec![json::write_report(&report, &settings.output_dir)?],
        ReportFormat::Table => Vec::new(),
    };

    if !written.is_empty() {
        println!("\n{} Report saved:", "✓".green().bold());
        for path in written {
            println!("  {} {}", "→".cyan(), path.display());
        }
    }

    Ok(())
}
