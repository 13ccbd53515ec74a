//! CSV rendering of the report and summary tables.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{ReportRow, REPORT_CSV, SUMMARY_CSV};
use crate::models::Summary;
use crate::scan::ScanReport;

/// Quote a field when it holds a delimiter, quote or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_line<W: Write>(out: &mut W, fields: &[String]) -> std::io::Result<()> {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    writeln!(out, "{}", line.join(","))
}

pub fn write_rows<W: Write>(out: &mut W, rows: &[ReportRow]) -> std::io::Result<()> {
    let headers: Vec<String> = ReportRow::HEADERS.iter().map(|h| h.to_string()).collect();
    write_line(out, &headers)?;
    for row in rows {
        write_line(out, &row.cells())?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> std::io::Result<()> {
    write_line(out, &["Metric".to_string(), "Count".to_string()])?;
    for (metric, count) in summary.metrics() {
        write_line(out, &[metric.to_string(), count.to_string()])?;
    }
    Ok(())
}

/// Write both CSV files into `dir` and return their paths.
pub fn write_reports(report: &ScanReport, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let rows: Vec<ReportRow> = report.organizations.iter().map(ReportRow::from).collect();

    let report_path = dir.join(REPORT_CSV);
    let mut buf = Vec::new();
    write_rows(&mut buf, &rows)?;
    std::fs::write(&report_path, buf)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;

    let summary_path = dir.join(SUMMARY_CSV);
    let mut buf = Vec::new();
    write_summary(&mut buf, &report.summary)?;
    std::fs::write(&summary_path, buf)
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;

    Ok(vec![report_path, summary_path])
}
