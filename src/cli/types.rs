use std::path::PathBuf;

use clap::{Parser, Subcommand};
use foldscan::config::ReportFormat;

const HELP_TEMPLATE: &str = "
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "foldscan")]
#[command(about = "Folder structure v2 compliance scanner", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Show debug logs (FOLDSCAN_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a foldscan.toml config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan every organization under the specification root and write a report
    Scan {
        /// Specification root (the folder holding one folder per organization)
        root: Option<PathBuf>,

        /// Directory the report files are written to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        /// Only scan this organization (repeatable)
        #[arg(long = "org")]
        orgs: Vec<String>,
    },

    /// Check a single folder against folder structure v2
    Check {
        /// Folder to check
        dir: PathBuf,

        /// Specification root (defaults to the nearest `specification` ancestor)
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Check a README for API version drift in its default tag
    Readme {
        /// Path to the readme.md
        file: PathBuf,
    },
}
