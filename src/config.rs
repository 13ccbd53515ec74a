//! Run configuration.
//!
//! Settings come from, in order of precedence: command-line flags,
//! `FOLDSCAN_*` environment variables, an optional `foldscan.toml`, and
//! built-in defaults.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::scan::driver::DEFAULT_EXCLUDES;
use crate::scan::ScanOptions;

/// Config file looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "foldscan.toml";

pub const ENV_ROOT: &str = "FOLDSCAN_ROOT";
pub const ENV_OUTPUT_DIR: &str = "FOLDSCAN_OUTPUT_DIR";

/// Output written by `foldscan scan`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Report and summary CSV files
    #[default]
    Csv,
    /// One JSON document with every record
    Json,
    /// Terminal summary only
    Table,
}

/// Contents of `foldscan.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub exclude: Option<Vec<String>>,
    pub organizations: Option<Vec<String>>,
    pub log_json: Option<bool>,
}

impl FileConfig {
    /// Load an explicit config file, or `foldscan.toml` from `cwd` if present.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = cwd.join(CONFIG_FILE_NAME);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&content, &path)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub organizations: Vec<String>,
}

/// Fully resolved settings for one scan.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub format: ReportFormat,
    pub scan: ScanOptions,
}

impl Settings {
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self, ConfigError> {
        let root = overrides
            .root
            .or_else(|| env_path(ENV_ROOT))
            .or(file.root)
            .ok_or(ConfigError::MissingRoot)?;

        let output_dir = overrides
            .output_dir
            .or_else(|| env_path(ENV_OUTPUT_DIR))
            .or(file.output_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let organizations = if overrides.organizations.is_empty() {
            file.organizations
        } else {
            Some(overrides.organizations)
        };

        Ok(Self {
            root,
            output_dir,
            format: overrides.format.or(file.format).unwrap_or_default(),
            scan: ScanOptions {
                exclude: file
                    .exclude
                    .unwrap_or_else(|| DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()),
                organizations,
            },
        })
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
