mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use foldscan::config::FileConfig;
use foldscan::logging;

use cli::{dispatch, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let file_config = FileConfig::load(cli.config.as_deref(), &cwd)?;

    let log_json = cli.log_json || file_config.log_json.unwrap_or(false);
    logging::init(cli.verbose, log_json);

    dispatch(cli.command, file_config)
}
