use anyhow::Result;
use foldscan::commands::{check, readme, scan};
use foldscan::config::{FileConfig, Overrides, Settings};

use super::types::Commands;

pub fn dispatch(command: Commands, file_config: FileConfig) -> Result<()> {
    match command {
        Commands::Scan {
            root,
            output,
            format,
            orgs,
        } => {
            let overrides = Overrides {
                root,
                output_dir: output,
                format,
                organizations: orgs,
            };
            scan::execute(Settings::resolve(file_config, overrides)?)
        }
        Commands::Check { dir, root } => check::execute(dir, root),
        Commands::Readme { file } => readme::execute(file),
    }
}
