pub mod round_file;
pub mod types;
pub mod validation;

pub use round_file::*;
pub use types::*;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::fs;
use types::FileConfig;

#[must_use]
pub fn args_checks() -> Cli {
    Cli::parse()
}

/// Merge command line arguments with the optional TOML file.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, or if no round file
/// was given either way.
pub fn load_config(cli: Cli) -> Result<CleanArgs> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let round_json = cli
        .round_json
        .or(file_config.round_json)
        .ok_or_else(|| anyhow!("missing --round-json"))?;

    Ok(CleanArgs {
        round_json,
        format: cli.format.or(file_config.format).unwrap_or_default(),
        upsert: cli.upsert || file_config.upsert.unwrap_or(false),
        verbose: cli.verbose,
        rates: file_config.rates,
    })
}
