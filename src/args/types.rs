use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Settle a golf round's side games", long_about = None)]
pub struct Cli {
    /// Round file: `{ "round": {..}, "records": [..] }`.
    #[arg(
        short = 'r',
        long,
        value_name = "ROUND_JSON",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub round_json: Option<PathBuf>,
    /// Optional TOML config; command line values win over the file.
    #[arg(
        short = 'c',
        long,
        value_name = "CONFIG_TOML",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub config_toml: Option<PathBuf>,
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Collapse repeated (round, player, hole) records, keeping the last write.
    #[arg(long)]
    pub upsert: bool,
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Rates present here replace the round file's rates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateOverrides {
    pub gold: Option<i64>,
    pub silver: Option<i64>,
    pub bronze: Option<i64>,
    pub iron: Option<i64>,
    pub diamond: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FileConfig {
    pub(crate) round_json: Option<PathBuf>,
    pub(crate) format: Option<OutputFormat>,
    pub(crate) upsert: Option<bool>,
    #[serde(default)]
    pub(crate) rates: RateOverrides,
}

/// Merged command line and file configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanArgs {
    pub round_json: PathBuf,
    pub format: OutputFormat,
    pub upsert: bool,
    pub verbose: bool,
    pub rates: RateOverrides,
}
