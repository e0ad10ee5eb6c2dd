use anyhow::{Context, Result};
use rusty_golf_settle::args::{self, OutputFormat, load_round};
use rusty_golf_settle::settle_round;
use rusty_golf_settle::view::{render_settlement_html, render_summary_text};

fn main() -> Result<()> {
    let cli = args::args_checks();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();
    let args = args::load_config(cli)?;

    let (config, records) = load_round(&args)?;
    let report = settle_round(&config, &records)
        .with_context(|| format!("settle round {}", config.id()))?;

    let output = match args.format {
        OutputFormat::Text => render_summary_text(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Html => render_settlement_html(&report).into_string(),
    };
    println!("{output}");
    Ok(())
}
