use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::{CleanArgs, RateOverrides};
use crate::model::{HoleRecord, RateTableInput, RoundConfig, RoundFile, collapse_upserts};

impl RateOverrides {
    pub fn apply(&self, rates: &mut RateTableInput) {
        if let Some(v) = self.gold {
            rates.gold = v;
        }
        if let Some(v) = self.silver {
            rates.silver = v;
        }
        if let Some(v) = self.bronze {
            rates.bronze = v;
        }
        if let Some(v) = self.iron {
            rates.iron = v;
        }
        if let Some(v) = self.diamond {
            rates.diamond = v;
        }
    }
}

/// Parse a round file into a validated config and its records.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON, or any value fails
/// validation. With `upsert` off, repeated record keys are left for `validate` to
/// reject.
pub fn read_round_file(
    path: &Path,
    rates: &RateOverrides,
    upsert: bool,
) -> Result<(RoundConfig, Vec<HoleRecord>)> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read round json {}", path.display()))?;
    let mut file: RoundFile = serde_json::from_str(&contents)
        .with_context(|| format!("parse round json {}", path.display()))?;

    rates.apply(&mut file.round.rates);
    let config = RoundConfig::try_from(file.round)
        .with_context(|| format!("round config in {}", path.display()))?;

    let mut records = Vec::with_capacity(file.records.len());
    for (i, input) in file.records.into_iter().enumerate() {
        let record = HoleRecord::try_from(input)
            .with_context(|| format!("records[{i}] in {}", path.display()))?;
        records.push(record);
    }

    if upsert {
        let (collapsed, superseded) = collapse_upserts(records);
        if superseded > 0 {
            log::warn!(
                "{}: {superseded} record(s) superseded by later writes",
                path.display()
            );
        }
        records = collapsed;
    }

    log::debug!(
        "loaded round {} with {} players and {} records",
        config.id(),
        config.players().len(),
        records.len()
    );
    Ok((config, records))
}

/// Load the round named by merged arguments.
///
/// # Errors
/// See `read_round_file`.
pub fn load_round(args: &CleanArgs) -> Result<(RoundConfig, Vec<HoleRecord>)> {
    read_round_file(&args.round_json, &args.rates, args.upsert)
}
