use ahash::RandomState;
use std::collections::{BTreeMap, HashSet};

use crate::error::SettleError;
use crate::model::{HoleRecord, PlayerId, RecordKey, RoundConfig};

/// Check a record set before it is settled: one record per (round, player, hole) and
/// at most one out flag per 3-hole block.
///
/// # Errors
/// `DuplicateRecordKey` for the first repeated key, `MultipleBlockWinners` for the
/// first block (by round, then hole) with more than one out flag.
pub fn validate(records: &[HoleRecord]) -> Result<(), SettleError> {
    check_unique_keys(records)?;
    check_block_exclusivity(records)
}

/// `validate`, plus every record must belong to `config`'s round and players.
///
/// # Errors
/// `RoundMismatch` or `UnknownPlayer` for the first foreign record, then anything
/// `validate` returns.
pub fn validate_round(config: &RoundConfig, records: &[HoleRecord]) -> Result<(), SettleError> {
    for record in records {
        if record.round_id() != config.id() {
            return Err(SettleError::RoundMismatch {
                expected: config.id().to_string(),
                found: record.round_id().to_string(),
            });
        }
        if !config.has_player(record.player_id()) {
            return Err(SettleError::UnknownPlayer {
                round_id: config.id().to_string(),
                player_id: record.player_id().clone(),
            });
        }
    }
    validate(records)
}

fn check_unique_keys(records: &[HoleRecord]) -> Result<(), SettleError> {
    let mut seen: HashSet<RecordKey, RandomState> = HashSet::default();
    for record in records {
        let key = record.key();
        if seen.contains(&key) {
            return Err(SettleError::DuplicateRecordKey {
                round_id: key.round_id,
                player_id: key.player_id,
                hole: key.hole,
            });
        }
        seen.insert(key);
    }
    Ok(())
}

fn check_block_exclusivity(records: &[HoleRecord]) -> Result<(), SettleError> {
    // out is only ever set on a block's last hole, so keying by hole is keying by block
    let mut outs: BTreeMap<(&str, u8), Vec<PlayerId>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.out()) {
        outs.entry((record.round_id(), record.hole()))
            .or_default()
            .push(record.player_id().clone());
    }

    for ((_, hole), mut players) in outs {
        if players.len() > 1 {
            players.sort();
            return Err(SettleError::MultipleBlockWinners {
                block: crate::model::block_of_hole(hole),
                hole,
                players,
            });
        }
    }
    Ok(())
}
