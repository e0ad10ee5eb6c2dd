use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::{BlockOut, CategoryTotals, PerPlayerCategoryTotals, aggregate, block_outs};
use super::events::extract_events;
use super::settlement::settle;
use super::validation::validate_round;
use crate::error::SettleError;
use crate::model::{Balance, HoleRecord, Player, RateTable, RoundConfig, TransferMatrix};

/// Everything the scoreboard needs for one round.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundSettlement {
    pub round_id: String,
    pub par: u16,
    pub play_date: Option<NaiveDate>,
    pub place: Option<String>,
    pub players: Vec<Player>,
    pub rates: RateTable,
    pub event_count: usize,
    pub balance: Balance,
    pub matrix: TransferMatrix,
    pub totals: PerPlayerCategoryTotals,
    pub block_outs: Vec<BlockOut>,
}

impl RoundSettlement {
    /// Totals for a player of this round; `None` if the player is not in it.
    /// Participants without records have all-zero totals.
    #[must_use]
    pub fn totals_for(&self, player: &Player) -> Option<&CategoryTotals> {
        self.totals.get(&player.id)
    }
}

/// Validate, extract, settle and aggregate one round.
///
/// Out flags are validated and reported in `block_outs` but never change balances.
///
/// # Errors
/// Any validation error for the record set, or a settlement error (for instance
/// `InsufficientPlayers` for a one-player round).
pub fn settle_round(
    config: &RoundConfig,
    records: &[HoleRecord],
) -> Result<RoundSettlement, SettleError> {
    validate_round(config, records)?;
    let events = extract_events(records, config);
    let (balance, matrix) = settle(&events, config.players())?;

    let mut totals = aggregate(records);
    for player in config.players() {
        totals.entry(player.id.clone()).or_default();
    }

    Ok(RoundSettlement {
        round_id: config.id().to_string(),
        par: config.par(),
        play_date: config.play_date(),
        place: config.place().map(str::to_string),
        players: config.players().to_vec(),
        rates: *config.rates(),
        event_count: events.len(),
        balance,
        matrix,
        totals,
        block_outs: block_outs(records),
    })
}
