use crate::model::PlayerId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettleError {
    #[error("invalid pot-game outcome: {0:?}")]
    InvalidOutcome(String),
    #[error("duplicate record for round {round_id}, player {player_id}, hole {hole}")]
    DuplicateRecordKey {
        round_id: String,
        player_id: PlayerId,
        hole: u8,
    },
    #[error("block {block} (hole {hole}) has more than one out flag: {players:?}")]
    MultipleBlockWinners {
        block: u8,
        hole: u8,
        players: Vec<PlayerId>,
    },
    #[error("settlement needs at least 2 players, got {0}")]
    InsufficientPlayers(usize),
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    OutOfRangeValue {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("player {player_id} is not part of round {round_id}")]
    UnknownPlayer {
        round_id: String,
        player_id: PlayerId,
    },
    #[error("player {0} listed more than once")]
    DuplicatePlayer(PlayerId),
    #[error("expected round {expected}, found {found}")]
    RoundMismatch { expected: String, found: String },
    #[error("settlement invariant violated: {0}")]
    InvariantViolated(String),
}

impl SettleError {
    pub(crate) fn out_of_range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRangeValue {
            field,
            value,
            min,
            max,
        }
    }
}
