use ahash::RandomState;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::SettleError;
use crate::model::score::Outcome;
use crate::model::types::{
    HOLES_PER_ROUND, HoleRecord, MAX_PLAYERS, Player, PlayerId, RateTable, RoundConfig,
    is_block_terminal,
};

pub const PAR_RANGE: (i64, i64) = (18, 108);
pub const STROKE_DIFF_RANGE: (i64, i64) = (-3, 20);
pub const PUTT_RANGE: (i64, i64) = (0, 5);
pub const MISS_RANGE: (i64, i64) = (0, 20);
pub const RATE_RANGE: (i64, i64) = (0, u32::MAX as i64);

fn check_range(field: &'static str, value: i64, range: (i64, i64)) -> Result<i64, SettleError> {
    let (min, max) = range;
    if value < min || value > max {
        return Err(SettleError::out_of_range(field, value, min, max));
    }
    Ok(value)
}

/// Rate table as it arrives from a file; negative rates are caught at conversion.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RateTableInput {
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub iron: i64,
    pub diamond: i64,
}

impl TryFrom<RateTableInput> for RateTable {
    type Error = SettleError;

    fn try_from(input: RateTableInput) -> Result<Self, Self::Error> {
        // range already bounds the value to u32
        let rate = |field: &'static str, value: i64| {
            check_range(field, value, RATE_RANGE).map(|v| v as u32)
        };
        Ok(Self {
            gold: rate("rates.gold", input.gold)?,
            silver: rate("rates.silver", input.silver)?,
            bronze: rate("rates.bronze", input.bronze)?,
            iron: rate("rates.iron", input.iron)?,
            diamond: rate("rates.diamond", input.diamond)?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundConfigInput {
    pub id: String,
    #[serde(default = "default_par")]
    pub par: i64,
    pub players: Vec<Player>,
    #[serde(default)]
    pub rates: RateTableInput,
    #[serde(default)]
    pub play_date: Option<NaiveDate>,
    #[serde(default)]
    pub place: Option<String>,
}

fn default_par() -> i64 {
    72
}

impl RoundConfigInput {
    #[must_use]
    pub fn new(id: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            id: id.into(),
            par: default_par(),
            players,
            rates: RateTableInput::default(),
            play_date: None,
            place: None,
        }
    }

    #[must_use]
    pub fn rates(mut self, rates: RateTableInput) -> Self {
        self.rates = rates;
        self
    }

    #[must_use]
    pub fn par(mut self, par: i64) -> Self {
        self.par = par;
        self
    }

    /// # Errors
    /// See `TryFrom<RoundConfigInput> for RoundConfig`.
    pub fn build(self) -> Result<RoundConfig, SettleError> {
        RoundConfig::try_from(self)
    }
}

impl TryFrom<RoundConfigInput> for RoundConfig {
    type Error = SettleError;

    fn try_from(input: RoundConfigInput) -> Result<Self, Self::Error> {
        let par = check_range("par", input.par, PAR_RANGE)?;
        check_range("players", input.players.len() as i64, (1, MAX_PLAYERS as i64))?;
        let mut seen: HashSet<&PlayerId, RandomState> = HashSet::default();
        for player in &input.players {
            if !seen.insert(&player.id) {
                return Err(SettleError::DuplicatePlayer(player.id.clone()));
            }
        }
        let rates = RateTable::try_from(input.rates)?;
        Ok(Self {
            id: input.id,
            par: par as u16,
            players: input.players,
            rates,
            play_date: input.play_date,
            place: input.place.filter(|p| !p.trim().is_empty()),
        })
    }
}

/// A hole record as it arrives from the record store or a form.
///
/// Field aliases match the score sheet column names (`putt`, `snake`, `olympic`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleRecordInput {
    pub round_id: String,
    pub player_id: String,
    pub hole: i64,
    #[serde(default)]
    pub stroke_diff: i64,
    #[serde(default, alias = "putt")]
    pub putts: i64,
    #[serde(default, alias = "snake")]
    pub miss_count: i64,
    #[serde(default, alias = "olympic")]
    pub outcome: String,
    #[serde(default)]
    pub out: bool,
}

impl HoleRecordInput {
    #[must_use]
    pub fn new(round_id: impl Into<String>, player_id: impl Into<String>, hole: i64) -> Self {
        Self {
            round_id: round_id.into(),
            player_id: player_id.into(),
            hole,
            stroke_diff: 0,
            putts: 0,
            miss_count: 0,
            outcome: String::new(),
            out: false,
        }
    }

    #[must_use]
    pub fn stroke_diff(mut self, diff: i64) -> Self {
        self.stroke_diff = diff;
        self
    }

    #[must_use]
    pub fn putts(mut self, putts: i64) -> Self {
        self.putts = putts;
        self
    }

    #[must_use]
    pub fn miss_count(mut self, misses: i64) -> Self {
        self.miss_count = misses;
        self
    }

    #[must_use]
    pub fn outcome(mut self, label: impl Into<String>) -> Self {
        self.outcome = label.into();
        self
    }

    #[must_use]
    pub fn out(mut self, out: bool) -> Self {
        self.out = out;
        self
    }

    /// # Errors
    /// See `TryFrom<HoleRecordInput> for HoleRecord`.
    pub fn build(self) -> Result<HoleRecord, SettleError> {
        HoleRecord::try_from(self)
    }
}

impl TryFrom<HoleRecordInput> for HoleRecord {
    type Error = SettleError;

    fn try_from(input: HoleRecordInput) -> Result<Self, Self::Error> {
        let hole = check_range("hole", input.hole, (1, i64::from(HOLES_PER_ROUND)))? as u8;
        let stroke_diff = check_range("stroke_diff", input.stroke_diff, STROKE_DIFF_RANGE)? as i8;
        let putts = check_range("putts", input.putts, PUTT_RANGE)? as u8;
        let miss_count = check_range("miss_count", input.miss_count, MISS_RANGE)? as u8;
        let outcome = Outcome::from_label(&input.outcome)?;
        if input.out && !is_block_terminal(hole) {
            // the flag only exists on holes 3, 6, .., 18
            return Err(SettleError::out_of_range("out", i64::from(hole), 3, 18));
        }
        Ok(Self {
            round_id: input.round_id,
            player_id: PlayerId::from(input.player_id),
            hole,
            stroke_diff,
            putts,
            miss_count,
            outcome,
            out: input.out,
        })
    }
}

/// The on-disk shape of one round: its configuration and every hole record.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundFile {
    pub round: RoundConfigInput,
    #[serde(default)]
    pub records: Vec<HoleRecordInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> Vec<Player> {
        vec![Player::new("p1", "Aki"), Player::new("p2", "Ben")]
    }

    #[test]
    fn builds_valid_record() {
        let record = HoleRecordInput::new("r1", "p1", 6)
            .stroke_diff(-2)
            .putts(1)
            .miss_count(3)
            .outcome("銀")
            .out(true)
            .build()
            .unwrap();
        assert_eq!(record.hole(), 6);
        assert_eq!(record.stroke_diff(), -2);
        assert_eq!(record.outcome(), Outcome::Silver);
        assert!(record.out());
        assert_eq!(record.key().to_string(), "r1_p1_6");
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let err = HoleRecordInput::new("r1", "p1", 19).build().unwrap_err();
        assert!(matches!(err, SettleError::OutOfRangeValue { field: "hole", value: 19, .. }));

        let err = HoleRecordInput::new("r1", "p1", 1)
            .stroke_diff(-4)
            .build()
            .unwrap_err();
        assert!(matches!(err, SettleError::OutOfRangeValue { field: "stroke_diff", .. }));

        let err = HoleRecordInput::new("r1", "p1", 1).putts(6).build().unwrap_err();
        assert!(matches!(err, SettleError::OutOfRangeValue { field: "putts", .. }));

        let err = HoleRecordInput::new("r1", "p1", 1)
            .miss_count(-1)
            .build()
            .unwrap_err();
        assert!(matches!(err, SettleError::OutOfRangeValue { field: "miss_count", .. }));
    }

    #[test]
    fn rejects_out_flag_off_block_end() {
        let err = HoleRecordInput::new("r1", "p1", 4).out(true).build().unwrap_err();
        assert!(matches!(err, SettleError::OutOfRangeValue { field: "out", value: 4, .. }));
    }

    #[test]
    fn rejects_unknown_outcome_label() {
        let err = HoleRecordInput::new("r1", "p1", 1)
            .outcome("platinum")
            .build()
            .unwrap_err();
        assert_eq!(err, SettleError::InvalidOutcome("platinum".to_string()));
    }

    #[test]
    fn round_config_checks() {
        let ok = RoundConfigInput::new("r1", players()).build().unwrap();
        assert_eq!(ok.par(), 72);

        let err = RoundConfigInput::new("r1", vec![]).build().unwrap_err();
        assert!(matches!(err, SettleError::OutOfRangeValue { field: "players", .. }));

        let five = (1..=5)
            .map(|i| Player::new(format!("p{i}"), format!("P{i}")))
            .collect();
        let err = RoundConfigInput::new("r1", five).build().unwrap_err();
        assert!(matches!(err, SettleError::OutOfRangeValue { field: "players", value: 5, .. }));

        let dup = vec![Player::new("p1", "Aki"), Player::new("p1", "Aki again")];
        let err = RoundConfigInput::new("r1", dup).build().unwrap_err();
        assert_eq!(err, SettleError::DuplicatePlayer(PlayerId::from("p1")));

        let err = RoundConfigInput::new("r1", players())
            .rates(RateTableInput {
                gold: -1,
                ..RateTableInput::default()
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, SettleError::OutOfRangeValue { field: "rates.gold", .. }));

        let err = RoundConfigInput::new("r1", players()).par(0).build().unwrap_err();
        assert!(matches!(err, SettleError::OutOfRangeValue { field: "par", .. }));
    }

    #[test]
    fn deserializes_sheet_column_names() {
        let json = r#"{"round_id":"r1","player_id":"p1","hole":3,"putt":2,"snake":1,"olympic":"金"}"#;
        let input: HoleRecordInput = serde_json::from_str(json).unwrap();
        let record = input.build().unwrap();
        assert_eq!(record.putts(), 2);
        assert_eq!(record.miss_count(), 1);
        assert_eq!(record.outcome(), Outcome::Gold);
    }
}
