use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::score::{Category, Outcome, SpecialTier};

pub const HOLES_PER_ROUND: u8 = 18;
pub const HOLES_PER_BLOCK: u8 = 3;
pub const MAX_PLAYERS: usize = 4;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    #[must_use]
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Points per pot-game outcome.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateTable {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub iron: u32,
    pub diamond: u32,
}

impl RateTable {
    #[must_use]
    pub fn get(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::None => 0,
            Outcome::Gold => self.gold,
            Outcome::Silver => self.silver,
            Outcome::Bronze => self.bronze,
            Outcome::Iron => self.iron,
            Outcome::Diamond => self.diamond,
        }
    }
}

/// A validated round. Build it from a `RoundConfigInput`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundConfig {
    pub(crate) id: String,
    pub(crate) par: u16,
    pub(crate) players: Vec<Player>,
    pub(crate) rates: RateTable,
    pub(crate) play_date: Option<NaiveDate>,
    pub(crate) place: Option<String>,
}

impl RoundConfig {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn par(&self) -> u16 {
        self.par
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    #[must_use]
    pub fn play_date(&self) -> Option<NaiveDate> {
        self.play_date
    }

    #[must_use]
    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    #[must_use]
    pub fn has_player(&self, id: &PlayerId) -> bool {
        self.players.iter().any(|p| &p.id == id)
    }

    /// Rates stay editable after the round is created; settlement always reads the
    /// current table.
    pub fn set_rates(&mut self, rates: RateTable) {
        self.rates = rates;
    }
}

/// Identity of a hole record: one player, one hole, one round.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub round_id: String,
    pub player_id: PlayerId,
    pub hole: u8,
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.round_id, self.player_id, self.hole)
    }
}

/// One player's validated result on one hole. Build it from a `HoleRecordInput`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleRecord {
    pub(crate) round_id: String,
    pub(crate) player_id: PlayerId,
    pub(crate) hole: u8,
    pub(crate) stroke_diff: i8,
    pub(crate) putts: u8,
    pub(crate) miss_count: u8,
    pub(crate) outcome: Outcome,
    pub(crate) out: bool,
}

impl HoleRecord {
    #[must_use]
    pub fn round_id(&self) -> &str {
        &self.round_id
    }

    #[must_use]
    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    #[must_use]
    pub fn hole(&self) -> u8 {
        self.hole
    }

    #[must_use]
    pub fn stroke_diff(&self) -> i8 {
        self.stroke_diff
    }

    #[must_use]
    pub fn putts(&self) -> u8 {
        self.putts
    }

    #[must_use]
    pub fn miss_count(&self) -> u8 {
        self.miss_count
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Only ever true on the last hole of a block.
    #[must_use]
    pub fn out(&self) -> bool {
        self.out
    }

    #[must_use]
    pub fn special_tier(&self) -> Option<SpecialTier> {
        SpecialTier::from_stroke_diff(self.stroke_diff)
    }

    /// 1-based block index covering this hole.
    #[must_use]
    pub fn block(&self) -> u8 {
        block_of_hole(self.hole)
    }

    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey {
            round_id: self.round_id.clone(),
            player_id: self.player_id.clone(),
            hole: self.hole,
        }
    }
}

#[must_use]
pub fn block_of_hole(hole: u8) -> u8 {
    hole.div_ceil(HOLES_PER_BLOCK)
}

#[must_use]
pub fn is_block_terminal(hole: u8) -> bool {
    hole % HOLES_PER_BLOCK == 0
}

/// A single scoring fact derived from a hole record.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub round_id: String,
    pub player_id: PlayerId,
    pub category: Category,
    pub magnitude: u32,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BalanceEntry {
    pub player_id: PlayerId,
    pub net: i64,
}

/// Net points per player, in player display order.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Balance {
    pub(crate) entries: Vec<BalanceEntry>,
}

impl Balance {
    #[must_use]
    pub fn get(&self, player_id: &PlayerId) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| &e.player_id == player_id)
            .map(|e| e.net)
    }

    #[must_use]
    pub fn entries(&self) -> &[BalanceEntry] {
        &self.entries
    }

    /// Always 0 for a balance produced by settlement.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.entries.iter().map(|e| e.net).sum()
    }
}

/// `owed[a][b]` is what player `a` owes player `b`; negative means `a` is owed.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TransferMatrix {
    pub(crate) players: Vec<PlayerId>,
    pub(crate) owed: Vec<Vec<i64>>,
}

impl TransferMatrix {
    pub(crate) fn zeroed(players: Vec<PlayerId>) -> Self {
        let n = players.len();
        Self {
            players,
            owed: vec![vec![0; n]; n],
        }
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// What `from` owes `to`. `None` for unknown players or `from == to`.
    #[must_use]
    pub fn owes(&self, from: &PlayerId, to: &PlayerId) -> Option<i64> {
        let a = self.index_of(from)?;
        let b = self.index_of(to)?;
        if a == b {
            return None;
        }
        Some(self.owed[a][b])
    }

    /// Every ordered pair of distinct players with the amount the first owes the second.
    pub fn pairs(&self) -> impl Iterator<Item = (&PlayerId, &PlayerId, i64)> + '_ {
        self.players.iter().enumerate().flat_map(move |(a, from)| {
            self.players
                .iter()
                .enumerate()
                .filter(move |(b, _)| *b != a)
                .map(move |(b, to)| (from, to, self.owed[a][b]))
        })
    }

    #[must_use]
    pub fn is_antisymmetric(&self) -> bool {
        let n = self.players.len();
        (0..n).all(|a| self.owed[a][a] == 0 && (0..n).all(|b| self.owed[a][b] == -self.owed[b][a]))
    }

    fn index_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p == id)
    }
}
