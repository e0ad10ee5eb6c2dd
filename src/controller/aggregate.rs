use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{
    HOLES_PER_BLOCK, HOLES_PER_ROUND, HoleRecord, Outcome, PlayerId, RateTable, SpecialTier,
};

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub iron: u32,
    pub diamond: u32,
}

impl OutcomeCounts {
    fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::None => {}
            Outcome::Gold => self.gold += 1,
            Outcome::Silver => self.silver += 1,
            Outcome::Bronze => self.bronze += 1,
            Outcome::Iron => self.iron += 1,
            Outcome::Diamond => self.diamond += 1,
        }
    }

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

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpecialCounts {
    pub birdie: u32,
    pub eagle: u32,
    pub albatross: u32,
}

impl SpecialCounts {
    fn add(&mut self, tier: SpecialTier) {
        match tier {
            SpecialTier::Birdie => self.birdie += 1,
            SpecialTier::Eagle => self.eagle += 1,
            SpecialTier::Albatross => self.albatross += 1,
        }
    }

    #[must_use]
    pub fn get(&self, tier: SpecialTier) -> u32 {
        match tier {
            SpecialTier::Birdie => self.birdie,
            SpecialTier::Eagle => self.eagle,
            SpecialTier::Albatross => self.albatross,
        }
    }
}

/// One player's category totals over a set of hole records.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    pub outcomes: OutcomeCounts,
    pub special: SpecialCounts,
    pub miss_total: u32,
    pub putt_total: u32,
    pub holes_played: u32,
    pub score_to_par: i64,
    pub out_blocks: Vec<u8>,
}

impl CategoryTotals {
    fn add(&mut self, record: &HoleRecord) {
        self.outcomes.add(record.outcome());
        if let Some(tier) = record.special_tier() {
            self.special.add(tier);
        }
        self.miss_total = self.miss_total.saturating_add(u32::from(record.miss_count()));
        self.putt_total = self.putt_total.saturating_add(u32::from(record.putts()));
        self.holes_played = self.holes_played.saturating_add(1);
        self.score_to_par += i64::from(record.stroke_diff());
        if record.out() {
            self.out_blocks.push(record.block());
            self.out_blocks.sort_unstable();
        }
    }

    /// Pot-game points at the given rates.
    #[must_use]
    pub fn olympic_points(&self, rates: &RateTable) -> u64 {
        Outcome::RATED
            .iter()
            .map(|&o| u64::from(self.outcomes.get(o)) * u64::from(rates.get(o)))
            .sum()
    }

    #[must_use]
    pub fn special_points(&self) -> u64 {
        [SpecialTier::Birdie, SpecialTier::Eagle, SpecialTier::Albatross]
            .iter()
            .map(|&t| u64::from(self.special.get(t)) * u64::from(t.points()))
            .sum()
    }

    /// Gross strokes for a complete round; `None` until all 18 holes are in.
    #[must_use]
    pub fn total_strokes(&self, par: u16) -> Option<i64> {
        (self.holes_played == u32::from(HOLES_PER_ROUND))
            .then(|| i64::from(par) + self.score_to_par)
    }
}

pub type PerPlayerCategoryTotals = BTreeMap<PlayerId, CategoryTotals>;

/// Sum each player's records into category totals. Informational only.
#[must_use]
pub fn aggregate(records: &[HoleRecord]) -> PerPlayerCategoryTotals {
    let mut totals = PerPlayerCategoryTotals::new();
    for record in records {
        totals
            .entry(record.player_id().clone())
            .or_default()
            .add(record);
    }
    totals
}

/// Out flag holder for one block; `player_id` is `None` when nobody went out.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BlockOut {
    pub block: u8,
    pub hole: u8,
    pub player_id: Option<PlayerId>,
}

/// One entry per block of the round, in hole order. Expects validated records.
#[must_use]
pub fn block_outs(records: &[HoleRecord]) -> Vec<BlockOut> {
    (HOLES_PER_BLOCK..=HOLES_PER_ROUND)
        .step_by(usize::from(HOLES_PER_BLOCK))
        .map(|hole| BlockOut {
            block: hole / HOLES_PER_BLOCK,
            hole,
            player_id: records
                .iter()
                .find(|r| r.hole() == hole && r.out())
                .map(|r| r.player_id().clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HoleRecordInput;

    #[test]
    fn sums_per_player() {
        let records = vec![
            HoleRecordInput::new("r1", "p1", 1)
                .stroke_diff(-1)
                .putts(1)
                .outcome("gold")
                .build()
                .unwrap(),
            HoleRecordInput::new("r1", "p1", 2)
                .stroke_diff(2)
                .putts(3)
                .miss_count(2)
                .outcome("gold")
                .build()
                .unwrap(),
            HoleRecordInput::new("r1", "p1", 3)
                .stroke_diff(-2)
                .putts(2)
                .out(true)
                .build()
                .unwrap(),
            HoleRecordInput::new("r1", "p2", 1)
                .miss_count(1)
                .outcome("iron")
                .build()
                .unwrap(),
        ];
        let totals = aggregate(&records);
        let p1 = &totals[&PlayerId::from("p1")];
        assert_eq!(p1.outcomes.gold, 2);
        assert_eq!(p1.special.birdie, 1);
        assert_eq!(p1.special.eagle, 1);
        assert_eq!(p1.miss_total, 2);
        assert_eq!(p1.putt_total, 6);
        assert_eq!(p1.holes_played, 3);
        assert_eq!(p1.score_to_par, -1);
        assert_eq!(p1.out_blocks, vec![1]);
        assert_eq!(p1.special_points(), 4);
        assert_eq!(p1.total_strokes(72), None);

        let rates = RateTable {
            gold: 4,
            iron: 1,
            ..RateTable::default()
        };
        assert_eq!(p1.olympic_points(&rates), 8);
        assert_eq!(totals[&PlayerId::from("p2")].olympic_points(&rates), 1);
    }

    #[test]
    fn full_round_has_total_strokes() {
        let records: Vec<HoleRecord> = (1..=18)
            .map(|h| HoleRecordInput::new("r1", "p1", h).stroke_diff(1).build().unwrap())
            .collect();
        let totals = aggregate(&records);
        assert_eq!(totals[&PlayerId::from("p1")].total_strokes(72), Some(90));
    }

    #[test]
    fn totals_do_not_overflow() {
        let mut totals = CategoryTotals {
            miss_total: u32::MAX - 1,
            putt_total: u32::MAX,
            holes_played: u32::MAX,
            special: SpecialCounts {
                birdie: u32::MAX,
                eagle: u32::MAX,
                albatross: u32::MAX,
            },
            ..CategoryTotals::default()
        };
        let record = HoleRecordInput::new("r1", "p1", 1)
            .putts(2)
            .miss_count(5)
            .build()
            .unwrap();
        totals.add(&record);
        assert_eq!(totals.miss_total, u32::MAX);
        assert_eq!(totals.putt_total, u32::MAX);
        assert_eq!(totals.holes_played, u32::MAX);
        assert_eq!(totals.special_points(), u64::from(u32::MAX) * (1 + 3 + 5));
    }

    #[test]
    fn block_outs_cover_all_six_blocks() {
        let records = vec![
            HoleRecordInput::new("r1", "p2", 9).out(true).build().unwrap(),
            HoleRecordInput::new("r1", "p1", 9).build().unwrap(),
        ];
        let outs = block_outs(&records);
        assert_eq!(outs.len(), 6);
        assert_eq!(outs[2].hole, 9);
        assert_eq!(outs[2].block, 3);
        assert_eq!(outs[2].player_id, Some(PlayerId::from("p2")));
        assert!(outs.iter().filter(|b| b.hole != 9).all(|b| b.player_id.is_none()));
    }
}
