#![allow(dead_code)]

use rusty_golf_settle::model::{
    Balance, HoleRecord, HoleRecordInput, Player, PlayerId, RateTableInput, RoundConfig,
    RoundConfigInput,
};

pub const ROUND_ID: &str = "202405011030";

pub fn players(n: usize) -> Vec<Player> {
    (1..=n)
        .map(|i| Player::new(format!("P{i}"), format!("Player {i}")))
        .collect()
}

pub fn rates() -> RateTableInput {
    RateTableInput {
        gold: 4,
        silver: 3,
        bronze: 2,
        iron: 1,
        diamond: 10,
    }
}

pub fn round(n: usize) -> RoundConfig {
    RoundConfigInput::new(ROUND_ID, players(n))
        .rates(rates())
        .build()
        .expect("valid round config")
}

pub fn hole(player: &str, hole: i64) -> HoleRecordInput {
    HoleRecordInput::new(ROUND_ID, player, hole)
}

pub fn built(input: HoleRecordInput) -> HoleRecord {
    input.build().expect("valid hole record")
}

pub fn net(balance: &Balance, player: &str) -> i64 {
    balance
        .get(&PlayerId::from(player))
        .unwrap_or_else(|| panic!("no balance for {player}"))
}
