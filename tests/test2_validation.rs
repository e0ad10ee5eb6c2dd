mod common;

use common::{ROUND_ID, built, hole, round};
use rusty_golf_settle::model::{HoleRecordInput, PlayerId};
use rusty_golf_settle::{SettleError, settle_round, validate, validate_round};

#[test]
fn scenario_d_two_outs_on_hole_six() {
    let records = vec![
        built(hole("P1", 6).out(true)),
        built(hole("P2", 6).out(true)),
        built(hole("P3", 6)),
    ];
    let err = validate(&records).unwrap_err();
    assert_eq!(
        err,
        SettleError::MultipleBlockWinners {
            block: 2,
            hole: 6,
            players: vec![PlayerId::from("P1"), PlayerId::from("P2")],
        }
    );
}

#[test]
fn settlement_refuses_invalid_records() {
    let config = round(3);
    let records = vec![
        built(hole("P1", 15).out(true).outcome("gold")),
        built(hole("P3", 15).out(true)),
    ];
    let err = settle_round(&config, &records).unwrap_err();
    assert!(matches!(
        err,
        SettleError::MultipleBlockWinners {
            block: 5,
            hole: 15,
            ..
        }
    ));
}

#[test]
fn duplicate_key_is_an_error_not_a_pick() {
    let config = round(2);
    let records = vec![
        built(hole("P1", 10).miss_count(1)),
        built(hole("P1", 10).miss_count(3)),
    ];
    assert_eq!(
        settle_round(&config, &records).unwrap_err(),
        SettleError::DuplicateRecordKey {
            round_id: ROUND_ID.to_string(),
            player_id: PlayerId::from("P1"),
            hole: 10,
        }
    );
}

#[test]
fn records_must_match_the_round() {
    let config = round(2);
    let foreign = vec![built(HoleRecordInput::new("other-round", "P1", 1))];
    assert_eq!(
        validate_round(&config, &foreign).unwrap_err(),
        SettleError::RoundMismatch {
            expected: ROUND_ID.to_string(),
            found: "other-round".to_string(),
        }
    );

    let stranger = vec![built(hole("P7", 1))];
    assert_eq!(
        validate_round(&config, &stranger).unwrap_err(),
        SettleError::UnknownPlayer {
            round_id: ROUND_ID.to_string(),
            player_id: PlayerId::from("P7"),
        }
    );
}

#[test]
fn solo_round_cannot_settle() {
    let config = round(1);
    let records = vec![built(hole("P1", 1).outcome("gold"))];
    assert_eq!(
        settle_round(&config, &records).unwrap_err(),
        SettleError::InsufficientPlayers(1)
    );
}

#[test]
fn bad_fields_are_rejected_at_the_boundary() {
    let err = hole("P1", 0).build().unwrap_err();
    assert!(matches!(err, SettleError::OutOfRangeValue { field: "hole", .. }));

    let err = hole("P1", 1).stroke_diff(21).build().unwrap_err();
    assert_eq!(
        err,
        SettleError::OutOfRangeValue {
            field: "stroke_diff",
            value: 21,
            min: -3,
            max: 20,
        }
    );

    let err = hole("P1", 1).miss_count(21).build().unwrap_err();
    assert!(matches!(err, SettleError::OutOfRangeValue { field: "miss_count", .. }));

    let err = hole("P1", 1).outcome("gold medal").build().unwrap_err();
    assert_eq!(err, SettleError::InvalidOutcome("gold medal".to_string()));
}

#[test]
fn error_messages_name_the_bad_record() {
    let err = SettleError::DuplicateRecordKey {
        round_id: "r1".to_string(),
        player_id: PlayerId::from("P2"),
        hole: 4,
    };
    assert_eq!(
        err.to_string(),
        "duplicate record for round r1, player P2, hole 4"
    );
}
