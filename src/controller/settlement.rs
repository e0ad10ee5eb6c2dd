use ahash::RandomState;
use std::collections::HashMap;

use crate::error::SettleError;
use crate::model::{Balance, BalanceEntry, Event, Player, PlayerId, TransferMatrix};

/// Fold events into net balances and a pairwise transfer matrix.
///
/// A credit event (olympic, special) of magnitude `m` by `p` has every other player
/// pay `p` exactly `m`; a snake event has `p` pay every other player `m`. Every
/// update is pairwise balanced, so the result is zero-sum and order independent.
///
/// # Errors
/// `InsufficientPlayers` for fewer than two players, `DuplicatePlayer`,
/// `UnknownPlayer` for an event owner outside `players`, `RoundMismatch` when events
/// span rounds, and `InvariantViolated` on overflow or a failed post-condition.
pub fn settle(
    events: &[Event],
    players: &[Player],
) -> Result<(Balance, TransferMatrix), SettleError> {
    let n = players.len();
    if n < 2 {
        return Err(SettleError::InsufficientPlayers(n));
    }

    let mut index: HashMap<&PlayerId, usize, RandomState> = HashMap::default();
    for (i, player) in players.iter().enumerate() {
        if index.insert(&player.id, i).is_some() {
            return Err(SettleError::DuplicatePlayer(player.id.clone()));
        }
    }

    let ids: Vec<PlayerId> = players.iter().map(|p| p.id.clone()).collect();
    let mut matrix = TransferMatrix::zeroed(ids);
    let mut net = vec![0i64; n];
    let round_id = events.first().map(|e| e.round_id.as_str());

    for event in events {
        if Some(event.round_id.as_str()) != round_id {
            return Err(SettleError::RoundMismatch {
                expected: round_id.unwrap_or_default().to_string(),
                found: event.round_id.clone(),
            });
        }
        let owner = *index
            .get(&event.player_id)
            .ok_or_else(|| SettleError::UnknownPlayer {
                round_id: event.round_id.clone(),
                player_id: event.player_id.clone(),
            })?;
        let amount = i64::from(event.magnitude);

        for other in (0..n).filter(|&q| q != owner) {
            let (from, to) = if event.category.is_credit() {
                (other, owner)
            } else {
                (owner, other)
            };
            transfer(&mut matrix, from, to, amount)?;
            net[to] = net[to].checked_add(amount).ok_or_else(overflow)?;
            net[from] = net[from].checked_sub(amount).ok_or_else(overflow)?;
        }
    }

    let balance = balance_from_matrix(&matrix)?;
    check_postconditions(&balance, &net, &matrix)?;
    log::debug!(
        "settled {} events among {} players",
        events.len(),
        matrix.players().len()
    );
    Ok((balance, matrix))
}

fn overflow() -> SettleError {
    SettleError::InvariantViolated("transfer amount overflow".to_string())
}

/// `from` owes `to` another `amount`.
fn transfer(
    matrix: &mut TransferMatrix,
    from: usize,
    to: usize,
    amount: i64,
) -> Result<(), SettleError> {
    matrix.owed[from][to] = matrix.owed[from][to]
        .checked_add(amount)
        .ok_or_else(overflow)?;
    matrix.owed[to][from] = matrix.owed[to][from]
        .checked_sub(amount)
        .ok_or_else(overflow)?;
    Ok(())
}

/// A player's net is what everyone else owes them.
fn balance_from_matrix(matrix: &TransferMatrix) -> Result<Balance, SettleError> {
    let mut entries = Vec::with_capacity(matrix.players.len());
    for (to, player_id) in matrix.players.iter().enumerate() {
        let mut net: i64 = 0;
        for row in &matrix.owed {
            net = net.checked_add(row[to]).ok_or_else(|| {
                SettleError::InvariantViolated(format!("balance overflow for {player_id}"))
            })?;
        }
        entries.push(BalanceEntry {
            player_id: player_id.clone(),
            net,
        });
    }
    Ok(Balance { entries })
}

/// The matrix must be antisymmetric, its column sums must match the per-event net
/// fold, and the balances must sum to zero.
fn check_postconditions(
    balance: &Balance,
    net: &[i64],
    matrix: &TransferMatrix,
) -> Result<(), SettleError> {
    if !matrix.is_antisymmetric() {
        return Err(SettleError::InvariantViolated(
            "transfer matrix is not antisymmetric".to_string(),
        ));
    }
    for (entry, expected) in balance.entries.iter().zip(net) {
        if entry.net != *expected {
            return Err(SettleError::InvariantViolated(format!(
                "{} nets {} from the matrix but {} from the event fold",
                entry.player_id, entry.net, expected
            )));
        }
    }
    let total = balance
        .entries
        .iter()
        .try_fold(0i64, |acc, e| acc.checked_add(e.net));
    if total != Some(0) {
        return Err(SettleError::InvariantViolated(format!(
            "balances sum to {total:?}, expected 0"
        )));
    }
    Ok(())
}
