use crate::error::SettleError;
use crate::model::{Outcome, RateTable};

/// Points for a pot-game outcome under the round's current rate table.
#[must_use]
pub fn rate(outcome: Outcome, rates: &RateTable) -> u32 {
    rates.get(outcome)
}

/// Rate a raw outcome label.
///
/// # Errors
/// Returns `SettleError::InvalidOutcome` if the label is not a known outcome.
pub fn rate_label(label: &str, rates: &RateTable) -> Result<u32, SettleError> {
    Ok(rate(Outcome::from_label(label)?, rates))
}
