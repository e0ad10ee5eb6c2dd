use super::rater::rate;
use crate::model::{Category, Event, HoleRecord, Outcome, RoundConfig};

/// Flatten hole records into scoring events.
///
/// Each record yields up to three events, in this order: olympic (pot-game outcome
/// other than none), special (stroke differential of -1 or better), snake (any misses).
/// Rates are read from `config` at call time.
#[must_use]
pub fn extract_events(records: &[HoleRecord], config: &RoundConfig) -> Vec<Event> {
    let mut events = Vec::with_capacity(records.len());
    for record in records {
        events.extend(events_for_record(record, config));
    }
    log::debug!(
        "round {}: {} records -> {} events",
        config.id(),
        records.len(),
        events.len()
    );
    events
}

fn events_for_record(record: &HoleRecord, config: &RoundConfig) -> Vec<Event> {
    let event = |category, magnitude| Event {
        round_id: record.round_id().to_string(),
        player_id: record.player_id().clone(),
        category,
        magnitude,
    };

    let mut out = Vec::new();
    if record.outcome() != Outcome::None {
        out.push(event(
            Category::Olympic,
            rate(record.outcome(), config.rates()),
        ));
    }
    if let Some(tier) = record.special_tier() {
        out.push(event(Category::Special, tier.points()));
    }
    if record.miss_count() > 0 {
        out.push(event(Category::Snake, u32::from(record.miss_count())));
    }
    out
}
