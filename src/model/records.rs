use ahash::RandomState;
use std::collections::HashMap;

use crate::model::types::{HoleRecord, RecordKey};

/// Write `record` into `records`, replacing the record with the same key in place.
/// Returns the record that was replaced, if any.
pub fn upsert(records: &mut Vec<HoleRecord>, record: HoleRecord) -> Option<HoleRecord> {
    let key = record.key();
    match records.iter_mut().find(|r| r.key() == key) {
        Some(existing) => Some(std::mem::replace(existing, record)),
        None => {
            records.push(record);
            None
        }
    }
}

/// Replay a write log: the last write for each key wins, keeping the position of the
/// first write. Returns the deduplicated records and how many writes were superseded.
#[must_use]
pub fn collapse_upserts(records: Vec<HoleRecord>) -> (Vec<HoleRecord>, usize) {
    let mut index: HashMap<RecordKey, usize, RandomState> = HashMap::default();
    let mut collapsed: Vec<HoleRecord> = Vec::with_capacity(records.len());
    let mut superseded = 0;

    for record in records {
        match index.get(&record.key()) {
            Some(&pos) => {
                collapsed[pos] = record;
                superseded += 1;
            }
            None => {
                index.insert(record.key(), collapsed.len());
                collapsed.push(record);
            }
        }
    }

    (collapsed, superseded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::input::HoleRecordInput;

    fn rec(player: &str, hole: i64, misses: i64) -> HoleRecord {
        HoleRecordInput::new("r1", player, hole)
            .miss_count(misses)
            .build()
            .unwrap()
    }

    #[test]
    fn upsert_replaces_same_key() {
        let mut records = vec![rec("p1", 1, 0), rec("p2", 1, 0)];
        assert!(upsert(&mut records, rec("p1", 2, 0)).is_none());
        let replaced = upsert(&mut records, rec("p1", 1, 4)).unwrap();
        assert_eq!(replaced.miss_count(), 0);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].miss_count(), 4);
    }

    #[test]
    fn collapse_keeps_last_write() {
        let log = vec![rec("p1", 1, 1), rec("p2", 1, 0), rec("p1", 1, 2), rec("p1", 1, 3)];
        let (records, superseded) = collapse_upserts(log);
        assert_eq!(superseded, 2);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player_id().as_str(), "p1");
        assert_eq!(records[0].miss_count(), 3);
    }
}
