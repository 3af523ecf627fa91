//! Item id generation.
//!
//! Ids come from a high-resolution time source so they stay meaningful across
//! sessions (a restored list keeps its ids, and new items sort after old ones).
//! The clock alone is not enough: two adds in the same millisecond, or a clock that
//! steps backwards, would collide. Every generator is therefore asked for an id
//! *relative to* the collection it will be inserted into, and must return one
//! strictly greater than anything it has issued and anything already present.
//! A loaded list can already hold `u64::MAX`; then nothing above it exists and the
//! lowest id free in the collection is used instead.

use crate::model::{Collection, ItemId};
use chrono::Utc;

pub trait IdSource {
    /// Returns an id not present in `collection`.
    fn next_id(&mut self, collection: &Collection) -> ItemId;
}

/// Millisecond wall-clock ids, bumped forward when the clock has not advanced.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: Option<ItemId>,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self, collection: &Collection) -> ItemId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = match self.last.max(collection.max_id()) {
            None => now,
            Some(top) => match top.0.checked_add(1) {
                Some(floor) => now.max(floor),
                None => lowest_free(collection),
            },
        };
        let id = ItemId(id);
        self.last = Some(id);
        id
    }
}

/// Smallest id from 1 upward that `collection` does not use.
fn lowest_free(collection: &Collection) -> u64 {
    let mut taken: Vec<u64> = collection.iter().map(|item| item.id.0).collect();
    taken.sort_unstable();

    let mut candidate = 1;
    for id in taken {
        if id == candidate {
            candidate = candidate.saturating_add(1);
        } else if id > candidate {
            break;
        }
    }
    candidate
}

/// Deterministic ids for tests: 1, 2, 3, ... (skipping past existing ids).
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            last: first.saturating_sub(1),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, collection: &Collection) -> ItemId {
        let existing = collection.max_id().map_or(0, |id| id.0);
        self.last = match self.last.max(existing).checked_add(1) {
            Some(next) => next,
            None => lowest_free(collection),
        };
        ItemId(self.last)
    }
}
