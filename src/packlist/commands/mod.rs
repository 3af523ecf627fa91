//! # Command Layer
//!
//! Each operation on the packing list lives in its own module as a plain function over
//! a borrowed [`Collection`]. Mutating operations return a [`Transition`]: the new
//! collection plus an [`Outcome`] describing what happened. Nothing here touches
//! storage or the terminal; [`crate::api::PackingApi`] owns the current collection and
//! decides when to persist.
//!
//! No command ever fails. Inputs that cannot apply (an empty description, an unknown
//! id) produce an unchanged collection and an outcome that says so.

use crate::config::PackConfig;
use crate::model::{Collection, Item, ItemId};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod packing;
pub mod remove;
pub mod reset;
pub mod sort;
pub mod stats;

pub use stats::Stats;

/// What a mutating command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new item was appended with this id.
    Added(ItemId),
    /// The input failed validation; nothing was created.
    Rejected,
    /// Number of existing items touched. Zero means the id was not found.
    Updated(usize),
    /// The list was emptied; carries the number of discarded items.
    Cleared(usize),
}

impl Outcome {
    /// Whether the collection is unchanged by this outcome.
    pub fn is_noop(&self) -> bool {
        matches!(self, Outcome::Rejected | Outcome::Updated(0))
    }

    fn merge(self, next: Outcome) -> Outcome {
        match (self, next) {
            (Outcome::Updated(a), Outcome::Updated(b)) => Outcome::Updated(a + b),
            (Outcome::Cleared(a), Outcome::Cleared(b)) => Outcome::Cleared(a + b),
            (_, next) => next,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub collection: Collection,
    pub outcome: Outcome,
}

impl Transition {
    pub fn new(collection: Collection, outcome: Outcome) -> Self {
        Self {
            collection,
            outcome,
        }
    }

    pub(crate) fn unchanged(collection: &Collection, outcome: Outcome) -> Self {
        Self::new(collection.clone(), outcome)
    }

    /// Applies `step` to this transition's collection, accumulating the outcome.
    pub fn then(self, step: impl FnOnce(&Collection) -> Transition) -> Transition {
        let next = step(&self.collection);
        Transition {
            collection: next.collection,
            outcome: self.outcome.merge(next.outcome),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PackPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcome: Option<Outcome>,
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<Item>,
    pub stats: Option<Stats>,
    pub config: Option<PackConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: PackConfig) -> Self {
        self.config = Some(config);
        self
    }
}
