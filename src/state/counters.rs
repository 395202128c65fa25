//! Per-product tally counters, persisted as one JSON record.

#[cfg(test)]
#[path = "counters_test.rs"]
mod counters_test;

use serde::{Deserialize, Serialize};

use crate::catalog::ProductId;
use crate::util::storage;

/// localStorage key for the serialized counter record.
const STORAGE_KEY: &str = "productCounters";

/// How long a numeral keeps its highlight after a change, in milliseconds.
pub const HIGHLIGHT_MS: u64 = 500;

/// Non-negative tallies for the three products.
///
/// Missing keys deserialize to zero, so a record written before a product
/// existed keeps its surviving entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Counters {
    pub ring: u32,
    pub necklace: u32,
    pub earrings: u32,
}

/// A counter control action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
}

impl Counters {
    /// Deserialize a stored record; malformed or missing data resets every
    /// entry to zero.
    pub fn from_stored(raw: Option<&str>) -> Counters {
        raw.and_then(|json| serde_json::from_str(json).ok()).unwrap_or_default()
    }

    /// Load the persisted record from localStorage.
    pub fn load() -> Counters {
        Counters::from_stored(storage::get(STORAGE_KEY).as_deref())
    }

    /// Persist the whole record to localStorage.
    pub fn persist(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            storage::set(STORAGE_KEY, &json);
        }
    }

    /// Current tally for one product.
    pub fn get(&self, id: ProductId) -> u32 {
        match id {
            ProductId::Ring => self.ring,
            ProductId::Necklace => self.necklace,
            ProductId::Earrings => self.earrings,
        }
    }

    fn entry(&mut self, id: ProductId) -> &mut u32 {
        match id {
            ProductId::Ring => &mut self.ring,
            ProductId::Necklace => &mut self.necklace,
            ProductId::Earrings => &mut self.earrings,
        }
    }

    /// Apply a control action. Decrementing at zero is a no-op.
    pub fn apply(&mut self, id: ProductId, action: CounterAction) {
        let entry = self.entry(id);
        match action {
            CounterAction::Increment => *entry = entry.saturating_add(1),
            CounterAction::Decrement => *entry = entry.saturating_sub(1),
        }
    }
}
