use serde::Serialize;
use std::collections::BTreeMap;

pub const PAIRS_TRIED: &str = "pairs_tried";
pub const RESOLVENTS_GENERATED: &str = "resolvents_generated";
pub const TAUTOLOGIES_DISCARDED: &str = "tautologies_discarded";
pub const SUBSUMED_DISCARDED: &str = "subsumed_discarded";
pub const CLAUSES_KEPT: &str = "clauses_kept";

/// Named search counters, listed in name order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Statistics {
    counters: BTreeMap<String, u64>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: u64) {
        self.counters.insert(name.into(), value);
    }

    pub fn increment(&mut self, name: impl Into<String>) -> u64 {
        self.increment_by(name, 1)
    }

    pub fn increment_by(&mut self, name: impl Into<String>, amount: u64) -> u64 {
        let entry = self.counters.entry(name.into()).or_insert(0);
        *entry += amount;
        *entry
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.counters.get(name).copied()
    }

    /// Counter value, zero when never touched.
    pub fn count(&self, name: &str) -> u64 {
        self.get(name).unwrap_or(0)
    }

    pub fn reset(&mut self, name: &str) {
        self.counters.remove(name);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counters.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::{Statistics, PAIRS_TRIED};

    #[test]
    fn counters_increment() {
        let mut stats = Statistics::new();
        assert_eq!(stats.increment(PAIRS_TRIED), 1);
        assert_eq!(stats.increment_by(PAIRS_TRIED, 4), 5);
        assert_eq!(stats.get(PAIRS_TRIED), Some(5));
        stats.reset(PAIRS_TRIED);
        assert!(stats.get(PAIRS_TRIED).is_none());
        assert_eq!(stats.count(PAIRS_TRIED), 0);
    }

    #[test]
    fn iterates_in_name_order() {
        let mut stats = Statistics::new();
        stats.set("b", 2);
        stats.set("a", 1);
        let names: Vec<&str> = stats.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
