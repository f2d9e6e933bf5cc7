//! Running aggregates rebuilt by each routine.

use indexmap::IndexMap;
use std::cmp::Ordering;

/// A named record holding the current extreme value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leader<V> {
    pub name: String,
    pub value: V,
}

/// Running maximum or minimum under strict comparison: the first record to
/// reach the extreme keeps the lead on ties.
#[derive(Debug, Clone)]
pub struct RunningBest<V> {
    wins_on: Ordering,
    leader: Option<Leader<V>>,
}

impl<V: PartialOrd> RunningBest<V> {
    pub fn max() -> Self {
        Self {
            wins_on: Ordering::Greater,
            leader: None,
        }
    }

    pub fn min() -> Self {
        Self {
            wins_on: Ordering::Less,
            leader: None,
        }
    }

    /// Offer a candidate; returns `true` if it took the lead.
    pub fn offer(&mut self, name: impl Into<String>, value: V) -> bool {
        let takes_lead = match &self.leader {
            None => true,
            Some(leader) => value.partial_cmp(&leader.value) == Some(self.wins_on),
        };
        if takes_lead {
            self.leader = Some(Leader {
                name: name.into(),
                value,
            });
        }
        takes_lead
    }

    pub fn leader(&self) -> Option<&Leader<V>> {
        self.leader.as_ref()
    }

    pub fn into_leader(self) -> Option<Leader<V>> {
        self.leader
    }
}

/// Occurrence counts keyed by name, remembering first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    counts: IndexMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
    }

    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Highest count; among equal counts the key first inserted wins.
    pub fn most_common(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (key, &count) in &self.counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((key.as_str(), count));
            }
        }
        best
    }
}
