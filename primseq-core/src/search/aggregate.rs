use crate::search::assemble::MatchRecord;
use crate::seq::pattern::{EffectivePattern, OrientationLabel};
use std::collections::HashMap;
use std::fmt;

/// Counting key: the searched string together with its orientation label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HitKey {
    pub sequence: Box<str>,
    pub label: OrientationLabel,
}

impl HitKey {
    pub fn new(sequence: impl Into<Box<str>>, label: OrientationLabel) -> Self {
        Self {
            sequence: sequence.into(),
            label,
        }
    }
}

impl From<&EffectivePattern> for HitKey {
    fn from(pattern: &EffectivePattern) -> Self {
        Self::new(pattern.sequence.clone(), pattern.label)
    }
}

impl fmt::Display for HitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.sequence, self.label)
    }
}

/// Total occurrences per key over a whole batch.
///
/// Iteration follows first insertion of each key. Counts only grow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitCounter {
    entries: Vec<(HitKey, usize)>,
    index: HashMap<HitKey, usize>,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter holding every key of `patterns` at zero, in expansion order.
    pub fn seeded(patterns: &[EffectivePattern]) -> Self {
        let mut counter = Self::new();
        for pattern in patterns {
            counter.seed(HitKey::from(pattern));
        }
        counter
    }

    /// Register `key` with a count of zero unless it is already present.
    pub fn seed(&mut self, key: HitKey) {
        self.slot(key);
    }

    pub fn add(&mut self, key: HitKey, n: usize) {
        let i = self.slot(key);
        self.entries[i].1 += n;
    }

    pub fn increment(&mut self, key: HitKey) {
        self.add(key, 1);
    }

    /// Fold another counter in; keys new to `self` are appended in the order
    /// `other` saw them.
    pub fn merge(&mut self, other: HitCounter) {
        for (key, n) in other.entries {
            self.add(key, n);
        }
    }

    pub fn get(&self, key: &HitKey) -> Option<usize> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HitKey, usize)> {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    fn slot(&mut self, key: HitKey) -> usize {
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        let i = self.entries.len();
        self.index.insert(key.clone(), i);
        self.entries.push((key, 0));
        i
    }
}

/// One line of the specificity verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub key: HitKey,
    pub count: usize,
    pub is_ambiguous: bool,
}

/// Count every match record under its key.
pub fn aggregate(records: &[MatchRecord]) -> HitCounter {
    let mut counter = HitCounter::new();
    for record in records {
        counter.increment(record.key());
    }
    counter
}

/// Like [`aggregate`], but every effective pattern is present even without
/// hits, and key order is the expansion order.
pub fn aggregate_seeded(patterns: &[EffectivePattern], records: &[MatchRecord]) -> HitCounter {
    let mut counter = HitCounter::seeded(patterns);
    counter.merge(aggregate(records));
    counter
}

/// A key is ambiguous when it was found more than once overall.
pub fn classify(counter: &HitCounter) -> Vec<Classification> {
    counter
        .iter()
        .map(|(key, count)| Classification {
            key: key.clone(),
            count,
            is_ambiguous: count > 1,
        })
        .collect()
}

pub fn ambiguous(classes: &[Classification]) -> impl Iterator<Item = &Classification> {
    classes.iter().filter(|c| c.is_ambiguous)
}
