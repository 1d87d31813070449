//! Ordered `label -> minutes` accumulator.
//!
//! Emission order is the order in which labels were first added; nothing
//! in here ever sorts. Lookups go through a side index so accumulation
//! stays linear in the number of records.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTotals {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl LabelTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str, minutes: u64) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1 += minutes,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), minutes));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.index.get(label).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(l, m)| (l.as_str(), *m))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, m)| m).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(String, u64)> {
        self.entries
    }
}

impl Serialize for LabelTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, minutes) in &self.entries {
            map.serialize_entry(label, minutes)?;
        }
        map.end()
    }
}

/// Insertion-ordered set of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl LabelSet {
    pub fn insert(&mut self, label: &str) {
        if self.seen.insert(label.to_string()) {
            self.order.push(label.to_string());
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order_across_repeats() {
        let mut t = LabelTotals::new();
        t.add("Zeta", 10);
        t.add("Alpha", 5);
        t.add("Zeta", 20);
        t.add("Mid", 1);

        let got: Vec<_> = t.iter().collect();
        assert_eq!(got, vec![("Zeta", 30), ("Alpha", 5), ("Mid", 1)]);
        assert_eq!(t.total(), 36);
        assert_eq!(t.get("Alpha"), Some(5));
        assert_eq!(t.get("Nope"), None);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut t = LabelTotals::new();
        t.add("b", 2);
        t.add("a", 1);
        assert_eq!(serde_json::to_string(&t).unwrap(), r#"{"b":2,"a":1}"#);
    }

    #[test]
    fn label_set_ignores_duplicates() {
        let mut s = LabelSet::default();
        s.insert("x");
        s.insert("y");
        s.insert("x");
        assert_eq!(s.into_vec(), vec!["x".to_string(), "y".to_string()]);
    }
}
