use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

/// Running sum and count of `Likes` for one aggregation key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct LikeStats {
    pub sum: f64,
    pub count: u64,
}

impl LikeStats {
    pub fn add(&mut self, likes: f64) {
        self.sum += likes;
        self.count += 1;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Per-key accumulators, kept in the order keys were first seen.
#[derive(Debug)]
pub struct GroupedLikes<K> {
    groups: IndexMap<K, LikeStats>,
}

impl<K> Default for GroupedLikes<K> {
    fn default() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> GroupedLikes<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one valid row to `key`, creating its accumulator on first sight.
    pub fn record(&mut self, key: K, likes: f64) {
        self.groups.entry(key).or_default().add(likes);
    }

    pub fn get(&self, key: &K) -> Option<&LikeStats> {
        self.groups.get(key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &LikeStats)> {
        self.groups.iter()
    }
}

impl<K: Hash + Eq + Ord> GroupedLikes<K> {
    /// Reorders groups ascending by key.
    pub fn sort_by_key(&mut self) {
        self.groups.sort_keys();
    }
}
