use std::{collections::hash_map, hash::Hash};

use rustc_hash::FxHashMap;

use crate::config::TABLE_CAPACITY;

/// How a stored score relates to the true value of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// The search failed high, the value is at least the score.
    Lower,
    /// The search failed low, the value is at most the score.
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub depth: u8,
    pub score: f64,
    pub bound: Bound,
}

impl Entry {
    /// The score if it settles a node searched with window `(alpha, beta)`.
    pub fn cutoff(&self, alpha: f64, beta: f64) -> Option<f64> {
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= beta => Some(self.score),
            Bound::Upper if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

/// Scores of searched positions, keyed by the frozen state.
pub struct TranspositionTable<K> {
    entries: FxHashMap<K, Entry>,
    capacity: usize,
}

impl<K: Hash + Eq> Default for TranspositionTable<K> {
    fn default() -> Self {
        Self::with_capacity(TABLE_CAPACITY)
    }
}

impl<K: Hash + Eq> TranspositionTable<K> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity: capacity.max(1),
        }
    }

    /// An entry searched at least `depth` plies deep.
    pub fn probe(&self, key: &K, depth: u8) -> Option<Entry> {
        self.entries
            .get(key)
            .filter(|entry| entry.depth >= depth)
            .copied()
    }

    /// Deeper results replace shallower ones. A full table starts over.
    pub fn store(&mut self, key: K, entry: Entry) {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            self.entries.clear();
        }
        match self.entries.entry(key) {
            hash_map::Entry::Occupied(mut occupied) => {
                if entry.depth >= occupied.get().depth {
                    occupied.insert(entry);
                }
            }
            hash_map::Entry::Vacant(vacant) => {
                vacant.insert(entry);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
