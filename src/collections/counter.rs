//! Multiset of hashable values with counts.
//!
//! Variables:
//!   counts : HashMap<T, usize>  - zero-count entries are never stored
//!
//! Equations:
//!   add(x):    counts[x] += 1
//!   remove(x): counts[x] -= 1, entry dropped at zero
//!   total    = sum of all counts
//!   most_common: entries by count descending, ties by value

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct Counter<T> {
    counts: HashMap<T, usize>,
}

// a derive would only bound T: PartialEq, but comparing the inner map
// needs T: Eq + Hash
impl<T: Hash + Eq> PartialEq for Counter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<T: Hash + Eq> Eq for Counter<T> {}

impl<T: Hash + Eq> Default for Counter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> Counter<T> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    pub fn add(&mut self, val: T) {
        *self.counts.entry(val).or_insert(0) += 1;
    }

    pub fn add_n(&mut self, val: T, n: usize) {
        if n > 0 {
            *self.counts.entry(val).or_insert(0) += n;
        }
    }

    /// Decrement `val`, dropping the entry at zero. False when absent.
    pub fn remove(&mut self, val: &T) -> bool {
        match self.counts.get_mut(val) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(val);
                true
            }
            None => false,
        }
    }

    pub fn count(&self, val: &T) -> usize {
        self.counts.get(val).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}

impl<T: Hash + Eq + Ord> Counter<T> {
    /// Entries by count descending; equal counts break ties by value so
    /// the order is deterministic.
    pub fn most_common(&self) -> Vec<(&T, usize)> {
        let mut entries: Vec<(&T, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// The `n` highest-count entries.
    pub fn top_n(&self, n: usize) -> Vec<(&T, usize)> {
        let mut entries = self.most_common();
        entries.truncate(n);
        entries
    }
}

impl<T: Hash + Eq + Clone> Counter<T> {
    /// Every value repeated by its count, grouped per value.
    pub fn elements(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.total());
        for (val, count) in &self.counts {
            for _ in 0..*count {
                out.push(val.clone());
            }
        }
        out
    }

    /// Multiset sum: counts added pointwise.
    pub fn union_add(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for (val, count) in &other.counts {
            merged.add_n(val.clone(), *count);
        }
        merged
    }

    /// Multiset difference: counts subtracted, entries at or below zero
    /// dropped.
    pub fn saturating_sub(&self, other: &Self) -> Self {
        let mut out = Self::new();
        for (val, count) in &self.counts {
            let remaining = count.saturating_sub(other.count(val));
            if remaining > 0 {
                out.add_n(val.clone(), remaining);
            }
        }
        out
    }
}

impl<T: Hash + Eq> FromIterator<T> for Counter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counter = Self::new();
        for val in iter {
            counter.add(val);
        }
        counter
    }
}
