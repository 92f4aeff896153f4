//! Hash table with separate chaining.
//!
//! Variables:
//!   buckets : Vec<Vec<(K, V)>>  - one chain per bucket
//!   len     : usize             - total entries
//!   alpha   : f64               - load factor len / buckets, kept < 0.75
//!
//! Equations:
//!   insert / get / remove      O(1 + alpha) expected
//!   resize: double buckets and rehash every entry, amortised O(1)

use std::hash::{DefaultHasher, Hash, Hasher};

const INITIAL_BUCKETS: usize = 8;
const MAX_LOAD_FACTOR: f64 = 0.75;

pub struct HashTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    pub fn new() -> Self {
        Self {
            buckets: (0..INITIAL_BUCKETS).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Insert or overwrite. Returns the previous value for `key`.
    pub fn insert(&mut self, key: K, val: V) -> Option<V> {
        if (self.len + 1) as f64 / self.buckets.len() as f64 > MAX_LOAD_FACTOR {
            self.resize(self.buckets.len() * 2);
        }
        let idx = self.bucket_index(&key);
        for entry in &mut self.buckets[idx] {
            if entry.0 == key {
                return Some(std::mem::replace(&mut entry.1, val));
            }
        }
        self.buckets[idx].push((key, val));
        self.len += 1;
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_index(key);
        let pos = self.buckets[idx].iter().position(|(k, _)| k == key)?;
        let (_, val) = self.buckets[idx].swap_remove(pos);
        self.len -= 1;
        Some(val)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|(k, v)| (k, v)))
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    fn resize(&mut self, new_count: usize) {
        let old = std::mem::replace(
            &mut self.buckets,
            (0..new_count).map(|_| Vec::new()).collect(),
        );
        for (key, val) in old.into_iter().flatten() {
            let idx = self.bucket_index(&key);
            self.buckets[idx].push((key, val));
        }
    }
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Polynomial rolling hash: sum of c_i * base^i mod a large prime.
/// Equal strings always collide; distinct strings rarely do.
pub fn polynomial_hash(text: &str) -> u64 {
    const BASE: u64 = 31;
    const MODULUS: u64 = 1_000_000_007;
    let mut hash = 0u64;
    let mut power = 1u64;
    for b in text.bytes() {
        hash = (hash + b as u64 * power) % MODULUS;
        power = power * BASE % MODULUS;
    }
    hash
}
