//! Insertion-ordered map.
//!
//! Variables:
//!   order : Vec<K>           - keys in iteration order
//!   map   : HashMap<K, V>    - key to value
//!
//! Equations:
//!   insert of a new key appends to order             O(1) amortised
//!   move_to_end / move_to_front / remove reposition  O(N)
//!   pop_front / pop_back                             O(N) / O(1)

use std::collections::HashMap;
use std::hash::Hash;

pub struct OrderedMap<K, V> {
    order: Vec<K>,
    map: HashMap<K, V>,
}

impl<K: Hash + Eq + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            map: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Insert or overwrite. Overwriting keeps the key's position.
    pub fn insert(&mut self, key: K, val: V) -> Option<V> {
        if !self.map.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.map.insert(key, val)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.map.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let val = self.map.remove(key)?;
        self.order.retain(|k| k != key);
        Some(val)
    }

    /// Move an existing key to the back of the order. False when absent.
    pub fn move_to_end(&mut self, key: &K) -> bool {
        let Some(pos) = self.order.iter().position(|k| k == key) else {
            return false;
        };
        let k = self.order.remove(pos);
        self.order.push(k);
        true
    }

    /// Move an existing key to the front of the order. False when absent.
    pub fn move_to_front(&mut self, key: &K) -> bool {
        let Some(pos) = self.order.iter().position(|k| k == key) else {
            return false;
        };
        let k = self.order.remove(pos);
        self.order.insert(0, k);
        true
    }

    /// Remove and return the oldest entry.
    pub fn pop_front(&mut self) -> Option<(K, V)> {
        if self.order.is_empty() {
            return None;
        }
        let key = self.order.remove(0);
        let val = self.map.remove(&key)?;
        Some((key, val))
    }

    /// Remove and return the newest entry.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let key = self.order.pop()?;
        let val = self.map.remove(&key)?;
        Some((key, val))
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order.iter().filter_map(|k| Some((k, self.map.get(k)?)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }
}

impl<K: Hash + Eq + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
