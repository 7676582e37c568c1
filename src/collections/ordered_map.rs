//! `OrderedMap`: a string-keyed map that remembers insertion order.
//!
//! Structure:
//! - **Dense vectors**: `keys` and `values` hold the entries in insertion order.
//! - **Position table**: a `HashMap` from key to the entry's dense index.
//!
//! Lookups go through the position table in O(1). Iteration walks the dense
//! vectors. Removal is order-preserving: the tail shifts down by one and the
//! positions of the shifted entries are renumbered, so removal is O(n).

use std::collections::HashMap;

/// Insertion-ordered map from `String` keys to values.
#[derive(Debug, Clone)]
pub(crate) struct OrderedMap<V> {
    /// Dense storage for keys.
    keys: Vec<String>,
    /// Dense storage for values, parallel to `keys`.
    values: Vec<V>,
    /// Key to dense index.
    positions: HashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map with room for at least `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
        self.positions.clear();
    }

    /// Returns the key-value pair at the given position.
    pub fn get_index(&self, index: usize) -> Option<(&str, &V)> {
        let key = self.keys.get(index)?;
        let value = self.values.get(index)?;
        Some((key.as_str(), value))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// Values in insertion order.
    pub fn values(&self) -> core::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Key-value pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &V)> + '_ {
        self.keys.iter().map(String::as_str).zip(self.values.iter())
    }

    /// Position of `key` in insertion order.
    #[inline]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// The value stored at `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index_of(key).and_then(|index| self.values.get(index))
    }

    /// Mutable access to the value stored at `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.index_of(key)?;
        self.values.get_mut(index)
    }

    /// Inserts or overwrites the value at `key`.
    ///
    /// An existing key keeps its position and the previous value is returned.
    /// A new key is appended to the end.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(core::mem::replace(slot, value));
        }
        let index = self.keys.len();
        self.positions.insert(key.clone(), index);
        self.keys.push(key);
        self.values.push(value);
        None
    }

    /// Removes `key`, shifting every later entry down by one.
    pub fn shift_remove(&mut self, key: &str) -> Option<V> {
        let index = self.positions.remove(key)?;
        self.keys.remove(index);
        let value = self.values.remove(index);
        self.renumber_from(index);
        Some(value)
    }

    /// Keeps only the entries for which `keep` returns `true`, preserving order.
    /// Returns the number of entries removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str, &V) -> bool,
    {
        let before = self.keys.len();
        let mut write = 0;
        for read in 0..before {
            if keep(self.keys[read].as_str(), &self.values[read]) {
                self.keys.swap(write, read);
                self.values.swap(write, read);
                write += 1;
            }
        }
        for key in self.keys.drain(write..) {
            self.positions.remove(&key);
        }
        self.values.truncate(write);
        self.renumber_from(0);
        before - write
    }

    fn renumber_from(&mut self, start: usize) {
        for (index, key) in self.keys.iter().enumerate().skip(start) {
            if let Some(slot) = self.positions.get_mut(key.as_str()) {
                *slot = index;
            }
        }
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = core::iter::Zip<std::vec::IntoIter<String>, std::vec::IntoIter<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}

impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}
