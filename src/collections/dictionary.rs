//! `Dictionary`: a string-keyed, insertion-ordered container of non-null values.
//!
//! Keys are non-empty strings. `add` and `replace` are both upserts: writing
//! to an existing key overwrites the value in place and keeps the key's
//! original position in iteration order.

use super::cursor::{Cursor, Seek};
use super::ordered_map::OrderedMap;
use super::Container;
use crate::config::ContainerConfig;
use crate::error::{CollectionError, Result};
use crate::validation::{shared_validator, CollectionValidation};
use crate::value::{Offset, Storable};
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tracing::{debug, trace};

/// A string-keyed map of non-null values that iterates in insertion order.
#[derive(Debug, Clone)]
pub struct Dictionary<T> {
    entries: OrderedMap<T>,
    validator: Arc<dyn CollectionValidation>,
    config: ContainerConfig,
}

impl<T: Storable> Dictionary<T> {
    /// Creates an empty dictionary that uses the shared validator.
    pub fn new() -> Self {
        Self::with_validator(shared_validator())
    }

    /// Creates an empty dictionary checked by `validator`.
    pub fn with_validator(validator: Arc<dyn CollectionValidation>) -> Self {
        Self::with_config(validator, ContainerConfig::default())
    }

    /// Creates an empty dictionary with an explicit validator and configuration.
    pub fn with_config(validator: Arc<dyn CollectionValidation>, config: ContainerConfig) -> Self {
        Self {
            entries: OrderedMap::with_capacity(config.initial_capacity),
            validator,
            config,
        }
    }

    /// Creates a dictionary seeded with `items` using the shared validator.
    ///
    /// Later pairs overwrite earlier pairs with the same key.
    ///
    /// # Errors
    /// Fails with the first validation error among `items`; no dictionary is
    /// produced in that case.
    pub fn from_items<K, I>(items: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        Self::with_items(shared_validator(), ContainerConfig::default(), items)
    }

    /// Creates a dictionary seeded with `items` under an explicit validator and configuration.
    ///
    /// # Errors
    /// Fails with the first validation error among `items`.
    pub fn with_items<K, I>(
        validator: Arc<dyn CollectionValidation>,
        config: ContainerConfig,
        items: I,
    ) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut dictionary = Self::with_config(validator, config);
        dictionary.extend(items)?;
        debug!(size = dictionary.size(), "seeded dictionary");
        Ok(dictionary)
    }

    /// Stores `value` at `key`, overwriting any existing value.
    ///
    /// # Errors
    /// Fails with [`CollectionError::EmptyKey`] for `""` and
    /// [`CollectionError::NullValue`] for null values.
    pub fn add(&mut self, key: impl Into<String>, value: T) -> Result<&mut Self> {
        let key = key.into();
        self.check_entry(&key, &value)?;
        self.entries.insert(key, value);
        trace!(size = self.entries.len(), "stored value in dictionary");
        Ok(self)
    }

    /// Same as [`add`](Self::add): an upsert.
    ///
    /// # Errors
    /// See [`add`](Self::add).
    pub fn replace(&mut self, key: impl Into<String>, value: T) -> Result<&mut Self> {
        self.add(key, value)
    }

    /// Stores every pair, or none of them if any pair is rejected.
    ///
    /// # Errors
    /// Fails with the first validation error among `items`.
    pub fn extend<K, I>(&mut self, items: I) -> Result<()>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        let staged: Vec<(String, T)> = items
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        for (key, value) in &staged {
            self.check_entry(key, value)?;
        }
        for (key, value) in staged {
            self.entries.insert(key, value);
        }
        trace!(size = self.entries.len(), "extended dictionary");
        Ok(())
    }

    /// Returns the value stored at `key`.
    ///
    /// # Errors
    /// Fails with [`CollectionError::KeyNotFound`] if `key` is absent.
    pub fn find(&self, key: &str) -> Result<&T> {
        self.validator.validate_offset_exists(&Offset::from(key), self)?;
        self.entries
            .get(key)
            .ok_or_else(|| CollectionError::KeyNotFound { key: key.to_owned() })
    }

    /// Key-style read.
    ///
    /// # Errors
    /// Fails with a [`CollectionError::TypeMismatch`] if `offset` is not a
    /// string, or [`CollectionError::KeyNotFound`] if it is absent.
    pub fn get(&self, offset: impl Into<Offset>) -> Result<&T> {
        let offset = offset.into();
        self.validator.validate_is_string(&offset)?;
        self.validator.validate_offset_exists(&offset, self)?;
        let key = offset.as_key().unwrap_or_default();
        self.entries
            .get(key)
            .ok_or_else(|| CollectionError::KeyNotFound { key: key.to_owned() })
    }

    /// Key-style write; an upsert like [`add`](Self::add).
    ///
    /// # Errors
    /// Fails with a [`CollectionError::TypeMismatch`] if `offset` is not a
    /// string, plus everything [`add`](Self::add) can fail with.
    pub fn set(&mut self, offset: impl Into<Offset>, value: T) -> Result<()> {
        let offset = offset.into();
        self.validator.validate_is_string(&offset)?;
        match offset {
            Offset::Key(key) => self.add(key, value).map(drop),
            other => Err(CollectionError::offset_mismatch("string", other.kind_name())),
        }
    }

    fn check_entry(&self, key: &str, value: &T) -> Result<()> {
        self.validator.validate_non_empty_key(key)?;
        self.validator.validate_non_null(value)
    }
}

impl<T: Storable + PartialEq> Dictionary<T> {
    /// Removes every entry whose value equals `value`.
    ///
    /// Returns how many entries were removed; zero is not an error.
    pub fn remove(&mut self, value: &T) -> usize {
        let removed = self.entries.retain(|_, stored| stored != value);
        if removed > 0 {
            trace!(removed, size = self.entries.len(), "removed values from dictionary");
        }
        removed
    }
}

impl<T> Dictionary<T> {
    /// Removes the entry at `key`, if there is one.
    pub fn remove_at(&mut self, key: &str) -> Option<T> {
        let value = self.entries.shift_remove(key)?;
        trace!(key, size = self.entries.len(), "removed key from dictionary");
        Some(value)
    }

    /// Number of entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        trace!("cleared dictionary");
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys()
    }

    /// Values in insertion order.
    pub fn values(&self) -> core::slice::Iter<'_, T> {
        self.entries.values()
    }

    /// Key-value pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &T)> + '_ {
        self.entries.iter()
    }

    /// A fresh cursor at the first inserted key.
    pub fn cursor(&self) -> Cursor<'_, Self> {
        Cursor::new(self)
    }

    /// The validator this dictionary was built with.
    pub fn validator(&self) -> &Arc<dyn CollectionValidation> {
        &self.validator
    }

    /// The configuration this dictionary was built with.
    pub fn config(&self) -> ContainerConfig {
        self.config
    }
}

impl<T> Container for Dictionary<T> {
    fn size(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        Dictionary::clear(self);
    }

    fn offset_exists(&self, offset: &Offset) -> bool {
        offset.as_key().is_some_and(|key| self.entries.contains_key(key))
    }
}

impl<T> Seek for Dictionary<T> {
    type Key<'a> = &'a str where Self: 'a;
    type Value = T;

    fn entry_at(&self, position: usize) -> Option<(&str, &T)> {
        self.entries.get_index(position)
    }
}

impl<T: Storable> Default for Dictionary<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Dictionary<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a, T> IntoIterator for &'a Dictionary<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Cursor<'a, Dictionary<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<T> IntoIterator for Dictionary<T> {
    type Item = (String, T);
    type IntoIter = core::iter::Zip<std::vec::IntoIter<String>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: Serialize> Serialize for Dictionary<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}
