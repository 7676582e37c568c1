//! `Collection`: an ordered, densely indexed container of non-null values.
//!
//! Design:
//! - Values live in a plain `Vec<T>`; indices are always the contiguous range
//!   `0..size()`. Removing an element shifts the tail down by one.
//! - Every write is checked by the injected [`CollectionValidation`] before
//!   storage is touched, so a failed operation leaves the collection unchanged.
//! - Bulk writes (`extend`, seeded construction) validate every item first
//!   and only then insert, so they are all-or-nothing too.

use super::cursor::{Cursor, Seek};
use super::Container;
use crate::config::ContainerConfig;
use crate::error::{CollectionError, Result};
use crate::validation::{shared_validator, CollectionValidation};
use crate::value::{Offset, Storable};
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tracing::{debug, trace};

/// An ordered collection of non-null values, indexed from zero.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    validator: Arc<dyn CollectionValidation>,
    config: ContainerConfig,
}

impl<T: Storable> Collection<T> {
    /// Creates an empty collection that uses the shared validator.
    pub fn new() -> Self {
        Self::with_validator(shared_validator())
    }

    /// Creates an empty collection checked by `validator`.
    pub fn with_validator(validator: Arc<dyn CollectionValidation>) -> Self {
        Self::with_config(validator, ContainerConfig::default())
    }

    /// Creates an empty collection with an explicit validator and configuration.
    pub fn with_config(validator: Arc<dyn CollectionValidation>, config: ContainerConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.initial_capacity),
            validator,
            config,
        }
    }

    /// Creates a collection seeded with `items`, in order, using the shared validator.
    ///
    /// # Errors
    /// Fails with [`CollectionError::NullValue`] if any item is null. No
    /// collection is produced in that case.
    pub fn from_items<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_items(shared_validator(), ContainerConfig::default(), items)
    }

    /// Creates a collection seeded with `items` under an explicit validator and configuration.
    ///
    /// # Errors
    /// Fails with the first validation error among `items`.
    pub fn with_items<I>(
        validator: Arc<dyn CollectionValidation>,
        config: ContainerConfig,
        items: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut collection = Self::with_config(validator, config);
        collection.extend(items)?;
        debug!(size = collection.size(), "seeded collection");
        Ok(collection)
    }

    /// Appends `value`, giving it the next index.
    ///
    /// # Errors
    /// Fails with [`CollectionError::NullValue`] if `value` is null.
    pub fn add(&mut self, value: T) -> Result<&mut Self> {
        self.validator.validate_non_null(&value)?;
        self.items.push(value);
        trace!(size = self.items.len(), "added value to collection");
        Ok(self)
    }

    /// Appends every item, or none of them if any item is rejected.
    ///
    /// # Errors
    /// Fails with the first validation error among `items`.
    pub fn extend<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let staged: Vec<T> = items.into_iter().collect();
        for item in &staged {
            self.validator.validate_non_null(item)?;
        }
        self.items.extend(staged);
        trace!(size = self.items.len(), "extended collection");
        Ok(())
    }

    /// Overwrites the value at an existing `index`.
    ///
    /// # Errors
    /// Fails with [`CollectionError::NullValue`] if `value` is null, or
    /// [`CollectionError::IndexNotFound`] if `index` is out of range.
    pub fn replace(&mut self, index: usize, value: T) -> Result<&mut Self> {
        self.validator.validate_non_null(&value)?;
        let position = self.existing_position(&Offset::from(index))?;
        self.items[position] = value;
        trace!(index = position, "replaced value in collection");
        Ok(self)
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    /// Fails with [`CollectionError::IndexNotFound`] if `index` is out of range.
    pub fn find(&self, index: usize) -> Result<&T> {
        let position = self.existing_position(&Offset::from(index))?;
        Ok(&self.items[position])
    }

    /// Removes and returns the value at `index`; later values move down by one.
    ///
    /// # Errors
    /// Fails with [`CollectionError::IndexNotFound`] if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let position = self.existing_position(&Offset::from(index))?;
        let value = self.items.remove(position);
        trace!(index = position, size = self.items.len(), "removed value from collection");
        Ok(value)
    }

    /// Index-style read.
    ///
    /// # Errors
    /// Fails with a [`CollectionError::TypeMismatch`] if `offset` is not an
    /// integer, or [`CollectionError::IndexNotFound`] if it does not exist.
    pub fn get(&self, offset: impl Into<Offset>) -> Result<&T> {
        let position = self.existing_position(&offset.into())?;
        Ok(&self.items[position])
    }

    /// Index-style write.
    ///
    /// With [`ContainerConfig::append_on_set`] enabled, writing at `size()`
    /// appends; any other missing index is rejected.
    ///
    /// # Errors
    /// Fails with a [`CollectionError::TypeMismatch`] for non-integer offsets,
    /// [`CollectionError::NullValue`] for null values, and
    /// [`CollectionError::IndexNotFound`] for missing indices.
    pub fn set(&mut self, offset: impl Into<Offset>, value: T) -> Result<()> {
        let offset = offset.into();
        self.validator.validate_is_int(&offset)?;
        self.validator.validate_non_null(&value)?;
        if self.config.append_on_set && offset.as_position() == Some(self.items.len()) {
            self.items.push(value);
            trace!(size = self.items.len(), "appended value through set");
            return Ok(());
        }
        let position = self.existing_position(&offset)?;
        self.items[position] = value;
        Ok(())
    }

    /// Validates `offset` as an existing integer index and resolves it.
    fn existing_position(&self, offset: &Offset) -> Result<usize> {
        self.validator.validate_is_int(offset)?;
        self.validator.validate_offset_exists(offset, self)?;
        offset
            .as_position()
            .ok_or_else(|| CollectionError::offset_mismatch("integer", offset.kind_name()))
    }
}

impl<T: Storable + PartialEq> Collection<T> {
    /// Removes the first value equal to `value`.
    ///
    /// Returns `false`, without error, if no value matches.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(position) => {
                self.items.remove(position);
                trace!(index = position, size = self.items.len(), "removed value from collection");
                true
            }
            None => false,
        }
    }
}

impl<T> Collection<T> {
    /// Number of values.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every value. Indices restart at zero.
    pub fn clear(&mut self) {
        self.items.clear();
        trace!("cleared collection");
    }

    /// Index of the first value equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    /// Returns `true` if some value equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Values in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The values as a slice, in index order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// A fresh cursor at index 0.
    pub fn cursor(&self) -> Cursor<'_, Self> {
        Cursor::new(self)
    }

    /// Unwraps the values, in index order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// The validator this collection was built with.
    pub fn validator(&self) -> &Arc<dyn CollectionValidation> {
        &self.validator
    }

    /// The configuration this collection was built with.
    pub fn config(&self) -> ContainerConfig {
        self.config
    }
}

impl<T> Container for Collection<T> {
    fn size(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        Collection::clear(self);
    }

    fn offset_exists(&self, offset: &Offset) -> bool {
        offset
            .as_position()
            .is_some_and(|position| position < self.items.len())
    }
}

impl<T> Seek for Collection<T> {
    type Key<'a> = usize where Self: 'a;
    type Value = T;

    fn entry_at(&self, position: usize) -> Option<(usize, &T)> {
        self.items.get(position).map(|value| (position, value))
    }
}

impl<T: Storable> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}
