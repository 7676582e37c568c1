use super::TypeGuard;
use crate::collections::{Collection, Container};
use crate::config::ContainerConfig;
use crate::error::Result;
use crate::validation::{shared_validator, CollectionValidation, TypeDescriptor};
use crate::value::{Offset, Storable};
use core::ops::Deref;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// A [`Collection`] that only accepts instances of one type.
#[derive(Debug, Clone)]
pub struct TypedCollection<T> {
    guard: TypeGuard,
    inner: Collection<T>,
}

impl<T: Storable> TypedCollection<T> {
    /// Creates an empty collection accepting `accepted_type`, using the shared validator.
    ///
    /// # Errors
    /// Fails with [`CollectionError::InvalidTypeDescriptor`](crate::CollectionError::InvalidTypeDescriptor)
    /// if `accepted_type` is empty.
    pub fn new(accepted_type: &str) -> Result<Self> {
        Self::with_validator(shared_validator(), accepted_type)
    }

    /// Creates an empty collection accepting `accepted_type`, checked by `validator`.
    ///
    /// # Errors
    /// See [`new`](Self::new).
    pub fn with_validator(
        validator: Arc<dyn CollectionValidation>,
        accepted_type: &str,
    ) -> Result<Self> {
        Self::with_items(validator, ContainerConfig::default(), accepted_type, [])
    }

    /// Creates a collection seeded with `items`, using the shared validator.
    ///
    /// # Errors
    /// Fails if the descriptor is empty or any item is null or of the wrong
    /// type. Nothing is built in that case.
    pub fn from_items<I>(accepted_type: &str, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_items(shared_validator(), ContainerConfig::default(), accepted_type, items)
    }

    /// Creates a collection seeded with `items` under an explicit validator and configuration.
    ///
    /// # Errors
    /// See [`from_items`](Self::from_items).
    pub fn with_items<I>(
        validator: Arc<dyn CollectionValidation>,
        config: ContainerConfig,
        accepted_type: &str,
        items: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let guard = TypeGuard::new(Arc::clone(&validator), accepted_type)?;
        let staged: Vec<T> = items.into_iter().collect();
        guard.check_all(&staged)?;
        let inner = Collection::with_items(validator, config, staged)?;
        Ok(Self { guard, inner })
    }

    /// Appends `value`.
    ///
    /// # Errors
    /// Fails with [`CollectionError::NullValue`](crate::CollectionError::NullValue)
    /// or a type mismatch naming the accepted and the given type.
    pub fn add(&mut self, value: T) -> Result<&mut Self> {
        self.guard.check(&value)?;
        self.inner.add(value)?;
        Ok(self)
    }

    /// Appends every item, or none of them.
    ///
    /// # Errors
    /// The first rejection among `items`.
    pub fn extend<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let staged: Vec<T> = items.into_iter().collect();
        self.guard.check_all(&staged)?;
        self.inner.extend(staged)
    }

    /// Overwrites the value at an existing `index`.
    ///
    /// # Errors
    /// Type check failures first, then those of [`Collection::replace`].
    pub fn replace(&mut self, index: usize, value: T) -> Result<&mut Self> {
        self.guard.check(&value)?;
        self.inner.replace(index, value)?;
        Ok(self)
    }

    /// Index-style write.
    ///
    /// # Errors
    /// Type check failures first, then those of [`Collection::set`].
    pub fn set(&mut self, offset: impl Into<Offset>, value: T) -> Result<()> {
        self.guard.check(&value)?;
        self.inner.set(offset, value)
    }

    /// See [`Collection::remove_at`].
    ///
    /// # Errors
    /// [`CollectionError::IndexNotFound`](crate::CollectionError::IndexNotFound)
    /// if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.inner.remove_at(index)
    }

    /// See [`Collection::remove`].
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.remove(value)
    }
}

impl<T> TypedCollection<T> {
    /// The accepted type.
    pub fn accepted_type(&self) -> &TypeDescriptor {
        self.guard.descriptor()
    }

    /// Removes every value. The accepted type is kept.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Unwraps the base collection, dropping the type restriction.
    pub fn into_inner(self) -> Collection<T> {
        self.inner
    }
}

impl<T> Deref for TypedCollection<T> {
    type Target = Collection<T>;

    fn deref(&self) -> &Collection<T> {
        &self.inner
    }
}

impl<T> Container for TypedCollection<T> {
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn offset_exists(&self, offset: &Offset) -> bool {
        self.inner.offset_exists(offset)
    }
}

impl<'a, T> IntoIterator for &'a TypedCollection<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Serialize> Serialize for TypedCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}
