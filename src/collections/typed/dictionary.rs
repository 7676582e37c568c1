use super::TypeGuard;
use crate::collections::{Container, Cursor, Dictionary};
use crate::config::ContainerConfig;
use crate::error::Result;
use crate::validation::{shared_validator, CollectionValidation, TypeDescriptor};
use crate::value::{Offset, Storable};
use core::ops::Deref;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// A [`Dictionary`] that only accepts instances of one type.
#[derive(Debug, Clone)]
pub struct TypedDictionary<T> {
    guard: TypeGuard,
    inner: Dictionary<T>,
}

impl<T: Storable> TypedDictionary<T> {
    /// Creates an empty dictionary accepting `accepted_type`, using the shared validator.
    ///
    /// # Errors
    /// Fails with [`CollectionError::InvalidTypeDescriptor`](crate::CollectionError::InvalidTypeDescriptor)
    /// if `accepted_type` is empty.
    pub fn new(accepted_type: &str) -> Result<Self> {
        Self::with_validator(shared_validator(), accepted_type)
    }

    /// Creates an empty dictionary accepting `accepted_type`, checked by `validator`.
    ///
    /// # Errors
    /// See [`new`](Self::new).
    pub fn with_validator(
        validator: Arc<dyn CollectionValidation>,
        accepted_type: &str,
    ) -> Result<Self> {
        Self::with_items(
            validator,
            ContainerConfig::default(),
            accepted_type,
            core::iter::empty::<(String, T)>(),
        )
    }

    /// Creates a dictionary seeded with `items`, using the shared validator.
    ///
    /// # Errors
    /// Fails if the descriptor is empty, a key is empty, or a value is null
    /// or of the wrong type. Nothing is built in that case.
    pub fn from_items<K, I>(accepted_type: &str, items: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        Self::with_items(shared_validator(), ContainerConfig::default(), accepted_type, items)
    }

    /// Creates a dictionary seeded with `items` under an explicit validator and configuration.
    ///
    /// # Errors
    /// See [`from_items`](Self::from_items).
    pub fn with_items<K, I>(
        validator: Arc<dyn CollectionValidation>,
        config: ContainerConfig,
        accepted_type: &str,
        items: I,
    ) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        let guard = TypeGuard::new(Arc::clone(&validator), accepted_type)?;
        let staged = stage(&guard, items)?;
        let inner = Dictionary::with_items(validator, config, staged)?;
        Ok(Self { guard, inner })
    }

    /// Stores `value` at `key`, overwriting any existing value.
    ///
    /// # Errors
    /// Null and type checks run first, then the key checks of [`Dictionary::add`].
    pub fn add(&mut self, key: impl Into<String>, value: T) -> Result<&mut Self> {
        self.guard.check(&value)?;
        self.inner.add(key, value)?;
        Ok(self)
    }

    /// Same as [`add`](Self::add).
    ///
    /// # Errors
    /// See [`add`](Self::add).
    pub fn replace(&mut self, key: impl Into<String>, value: T) -> Result<&mut Self> {
        self.add(key, value)
    }

    /// Stores every pair, or none of them.
    ///
    /// # Errors
    /// The first rejection among `items`.
    pub fn extend<K, I>(&mut self, items: I) -> Result<()>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        let staged = stage(&self.guard, items)?;
        self.inner.extend(staged)
    }

    /// Key-style write.
    ///
    /// # Errors
    /// Type check failures first, then those of [`Dictionary::set`].
    pub fn set(&mut self, offset: impl Into<Offset>, value: T) -> Result<()> {
        self.guard.check(&value)?;
        self.inner.set(offset, value)
    }

    /// See [`Dictionary::remove`].
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.inner.remove(value)
    }
}

impl<T> TypedDictionary<T> {
    /// The accepted type.
    pub fn accepted_type(&self) -> &TypeDescriptor {
        self.guard.descriptor()
    }

    /// See [`Dictionary::remove_at`].
    pub fn remove_at(&mut self, key: &str) -> Option<T> {
        self.inner.remove_at(key)
    }

    /// Removes every entry. The accepted type is kept.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Unwraps the base dictionary, dropping the type restriction.
    pub fn into_inner(self) -> Dictionary<T> {
        self.inner
    }
}

/// Collects `items` with owned keys after every value has passed `guard`.
fn stage<T, K, I>(guard: &TypeGuard, items: I) -> Result<Vec<(String, T)>>
where
    T: Storable,
    K: Into<String>,
    I: IntoIterator<Item = (K, T)>,
{
    let staged: Vec<(String, T)> = items
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .collect();
    guard.check_all(staged.iter().map(|(_, value)| value))?;
    Ok(staged)
}

impl<T> Deref for TypedDictionary<T> {
    type Target = Dictionary<T>;

    fn deref(&self) -> &Dictionary<T> {
        &self.inner
    }
}

impl<T> Container for TypedDictionary<T> {
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

impl<'a, T> IntoIterator for &'a TypedDictionary<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Cursor<'a, Dictionary<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.cursor()
    }
}

impl<T: Serialize> Serialize for TypedDictionary<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}
