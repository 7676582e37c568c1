//! `CollectionFactory`: one place to build containers that share a validator.
//!
//! Every container a factory produces is checked by the same
//! [`CollectionValidation`] handle and starts from the same
//! [`ContainerConfig`]. The default factory hands out the process-wide
//! [`shared_validator`], so building many containers never allocates a new
//! validator.

use crate::collections::{Collection, Dictionary, TypedCollection, TypedDictionary};
use crate::config::ContainerConfig;
use crate::error::Result;
use crate::validation::{shared_validator, CollectionValidation};
use crate::value::Storable;
use std::sync::Arc;
use tracing::debug;

/// Builds containers wired to a common validator and configuration.
#[derive(Debug, Clone)]
pub struct CollectionFactory {
    validator: Arc<dyn CollectionValidation>,
    config: ContainerConfig,
}

impl CollectionFactory {
    /// A factory using the shared validator and the default configuration.
    pub fn new() -> Self {
        Self::with_validator(shared_validator())
    }

    /// A factory whose containers are checked by `validator`.
    pub fn with_validator(validator: Arc<dyn CollectionValidation>) -> Self {
        Self {
            validator,
            config: ContainerConfig::default(),
        }
    }

    /// Replaces the configuration handed to every new container.
    #[must_use]
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    /// The validator handed to every new container.
    pub fn validator(&self) -> &Arc<dyn CollectionValidation> {
        &self.validator
    }

    /// The configuration handed to every new container.
    pub fn config(&self) -> ContainerConfig {
        self.config
    }

    /// A collection seeded with `items`.
    ///
    /// # Errors
    /// Fails with [`CollectionError::NullValue`](crate::CollectionError::NullValue)
    /// if any item is null.
    pub fn new_collection<T, I>(&self, items: I) -> Result<Collection<T>>
    where
        T: Storable,
        I: IntoIterator<Item = T>,
    {
        debug!("building collection");
        Collection::with_items(Arc::clone(&self.validator), self.config, items)
    }

    /// A collection seeded with `items` that only accepts `accepted_type`.
    ///
    /// # Errors
    /// Fails on an empty descriptor, and on any item that is null or not an
    /// instance of `accepted_type`.
    pub fn new_typed_collection<T, I>(
        &self,
        accepted_type: &str,
        items: I,
    ) -> Result<TypedCollection<T>>
    where
        T: Storable,
        I: IntoIterator<Item = T>,
    {
        debug!(accepted_type, "building typed collection");
        TypedCollection::with_items(Arc::clone(&self.validator), self.config, accepted_type, items)
    }

    /// A dictionary seeded with `items`.
    ///
    /// # Errors
    /// Fails on an empty key or a null value.
    pub fn new_dictionary<T, K, I>(&self, items: I) -> Result<Dictionary<T>>
    where
        T: Storable,
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        debug!("building dictionary");
        Dictionary::with_items(Arc::clone(&self.validator), self.config, items)
    }

    /// A dictionary seeded with `items` that only accepts `accepted_type`.
    ///
    /// # Errors
    /// Fails on an empty descriptor, an empty key, or a value that is null
    /// or not an instance of `accepted_type`.
    pub fn new_typed_dictionary<T, K, I>(
        &self,
        accepted_type: &str,
        items: I,
    ) -> Result<TypedDictionary<T>>
    where
        T: Storable,
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        debug!(accepted_type, "building typed dictionary");
        TypedDictionary::with_items(Arc::clone(&self.validator), self.config, accepted_type, items)
    }
}

impl Default for CollectionFactory {
    fn default() -> Self {
        Self::new()
    }
}
