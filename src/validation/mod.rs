//! Precondition checks shared by every container.
//!
//! Containers never inspect their inputs directly. Each mutation first runs
//! the relevant checks through a [`CollectionValidation`] implementation and
//! only touches storage once all of them pass, so the rules live in one place
//! and can be swapped out wholesale by injecting a different validator.
//!
//! The validator is stateless. [`shared_validator`] hands out one lazily
//! created, process-wide [`DefaultValidator`]; it is written once and never
//! mutated afterwards, so sharing it across threads needs no locking.

mod descriptor;

pub use descriptor::TypeDescriptor;

use crate::collections::Container;
use crate::error::{CollectionError, Result};
use crate::value::{Offset, Storable};
use core::fmt::Debug;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// The set of rules a container consults before mutating.
///
/// Every method is a pure predicate over its inputs: it returns `Ok(())` or
/// the error describing the violation, and has no other effect.
pub trait CollectionValidation: Send + Sync + Debug {
    /// Fails with [`CollectionError::NullValue`] if `value` is null.
    fn validate_non_null(&self, value: &dyn Storable) -> Result<()>;

    /// Fails with a [`CollectionError::TypeMismatch`] if `offset` is not an integer.
    fn validate_is_int(&self, offset: &Offset) -> Result<()>;

    /// Fails with a [`CollectionError::TypeMismatch`] if `offset` is not a string.
    fn validate_is_string(&self, offset: &Offset) -> Result<()>;

    /// Fails with [`CollectionError::EmptyKey`] if `key` is empty.
    fn validate_non_empty_key(&self, key: &str) -> Result<()>;

    /// Fails if `offset` is not a currently valid index or key of `container`.
    ///
    /// Integer offsets fail with [`CollectionError::IndexNotFound`], string
    /// offsets with [`CollectionError::KeyNotFound`], and offsets of any
    /// other kind with a [`CollectionError::TypeMismatch`].
    fn validate_offset_exists(&self, offset: &Offset, container: &dyn Container) -> Result<()>;

    /// Fails with [`CollectionError::InvalidTypeDescriptor`] if `descriptor` is empty.
    fn validate_non_empty_type_descriptor(&self, descriptor: &str) -> Result<()>;

    /// Fails with a [`CollectionError::TypeMismatch`] naming both types if
    /// `value` is not an instance of `descriptor`.
    fn validate_is_accepted_type(
        &self,
        value: &dyn Storable,
        descriptor: &TypeDescriptor,
    ) -> Result<()>;
}

/// The library's rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultValidator;

impl CollectionValidation for DefaultValidator {
    fn validate_non_null(&self, value: &dyn Storable) -> Result<()> {
        if value.is_null() {
            debug!("rejected null value");
            return Err(CollectionError::NullValue);
        }
        Ok(())
    }

    fn validate_is_int(&self, offset: &Offset) -> Result<()> {
        match offset {
            Offset::Index(_) => Ok(()),
            other => {
                debug!(given = other.kind_name(), "rejected non-integer offset");
                Err(CollectionError::offset_mismatch("integer", other.kind_name()))
            }
        }
    }

    fn validate_is_string(&self, offset: &Offset) -> Result<()> {
        match offset {
            Offset::Key(_) => Ok(()),
            other => {
                debug!(given = other.kind_name(), "rejected non-string offset");
                Err(CollectionError::offset_mismatch("string", other.kind_name()))
            }
        }
    }

    fn validate_non_empty_key(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            debug!("rejected empty key");
            return Err(CollectionError::EmptyKey);
        }
        Ok(())
    }

    fn validate_offset_exists(&self, offset: &Offset, container: &dyn Container) -> Result<()> {
        if container.offset_exists(offset) {
            return Ok(());
        }
        debug!(%offset, size = container.size(), "rejected missing offset");
        Err(match offset {
            Offset::Index(index) => CollectionError::IndexNotFound {
                index: *index,
                size: container.size(),
            },
            Offset::Key(key) => CollectionError::KeyNotFound { key: key.clone() },
            Offset::Other(name) => CollectionError::offset_mismatch("integer or string", name),
        })
    }

    fn validate_non_empty_type_descriptor(&self, descriptor: &str) -> Result<()> {
        TypeDescriptor::new(descriptor).map(drop).inspect_err(|_| {
            debug!(descriptor, "rejected empty type descriptor");
        })
    }

    fn validate_is_accepted_type(
        &self,
        value: &dyn Storable,
        descriptor: &TypeDescriptor,
    ) -> Result<()> {
        if value.is_instance_of(descriptor) {
            return Ok(());
        }
        let given = value.type_name();
        debug!(expected = %descriptor, given = %given, "rejected value of unaccepted type");
        Err(CollectionError::value_mismatch(descriptor.name(), &given))
    }
}

static SHARED_VALIDATOR: OnceLock<Arc<dyn CollectionValidation>> = OnceLock::new();

/// The process-wide validator, created on first use.
///
/// Every call returns a handle to the same instance.
pub fn shared_validator() -> Arc<dyn CollectionValidation> {
    Arc::clone(SHARED_VALIDATOR.get_or_init(|| Arc::new(DefaultValidator)))
}
