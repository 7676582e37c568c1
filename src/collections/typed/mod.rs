//! Type-restricted containers.
//!
//! [`TypedCollection`] and [`TypedDictionary`] wrap a base container and route
//! every write through a [`TypeGuard`] first. The guard owns the accepted-type
//! descriptor, fixed at construction, and rejects values that are null or not
//! instances of it before the base container is touched. Reads go straight to
//! the base container through `Deref`; there is no mutable access that could
//! bypass the guard.

mod collection;
mod dictionary;

pub use collection::TypedCollection;
pub use dictionary::TypedDictionary;

use crate::error::Result;
use crate::validation::{CollectionValidation, TypeDescriptor};
use crate::value::Storable;
use std::sync::Arc;

/// Checks values against one accepted type.
#[derive(Debug, Clone)]
pub struct TypeGuard {
    descriptor: TypeDescriptor,
    validator: Arc<dyn CollectionValidation>,
}

impl TypeGuard {
    /// Creates a guard for `descriptor`.
    ///
    /// # Errors
    /// Fails with [`CollectionError::InvalidTypeDescriptor`](crate::CollectionError::InvalidTypeDescriptor)
    /// if `descriptor` is empty.
    pub fn new(validator: Arc<dyn CollectionValidation>, descriptor: &str) -> Result<Self> {
        validator.validate_non_empty_type_descriptor(descriptor)?;
        Ok(Self {
            descriptor: TypeDescriptor::new(descriptor)?,
            validator,
        })
    }

    /// The accepted type.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Passes non-null instances of the accepted type.
    ///
    /// # Errors
    /// [`CollectionError::NullValue`](crate::CollectionError::NullValue) for
    /// null values, otherwise a type mismatch naming both types.
    pub fn check(&self, value: &dyn Storable) -> Result<()> {
        self.validator.validate_non_null(value)?;
        self.validator.validate_is_accepted_type(value, &self.descriptor)
    }

    /// Checks every value, stopping at the first rejection.
    ///
    /// # Errors
    /// The first error [`check`](Self::check) reports.
    pub fn check_all<'a, T, I>(&self, values: I) -> Result<()>
    where
        T: Storable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        values.into_iter().try_for_each(|value| self.check(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CollectionError, ErrorKind};
    use crate::validation::shared_validator;

    #[test]
    fn test_empty_descriptor_rejected() {
        let err = TypeGuard::new(shared_validator(), "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTypeDescriptor);
    }

    #[test]
    fn test_null_checked_before_type() {
        let guard = TypeGuard::new(shared_validator(), "i32").unwrap();
        assert_eq!(guard.check(&None::<i32>), Err(CollectionError::NullValue));
        assert!(guard.check(&Some(1i32)).is_ok());
        assert_eq!(guard.check(&1u8).unwrap_err().kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_check_all_stops_at_first_rejection() {
        let guard = TypeGuard::new(shared_validator(), "u8").unwrap();
        let values: Vec<Box<dyn Storable>> = vec![Box::new(1u8), Box::new("x"), Box::new(2i64)];
        let err = guard.check_all(values.iter()).unwrap_err();
        assert!(err.to_string().contains("\"str\""));
    }
}
