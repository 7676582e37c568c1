//! Error types shared by every container in the crate.
//!
//! All validation failures surface as a single [`CollectionError`] enum. Each
//! variant corresponds to one kind of precondition violation; the attached
//! fields carry enough context to render a useful message without the caller
//! having to re-inspect the container.

use core::fmt;

/// Result alias used throughout the crate.
pub type Result<T, E = CollectionError> = core::result::Result<T, E>;

/// What a [`CollectionError::TypeMismatch`] was raised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchTarget {
    /// An index or key used to address a container.
    Offset,
    /// A value being written into a container.
    Value,
}

impl fmt::Display for MismatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset => f.write_str("offset"),
            Self::Value => f.write_str("value"),
        }
    }
}

/// Fieldless discriminant of [`CollectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`CollectionError::NullValue`].
    NullValue,
    /// See [`CollectionError::IndexNotFound`].
    IndexNotFound,
    /// See [`CollectionError::KeyNotFound`].
    KeyNotFound,
    /// See [`CollectionError::TypeMismatch`].
    TypeMismatch,
    /// See [`CollectionError::InvalidTypeDescriptor`].
    InvalidTypeDescriptor,
    /// See [`CollectionError::EmptyKey`].
    EmptyKey,
}

/// The error type for every fallible container operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// A null value was supplied where one is forbidden.
    #[error("collection operations will not accept null values")]
    NullValue,

    /// A positional index does not exist in a collection.
    #[error("the index {index} does not exist in the collection (size {size})")]
    IndexNotFound {
        /// The requested index.
        index: i64,
        /// Size of the collection at the time of the request.
        size: usize,
    },

    /// A string key does not exist in a dictionary.
    #[error("the key '{key}' does not exist in the dictionary")]
    KeyNotFound {
        /// The requested key.
        key: String,
    },

    /// An offset or value was of the wrong kind.
    #[error("{target} must be of type \"{expected}\", type \"{given}\" given")]
    TypeMismatch {
        /// Whether the offset or the value was mistyped.
        target: MismatchTarget,
        /// The expected type name or accepted-type descriptor.
        expected: String,
        /// The runtime type that was actually supplied.
        given: String,
    },

    /// An accepted-type descriptor was empty.
    #[error("accepted type descriptor cannot be empty (got {descriptor:?})")]
    InvalidTypeDescriptor {
        /// The rejected descriptor, as supplied.
        descriptor: String,
    },

    /// An empty string was used as a dictionary key.
    #[error("dictionary keys must be non-empty strings")]
    EmptyKey,
}

impl CollectionError {
    /// Returns the kind of this error, without its context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullValue => ErrorKind::NullValue,
            Self::IndexNotFound { .. } => ErrorKind::IndexNotFound,
            Self::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::InvalidTypeDescriptor { .. } => ErrorKind::InvalidTypeDescriptor,
            Self::EmptyKey => ErrorKind::EmptyKey,
        }
    }

    /// Builds an offset-kind mismatch.
    pub(crate) fn offset_mismatch(expected: &str, given: &str) -> Self {
        Self::TypeMismatch {
            target: MismatchTarget::Offset,
            expected: expected.to_owned(),
            given: given.to_owned(),
        }
    }

    /// Builds a value-kind mismatch.
    pub(crate) fn value_mismatch(expected: &str, given: &str) -> Self {
        Self::TypeMismatch {
            target: MismatchTarget::Value,
            expected: expected.to_owned(),
            given: given.to_owned(),
        }
    }
}
