//! Accepted-type descriptors for typed containers.

use crate::error::{CollectionError, Result};
use core::fmt;
use serde::{Deserialize, Serialize};

const PATH_SEPARATOR: &str = "::";

/// A validated, normalized accepted-type name.
///
/// Names are compared as `::`-separated paths: a descriptor matches a runtime
/// type name when the two are equal, or when the descriptor is a whole-segment
/// suffix of the runtime name. `Dummy`, `tests::Dummy` and
/// `::my_crate::tests::Dummy` therefore all match a value whose type name is
/// `my_crate::tests::Dummy`, while `other::u8` does not match `u8`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeDescriptor {
    name: String,
}

impl TypeDescriptor {
    /// Parses and normalizes a descriptor.
    ///
    /// # Errors
    /// Returns [`CollectionError::InvalidTypeDescriptor`] if the name is empty,
    /// or empty once a leading `::` is stripped.
    pub fn new(name: &str) -> Result<Self> {
        let normalized = normalize(name);
        if normalized.is_empty() {
            return Err(CollectionError::InvalidTypeDescriptor {
                descriptor: name.to_owned(),
            });
        }
        Ok(Self {
            name: normalized.to_owned(),
        })
    }

    /// Descriptor for the static type `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self {
            name: core::any::type_name::<T>().to_owned(),
        }
    }

    /// The normalized name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the runtime type name `type_name` satisfies this descriptor.
    pub fn matches(&self, type_name: &str) -> bool {
        let type_name = normalize(type_name);
        let descriptor = self.name.as_str();
        type_name == descriptor || is_path_suffix(type_name, descriptor)
    }
}

fn normalize(name: &str) -> &str {
    let trimmed = name.trim();
    trimmed.strip_prefix(PATH_SEPARATOR).unwrap_or(trimmed)
}

/// `suffix` is a trailing run of whole `::` segments of `path`.
fn is_path_suffix(path: &str, suffix: &str) -> bool {
    !suffix.is_empty()
        && path.len() > suffix.len()
        && path.ends_with(suffix)
        && path[..path.len() - suffix.len()].ends_with(PATH_SEPARATOR)
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for TypeDescriptor {
    type Error = CollectionError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(&name)
    }
}

impl TryFrom<&str> for TypeDescriptor {
    type Error = CollectionError;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl From<TypeDescriptor> for String {
    fn from(descriptor: TypeDescriptor) -> Self {
        descriptor.name
    }
}
