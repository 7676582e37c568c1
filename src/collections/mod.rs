//! The containers.
//!
//! - [`Collection`]: ordered, densely indexed values.
//! - [`Dictionary`]: insertion-ordered, string-keyed values.
//! - [`TypedCollection`] / [`TypedDictionary`]: the same, restricted to one
//!   accepted type.
//!
//! All of them implement [`Container`], the part of the contract that does
//! not depend on how values are addressed.

mod collection;
mod cursor;
mod dictionary;
mod ordered_map;
pub mod typed;

pub use collection::Collection;
pub use cursor::{Cursor, Seek};
pub use dictionary::Dictionary;
pub use typed::{TypeGuard, TypedCollection, TypedDictionary};

use crate::value::Offset;

/// Operations common to every container.
///
/// The trait is object safe so that the validator can check offsets against
/// any container through `&dyn Container`.
pub trait Container {
    /// Number of stored values.
    fn size(&self) -> usize;

    /// Returns `true` if the container holds no values.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes every value.
    fn clear(&mut self);

    /// Returns `true` if `offset` currently addresses a value.
    fn offset_exists(&self, offset: &Offset) -> bool;
}
