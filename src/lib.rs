//! # `stowage` - Validated Collection Toolkit
//!
//! General-purpose in-memory containers that refuse bad input up front:
//! ordered collections, string-keyed dictionaries, and type-restricted
//! variants of both. Every write runs through a pluggable validator before
//! storage is touched, so a failed operation never leaves a container half
//! changed.
//!
//! ## Guarantees
//!
//! - **No nulls**: no operation can store a null value (`None`,
//!   `serde_json::Value::Null`, or a user type that reports itself null).
//! - **Contiguous indices**: a [`Collection`] of size `n` is addressable at
//!   exactly `0..n`; removing an element shifts everything after it down.
//! - **Insertion order**: a [`Dictionary`] iterates in the order keys were
//!   first inserted; overwriting a key keeps its position.
//! - **One type per typed container**: every value retrievable from a
//!   [`TypedCollection`] or [`TypedDictionary`] is an instance of the
//!   descriptor it was built with.
//! - **All-or-nothing bulk writes**: seeded construction and `extend`
//!   validate every item before inserting any of them.
//!
//! ## Architecture
//!
//! 1. **Values** ([`Storable`]): what a container may hold. Implemented for
//!    the std primitives, smart pointers, `Option`, and `serde_json::Value`;
//!    user types opt in with [`storable!`].
//! 2. **Validation** ([`CollectionValidation`]): the rule set. The
//!    [`DefaultValidator`] is stateless and shared process-wide through
//!    [`shared_validator`].
//! 3. **Containers** ([`Collection`], [`Dictionary`] and their typed
//!    wrappers): storage plus the rules, with explicit [`Cursor`]s for
//!    iteration.
//! 4. **Factory** ([`CollectionFactory`]): builds containers wired to one
//!    validator and one [`ContainerConfig`].
//!
//! ## Example
//!
//! ```rust
//! use stowage::{Collection, CollectionError, Dictionary, TypedCollection};
//!
//! let mut names = Collection::from_items(["foo", "bar", "baz"]).unwrap();
//! names.remove_at(0).unwrap();
//! assert_eq!(names.find(0), Ok(&"bar"));
//!
//! let mut config = Dictionary::new();
//! config.add("mode", "fast").unwrap();
//! assert_eq!(config.add("", "oops").unwrap_err(), CollectionError::EmptyKey);
//!
//! let mut ints = TypedCollection::new("i32").unwrap();
//! ints.add(Some(7)).unwrap();
//! assert_eq!(ints.add(None).unwrap_err(), CollectionError::NullValue);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;
pub mod config;
pub mod error;
pub mod factory;
pub mod validation;
pub mod value;

pub use collections::{
    Collection, Container, Cursor, Dictionary, Seek, TypeGuard, TypedCollection, TypedDictionary,
};
pub use config::ContainerConfig;
pub use error::{CollectionError, ErrorKind, MismatchTarget, Result};
pub use factory::CollectionFactory;
pub use validation::{shared_validator, CollectionValidation, DefaultValidator, TypeDescriptor};
pub use value::{Offset, Storable};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // The default rule set carries no state.
    assert!(mem::size_of::<DefaultValidator>() == 0);

    // Configuration is passed around by value.
    assert!(mem::size_of::<ContainerConfig>() <= mem::size_of::<usize>() * 2);
};
