//! The value model: what a container is allowed to hold.
//!
//! Every value written into a container must implement [`Storable`]. The trait
//! answers the three questions the validator needs to ask about a value:
//!
//! - is it the null sentinel? ([`Storable::is_null`])
//! - what is its runtime type called? ([`Storable::type_name`])
//! - is it an instance of a given accepted type? ([`Storable::is_instance_of`])
//!
//! Plain Rust values are never null. `Option::None` and
//! `serde_json::Value::Null` are the two null sentinels; the former lets a
//! statically-typed container carry an explicit absence marker, the latter is
//! the heterogeneous value model (see [`json`]).
//!
//! User types opt in with the [`storable!`](crate::storable) macro.

mod json;
pub mod offset;

pub use offset::Offset;

use crate::validation::TypeDescriptor;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A value that can be stored in a collection or dictionary.
///
/// The trait is object safe; the validator receives values as `&dyn Storable`.
pub trait Storable {
    /// Returns `true` if this value is the null sentinel.
    fn is_null(&self) -> bool {
        false
    }

    /// The runtime type name of this value, used in mismatch messages.
    fn type_name(&self) -> Cow<'_, str>;

    /// Returns `true` if this value satisfies `descriptor`.
    ///
    /// Null values are never instances of anything.
    fn is_instance_of(&self, descriptor: &TypeDescriptor) -> bool {
        !self.is_null() && descriptor.matches(&self.type_name())
    }
}

macro_rules! impl_storable_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Storable for $ty {
                #[inline]
                fn type_name(&self) -> Cow<'_, str> {
                    Cow::Borrowed(core::any::type_name::<$ty>())
                }
            }
        )*
    };
}

impl_storable_primitive!(bool, char, f32, f64, String, str);

// Integers also satisfy the `int` alias shared with the JSON model.
macro_rules! impl_storable_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Storable for $ty {
                #[inline]
                fn type_name(&self) -> Cow<'_, str> {
                    Cow::Borrowed(core::any::type_name::<$ty>())
                }

                #[inline]
                fn is_instance_of(&self, descriptor: &TypeDescriptor) -> bool {
                    descriptor.name() == json::INT || descriptor.matches(&self.type_name())
                }
            }
        )*
    };
}

impl_storable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Storable> Storable for Vec<T> {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(core::any::type_name::<Vec<T>>())
    }
}

impl<T: Storable> Storable for Option<T> {
    fn is_null(&self) -> bool {
        self.as_ref().map_or(true, Storable::is_null)
    }

    fn type_name(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.type_name(),
            None => Cow::Borrowed("null"),
        }
    }

    fn is_instance_of(&self, descriptor: &TypeDescriptor) -> bool {
        self.as_ref().is_some_and(|value| value.is_instance_of(descriptor))
    }
}

// Pointer-like wrappers are transparent: `Rc<Dummy>` is a `Dummy`.
macro_rules! impl_storable_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Storable + ?Sized> Storable for $ptr<T> {
                #[inline]
                fn is_null(&self) -> bool {
                    (**self).is_null()
                }

                #[inline]
                fn type_name(&self) -> Cow<'_, str> {
                    (**self).type_name()
                }

                #[inline]
                fn is_instance_of(&self, descriptor: &TypeDescriptor) -> bool {
                    (**self).is_instance_of(descriptor)
                }
            }
        )*
    };
}

impl_storable_pointer!(Box, Rc, Arc);

impl<T: Storable + ?Sized> Storable for &T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    #[inline]
    fn type_name(&self) -> Cow<'_, str> {
        (**self).type_name()
    }

    #[inline]
    fn is_instance_of(&self, descriptor: &TypeDescriptor) -> bool {
        (**self).is_instance_of(descriptor)
    }
}
