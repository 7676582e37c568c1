/// Implements [`Storable`](crate::Storable) for a user type.
///
/// The runtime type name is the type's full path, so typed containers can
/// accept it by its short name, any path suffix, or the full path.
///
/// # Example
///
/// ```rust
/// use stowage::{storable, TypedCollection};
///
/// struct Invoice;
/// storable!(Invoice);
///
/// let mut invoices = TypedCollection::new("Invoice").unwrap();
/// invoices.add(Invoice).unwrap();
/// assert_eq!(invoices.size(), 1);
/// ```
///
/// Extra descriptor names can be listed after a colon. Instances then also
/// satisfy those descriptors, which stands in for "implements interface":
///
/// ```rust
/// use stowage::{storable, TypedDictionary};
///
/// struct Invoice;
/// storable!(Invoice: "Billable", "Auditable");
///
/// let mut ledger = TypedDictionary::new("Billable").unwrap();
/// ledger.add("march", Invoice).unwrap();
/// assert!(ledger.contains_key("march"));
/// ```
#[macro_export]
macro_rules! storable {
    ($ty:ty : $($also:literal),+ $(,)?) => {
        impl $crate::Storable for $ty {
            fn type_name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(::core::any::type_name::<$ty>())
            }

            fn is_instance_of(&self, descriptor: &$crate::TypeDescriptor) -> bool {
                descriptor.matches(&$crate::Storable::type_name(self))
                    $(|| descriptor.matches($also))+
            }
        }
    };
    ($ty:ty) => {
        impl $crate::Storable for $ty {
            fn type_name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(::core::any::type_name::<$ty>())
            }
        }
    };
}
