use serde_json::{json, Value};
use std::rc::Rc;
use stowage::{
    storable, CollectionError, ErrorKind, MismatchTarget, Storable, TypeDescriptor,
    TypedCollection, TypedDictionary,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct CrashTestDummy {
    name: &'static str,
}
storable!(CrashTestDummy: "Crashable");

#[derive(Debug, Default, Clone, PartialEq)]
struct Mannequin;
storable!(Mannequin);

#[test]
fn test_dummy_accepted_string_rejected() {
    let mut collection: TypedCollection<Box<dyn Storable>> =
        TypedCollection::new("CrashTestDummy").unwrap();
    collection.add(Box::new(CrashTestDummy::default())).unwrap();
    assert_eq!(collection.size(), 1);

    let err = collection.add(Box::new("not a dummy")).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.to_string(), r#"value must be of type "CrashTestDummy", type "str" given"#);
    assert_eq!(collection.size(), 1);
}

#[test]
fn test_empty_descriptor_rejected() {
    let err = TypedDictionary::<CrashTestDummy>::new("").unwrap_err();
    assert_eq!(err, CollectionError::InvalidTypeDescriptor { descriptor: String::new() });

    let err = TypedCollection::<CrashTestDummy>::new("   ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTypeDescriptor);
}

#[test]
fn test_declared_interface_is_accepted() {
    let mut crashables: TypedCollection<Box<dyn Storable>> =
        TypedCollection::new("Crashable").unwrap();
    crashables.add(Box::new(CrashTestDummy { name: "a" })).unwrap();
    assert!(crashables.add(Box::new(Mannequin)).is_err());
    assert_eq!(crashables.size(), 1);
}

#[test]
fn test_descriptor_from_static_type() {
    let descriptor = TypeDescriptor::of::<Mannequin>();
    let collection =
        TypedCollection::from_items(descriptor.name(), [Mannequin, Mannequin]).unwrap();
    assert_eq!(collection.accepted_type(), &descriptor);
    assert_eq!(collection.size(), 2);
}

#[test]
fn test_every_retrievable_value_is_an_instance() {
    let descriptor = TypeDescriptor::new("string").unwrap();
    let mut dictionary = TypedDictionary::new("string").unwrap();
    for (key, value) in [("a", json!("x")), ("b", json!(1)), ("c", json!("y")), ("d", Value::Null)] {
        let _ = dictionary.add(key, value);
    }
    assert_eq!(dictionary.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    assert!(dictionary.values().all(|value| value.is_instance_of(&descriptor)));
}

#[test]
fn test_shared_instances_stay_shared() -> anyhow::Result<()> {
    let first = Rc::new(CrashTestDummy { name: "first" });
    let mut dictionary = TypedDictionary::new("CrashTestDummy")?;
    dictionary.add("first", Rc::clone(&first))?;
    dictionary.add("again", Rc::clone(&first))?;
    assert_eq!(Rc::strong_count(&first), 3);
    assert_eq!(dictionary.remove(&first), 2);
    assert_eq!(Rc::strong_count(&first), 1);
    Ok(())
}

#[test]
fn test_type_mismatch_names_both_sides() {
    let mut numbers = TypedCollection::new("u8").unwrap();
    numbers.add(Some(1u8)).unwrap();
    let mut mixed: TypedCollection<Box<dyn Storable>> = TypedCollection::new("u8").unwrap();
    let err = mixed.add(Box::new(1u16)).err().unwrap();
    assert_eq!(
        err,
        CollectionError::TypeMismatch {
            target: MismatchTarget::Value,
            expected: "u8".into(),
            given: "u16".into(),
        }
    );
    assert_eq!(numbers.add(None).unwrap_err(), CollectionError::NullValue);
}

#[test]
fn test_unwrapping_drops_the_restriction() {
    let typed = TypedCollection::from_items("i32", [1, 2]).unwrap();
    let mut plain = typed.into_inner();
    plain.add(3).unwrap();
    assert_eq!(plain.as_slice(), &[1, 2, 3]);
}
