use serde_json::json;
use std::sync::Arc;
use stowage::{
    shared_validator, CollectionError, CollectionFactory, ContainerConfig, ErrorKind,
};

#[test]
fn test_shared_validator_is_a_singleton() {
    let first = shared_validator();
    let second = shared_validator();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(CollectionFactory::new().validator(), &first));
}

#[test]
fn test_every_constructor() -> anyhow::Result<()> {
    let factory = CollectionFactory::default();

    let collection = factory.new_collection(["a", "b"])?;
    assert_eq!(collection.size(), 2);

    let typed = factory.new_typed_collection("integer", [json!(1), json!(2)])?;
    assert_eq!(typed.size(), 2);

    let dictionary = factory.new_dictionary([("k", 1.5)])?;
    assert_eq!(dictionary.find("k"), Ok(&1.5));

    let typed_dictionary = factory.new_typed_dictionary("bool", [("on", true)])?;
    assert!(typed_dictionary.contains_key("on"));
    Ok(())
}

#[test]
fn test_empty_seeds() {
    let factory = CollectionFactory::new();
    assert!(factory.new_collection(Vec::<i32>::new()).unwrap().is_empty());
    assert!(factory
        .new_dictionary(Vec::<(String, i32)>::new())
        .unwrap()
        .is_empty());
}

#[test]
fn test_failures_surface_unchanged() {
    let factory = CollectionFactory::new();
    assert_eq!(
        factory.new_collection([Some(1), None]).unwrap_err(),
        CollectionError::NullValue
    );
    assert_eq!(
        factory
            .new_typed_dictionary::<i32, &str, _>("", [])
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidTypeDescriptor
    );
}

#[test]
fn test_config_from_json_reaches_containers() -> anyhow::Result<()> {
    let config = ContainerConfig::from_json(r#"{"append_on_set": true, "initial_capacity": 8}"#)?;
    let factory = CollectionFactory::new().with_config(config);
    let mut collection = factory.new_collection([0])?;
    collection.set(1usize, 1)?;
    collection.set(2usize, 2)?;
    assert_eq!(collection.as_slice(), &[0, 1, 2]);
    assert_eq!(collection.config().initial_capacity, 8);
    Ok(())
}
