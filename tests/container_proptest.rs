use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use stowage::{Collection, Dictionary, ErrorKind, Storable, TypeDescriptor, TypedDictionary};

#[derive(Debug, Clone)]
enum ListOp {
    Add(Option<u16>),
    RemoveAt(usize),
    Replace(usize, Option<u16>),
    Clear,
}

#[derive(Debug, Clone)]
enum MapOp {
    Add(String, Option<u16>),
    RemoveAt(String),
    Remove(u16),
}

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        4 => proptest::option::weighted(0.8, any::<u16>()).prop_map(ListOp::Add),
        2 => (0usize..12).prop_map(ListOp::RemoveAt),
        2 => (0usize..12, proptest::option::of(any::<u16>()))
            .prop_map(|(i, v)| ListOp::Replace(i, v)),
        1 => Just(ListOp::Clear),
    ]
}

fn map_op() -> impl Strategy<Value = MapOp> {
    let key = "[a-d]{0,2}";
    prop_oneof![
        4 => (key, proptest::option::weighted(0.8, 0u16..4)).prop_map(|(k, v)| MapOp::Add(k, v)),
        2 => key.prop_map(MapOp::RemoveAt),
        1 => (0u16..4).prop_map(MapOp::Remove),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn test_collection_matches_vec(ops in proptest::collection::vec(list_op(), 1..80)) {
        let mut model: Vec<Option<u16>> = Vec::new();
        let mut collection = Collection::new();

        for op in ops {
            match op {
                ListOp::Add(value) => {
                    let accepted = collection.add(value).is_ok();
                    prop_assert_eq!(accepted, value.is_some());
                    if accepted {
                        model.push(value);
                    }
                }
                ListOp::RemoveAt(index) => {
                    let removed = collection.remove_at(index).ok();
                    let expected = (index < model.len()).then(|| model.remove(index));
                    prop_assert_eq!(removed, expected);
                }
                ListOp::Replace(index, value) => {
                    let result = collection.replace(index, value);
                    if value.is_none() {
                        prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::NullValue);
                    } else if index < model.len() {
                        prop_assert!(result.is_ok());
                        model[index] = value;
                    } else {
                        prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::IndexNotFound);
                    }
                }
                ListOp::Clear => {
                    collection.clear();
                    model.clear();
                }
            }

            // Indices are exactly 0..size and nothing stored is null.
            prop_assert_eq!(collection.size(), model.len());
            prop_assert_eq!(collection.as_slice(), model.as_slice());
            prop_assert!(collection.iter().all(|value| !value.is_null()));
            prop_assert!(collection.find(model.len()).is_err());
        }

        collection.clear();
        collection.clear();
        prop_assert_eq!(collection.size(), 0);
    }

    #[test]
    fn test_dictionary_matches_btree_map(ops in proptest::collection::vec(map_op(), 1..80)) {
        let mut model: BTreeMap<String, u16> = BTreeMap::new();
        let mut dictionary = Dictionary::new();

        for op in ops {
            match op {
                MapOp::Add(key, value) => {
                    let accepted = dictionary.add(key.clone(), value).is_ok();
                    prop_assert_eq!(accepted, !key.is_empty() && value.is_some());
                    if let (true, Some(value)) = (accepted, value) {
                        model.insert(key, value);
                    }
                }
                MapOp::RemoveAt(key) => {
                    let removed = dictionary.remove_at(&key).flatten();
                    prop_assert_eq!(removed, model.remove(&key));
                }
                MapOp::Remove(value) => {
                    let removed = dictionary.remove(&Some(value));
                    let before = model.len();
                    model.retain(|_, stored| *stored != value);
                    prop_assert_eq!(removed, before - model.len());
                }
            }

            prop_assert_eq!(dictionary.size(), model.len());
            for (key, value) in &model {
                prop_assert_eq!(dictionary.find(key), Ok(&Some(*value)));
            }
        }
    }

    #[test]
    fn test_typed_dictionary_only_holds_accepted_kind(
        entries in proptest::collection::vec(("[a-z]{1,3}", json_value()), 0..40)
    ) {
        let descriptor = TypeDescriptor::new("string").unwrap();
        let mut dictionary = TypedDictionary::new("string").unwrap();
        for (key, value) in entries {
            let expected = matches!(value, Value::String(_));
            prop_assert_eq!(dictionary.add(key.clone(), value.clone()).is_ok(), expected);
            if expected {
                prop_assert_eq!(dictionary.find(&key), Ok(&value));
            }
        }
        prop_assert!(dictionary.values().all(|value| value.is_instance_of(&descriptor)));
        prop_assert!(!dictionary.values().any(|value| *value == json!(null)));
    }
}
