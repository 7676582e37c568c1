//! Offsets: the things a container can be indexed by.
//!
//! Collections are addressed by integer index, dictionaries by string key.
//! The index-style `get`/`set` operations accept anything convertible into an
//! [`Offset`] and reject offsets of the wrong kind with a type mismatch, so
//! the offset has to remember what kind of thing it was built from.

use super::json::json_type_name;
use core::fmt;
use serde_json::Value;

/// A positional index, a string key, or something that is neither.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Offset {
    /// An integer index. Negative indices are valid integers that never exist.
    Index(i64),
    /// A string key.
    Key(String),
    /// An offset of some other kind, carrying its type name.
    Other(&'static str),
}

impl Offset {
    /// Name of the offset's kind: `integer`, `string`, or the other type name.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Index(_) => "integer",
            Self::Key(_) => "string",
            Self::Other(name) => *name,
        }
    }

    /// The index, if this is an integer offset.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(index) => Some(*index),
            _ => None,
        }
    }

    /// The index as a `usize`, if this is a non-negative integer offset.
    pub fn as_position(&self) -> Option<usize> {
        self.as_index().and_then(|index| usize::try_from(index).ok())
    }

    /// The key, if this is a string offset.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => write!(f, "'{key}'"),
            Self::Other(name) => write!(f, "<{name}>"),
        }
    }
}

impl From<usize> for Offset {
    fn from(index: usize) -> Self {
        // No container can hold i64::MAX elements, so saturating keeps it missing.
        Self::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<i64> for Offset {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Offset {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<u32> for Offset {
    fn from(index: u32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<&str> for Offset {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for Offset {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<&String> for Offset {
    fn from(key: &String) -> Self {
        Self::Key(key.clone())
    }
}

impl From<&Value> for Offset {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(index) => Self::Index(index),
                None if n.is_u64() => Self::Index(i64::MAX),
                None => Self::Other(json_type_name(value)),
            },
            Value::String(key) => Self::Key(key.clone()),
            other => Self::Other(json_type_name(other)),
        }
    }
}

impl From<Value> for Offset {
    fn from(value: Value) -> Self {
        match value {
            Value::String(key) => Self::Key(key),
            other => Self::from(&other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        assert_eq!(Offset::from(3usize).kind_name(), "integer");
        assert_eq!(Offset::from("foo").kind_name(), "string");
        assert_eq!(Offset::from(&json!(1.5)).kind_name(), "float");
        assert_eq!(Offset::from(&json!(null)).kind_name(), "null");
        assert_eq!(Offset::from(&json!(true)).kind_name(), "boolean");
    }

    #[test]
    fn test_negative_index_has_no_position() {
        let offset = Offset::from(-1i64);
        assert_eq!(offset.as_index(), Some(-1));
        assert_eq!(offset.as_position(), None);
    }

    #[test]
    fn test_json_conversions() {
        assert_eq!(Offset::from(json!(2)), Offset::Index(2));
        assert_eq!(Offset::from(json!("k")), Offset::Key("k".into()));
        assert_eq!(Offset::from(json!([0])), Offset::Other("array"));
    }
}
