//! `serde_json::Value` as the heterogeneous value model.
//!
//! A `Collection<serde_json::Value>` can hold a mix of booleans, numbers,
//! strings, arrays and objects, and `Value::Null` is rejected like any other
//! null. Type names follow the JSON data model, with `integer` and `float`
//! split so that accepted-type checks can tell them apart. The descriptor
//! `number` accepts both, `int` is an alias for `integer` and `bool` for
//! `boolean`.

use super::Storable;
use crate::validation::TypeDescriptor;
use serde_json::Value;
use std::borrow::Cow;

pub(crate) const NUMBER: &str = "number";
pub(crate) const INT: &str = "int";
const BOOL: &str = "bool";

/// JSON type name of `value`.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Storable for Value {
    fn is_null(&self) -> bool {
        self.is_null()
    }

    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(json_type_name(self))
    }

    fn is_instance_of(&self, descriptor: &TypeDescriptor) -> bool {
        match self {
            Value::Null => false,
            Value::Number(_) if descriptor.name() == NUMBER => true,
            Value::Number(n) if descriptor.name() == INT => !n.is_f64(),
            Value::Bool(_) if descriptor.name() == BOOL => true,
            other => descriptor.matches(json_type_name(other)),
        }
    }
}
