use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A runtime value stored at one field of a subobject.
///
/// Mirrors the schema's `FieldKind`: the engine dispatches on the declared
/// kind and expects the value to have the matching shape (a mismatch is
/// reported as an Error record, not a panic).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Text(String),
    Name(String),
    /// Underlying integer of an integer-backed enum. Rendering goes through
    /// the schema's enum definition.
    Enum(i64),
    /// Referent's identifying name; `None` renders as the literal `NULL`.
    ObjectRef(Option<String>),
    /// Referenced class name; `None` renders as the literal `NULL`.
    ClassRef(Option<String>),
    /// Soft reference's own path string. Never resolved during comparison.
    SoftRef(String),
    /// Nested struct: field name to value.
    Struct(BTreeMap<String, Value>),
    /// Ordered array, compared strictly by index.
    Array(Vec<Value>),
}

impl Value {
    /// Build a struct value from (name, value) pairs.
    pub fn struct_of<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Struct(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Short name of the value's shape, used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::Text(_) => "Text",
            Value::Name(_) => "Name",
            Value::Enum(_) => "Enum",
            Value::ObjectRef(_) => "ObjectRef",
            Value::ClassRef(_) => "ClassRef",
            Value::SoftRef(_) => "SoftRef",
            Value::Struct(_) => "Struct",
            Value::Array(_) => "Array",
        }
    }
}
