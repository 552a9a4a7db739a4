use serde_json::Value;

use crate::object::{AsReference, Id, PlainObject, Pointer};

/// Value handed to a comparison builder.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    Json(Value),
    Object(PlainObject),
    Pointer(Pointer),
    List(Vec<QueryValue>),
}

impl QueryValue {
    /// Encoding used by the base builders. An object that reaches this point
    /// unrewritten is embedded in full.
    pub fn to_json(&self) -> Value {
        match self {
            QueryValue::Json(value) => value.clone(),
            QueryValue::Object(object) => object.to_json(),
            QueryValue::Pointer(pointer) => pointer.to_json(),
            QueryValue::List(values) => Value::Array(values.iter().map(QueryValue::to_json).collect()),
        }
    }
}

impl AsReference for QueryValue {
    fn reference(&self) -> Option<&Id> {
        match self {
            QueryValue::Object(object) => object.reference(),
            _ => None,
        }
    }
}

impl From<Value> for QueryValue {
    fn from(value: Value) -> Self {
        QueryValue::Json(value)
    }
}

impl From<PlainObject> for QueryValue {
    fn from(object: PlainObject) -> Self {
        QueryValue::Object(object)
    }
}

impl From<Pointer> for QueryValue {
    fn from(pointer: Pointer) -> Self {
        QueryValue::Pointer(pointer)
    }
}

impl From<&Id> for QueryValue {
    fn from(id: &Id) -> Self {
        QueryValue::Pointer(id.to_pointer())
    }
}

impl From<Vec<QueryValue>> for QueryValue {
    fn from(values: Vec<QueryValue>) -> Self {
        QueryValue::List(values)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Json(Value::from(value))
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Json(Value::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Json(Value::from(value))
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Json(Value::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Json(Value::from(value))
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Json(Value::from(value))
    }
}
