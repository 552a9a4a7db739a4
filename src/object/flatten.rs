use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::util::errors::{invalid_argument, ParseResult};

use super::id::Id;
use super::model::{AttributeValue, ParseObject};

pub type PlainAttributes = BTreeMap<String, PlainValue>;

/// Depth-resolved attribute of a [`PlainObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum PlainValue {
    Json(Value),
    Object(Box<PlainObject>),
    List(Vec<PlainValue>),
    Map(PlainAttributes),
}

impl PlainValue {
    pub fn to_json(&self) -> Value {
        match self {
            PlainValue::Json(value) => value.clone(),
            PlainValue::Object(object) => object.to_json(),
            PlainValue::List(values) => Value::Array(values.iter().map(PlainValue::to_json).collect()),
            PlainValue::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Plain, serializable snapshot of a remote object.
///
/// Unlike [`ParseObject`] it always carries an [`Id`], which is what query
/// builders look for when deciding to send a pointer instead of the value.
#[derive(Clone, Debug, PartialEq)]
pub struct PlainObject {
    pub id: Id,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub attributes: PlainAttributes,
}

impl PlainObject {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            created_at: None,
            updated_at: None,
            attributes: PlainAttributes::new(),
        }
    }

    pub fn class_name(&self) -> &str {
        self.id.class_name()
    }

    pub fn object_id(&self) -> &str {
        self.id.object_id()
    }

    pub fn get(&self, key: &str) -> Option<&PlainValue> {
        self.attributes.get(key)
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: PlainValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Display structure: attributes plus `className`, `objectId` and the
    /// timestamps when known.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.attributes {
            map.insert(key.clone(), value.to_json());
        }
        map.insert("className".into(), Value::from(self.class_name()));
        map.insert("objectId".into(), Value::from(self.object_id()));
        if let Some(created_at) = self.created_at {
            map.insert("createdAt".into(), Value::from(format_date(created_at)));
        }
        if let Some(updated_at) = self.updated_at {
            map.insert("updatedAt".into(), Value::from(format_date(updated_at)));
        }
        Value::Object(map)
    }
}

fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Explicit "is this a reference to a remote object" predicate.
pub trait AsReference {
    fn reference(&self) -> Option<&Id>;
}

impl AsReference for PlainObject {
    fn reference(&self) -> Option<&Id> {
        Some(&self.id)
    }
}

impl AsReference for Id {
    fn reference(&self) -> Option<&Id> {
        Some(self)
    }
}

/// Converts an object graph into its plain form.
pub trait Flatten: Send + Sync {
    fn flatten(&self, object: &ParseObject) -> ParseResult<PlainObject>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFlattener;

impl Flatten for DefaultFlattener {
    fn flatten(&self, object: &ParseObject) -> ParseResult<PlainObject> {
        flatten_object(object)
    }
}

fn flatten_object(object: &ParseObject) -> ParseResult<PlainObject> {
    let id = object.id().ok_or_else(|| {
        invalid_argument(format!(
            "Cannot flatten a {} that has not been saved",
            object.class_name()
        ))
    })?;
    let mut plain = PlainObject::new(id);
    plain.created_at = object.created_at();
    plain.updated_at = object.updated_at();
    for (key, value) in object.attributes() {
        plain.attributes.insert(key.clone(), flatten_value(value)?);
    }
    Ok(plain)
}

fn flatten_value(value: &AttributeValue) -> ParseResult<PlainValue> {
    Ok(match value {
        AttributeValue::Json(json) => PlainValue::Json(json.clone()),
        AttributeValue::Object(object) => PlainValue::Object(Box::new(flatten_object(object)?)),
        AttributeValue::List(values) => PlainValue::List(
            values
                .iter()
                .map(flatten_value)
                .collect::<ParseResult<Vec<_>>>()?,
        ),
        AttributeValue::Map(entries) => {
            let mut flattened = PlainAttributes::new();
            for (key, entry) in entries {
                flattened.insert(key.clone(), flatten_value(entry)?);
            }
            PlainValue::Map(flattened)
        }
    })
}
