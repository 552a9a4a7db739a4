use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::id::Id;

pub type Attributes = BTreeMap<String, AttributeValue>;

/// Attribute stored on a [`ParseObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    Json(Value),
    Object(Box<ParseObject>),
    List(Vec<AttributeValue>),
    Map(Attributes),
}

impl From<Value> for AttributeValue {
    fn from(value: Value) -> Self {
        AttributeValue::Json(value)
    }
}

impl From<ParseObject> for AttributeValue {
    fn from(object: ParseObject) -> Self {
        AttributeValue::Object(Box::new(object))
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(values: Vec<AttributeValue>) -> Self {
        AttributeValue::List(values)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Json(Value::from(value))
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Json(Value::from(value))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Json(Value::from(value))
    }
}

/// An object of the base SDK, possibly not yet saved to the server.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseObject {
    class_name: String,
    object_id: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    attributes: Attributes,
}

impl ParseObject {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            object_id: None,
            created_at: None,
            updated_at: None,
            attributes: Attributes::new(),
        }
    }

    /// Creates a handle for an object that already exists on the server.
    pub fn with_object_id(class_name: impl Into<String>, object_id: impl Into<String>) -> Self {
        let mut object = Self::new(class_name);
        object.object_id = Some(object_id.into());
        object
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn object_id(&self) -> Option<&str> {
        self.object_id.as_deref()
    }

    pub fn set_object_id(&mut self, object_id: impl Into<String>) {
        self.object_id = Some(object_id.into());
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
    }

    /// Returns the reference wrapper for saved objects.
    pub fn id(&self) -> Option<Id> {
        self.object_id
            .as_ref()
            .map(|object_id| Id::new(self.class_name.clone(), object_id.clone()))
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn unset(&mut self, key: &str) -> Option<AttributeValue> {
        self.attributes.remove(key)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
