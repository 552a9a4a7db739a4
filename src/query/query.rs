use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::sdk::ParseSdk;
use crate::subscription::{QueryCallbacks, SubscriptionHandle};
use crate::util::errors::{unsupported, ParseResult};

use super::value::QueryValue;

/// Signature shared by the four comparison builders: receives the query,
/// the attribute name and the value, and hands the query back for chaining.
pub type ComparisonFn = Arc<dyn Fn(Query, &str, QueryValue) -> Query + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComparisonOp {
    EqualTo,
    NotEqualTo,
    ContainedIn,
    NotContainedIn,
}

impl ComparisonOp {
    pub const ALL: [ComparisonOp; 4] = [
        ComparisonOp::EqualTo,
        ComparisonOp::NotEqualTo,
        ComparisonOp::ContainedIn,
        ComparisonOp::NotContainedIn,
    ];

    /// Builder name on the base SDK.
    pub fn method_name(&self) -> &'static str {
        match self {
            ComparisonOp::EqualTo => "equalTo",
            ComparisonOp::NotEqualTo => "notEqualTo",
            ComparisonOp::ContainedIn => "containedIn",
            ComparisonOp::NotContainedIn => "notContainedIn",
        }
    }

    fn operator(&self) -> Option<&'static str> {
        match self {
            ComparisonOp::EqualTo => None,
            ComparisonOp::NotEqualTo => Some("$ne"),
            ComparisonOp::ContainedIn => Some("$in"),
            ComparisonOp::NotContainedIn => Some("$nin"),
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// How a subscription manager should deliver results for a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObservationMode {
    Collection,
    Single,
    Count,
}

/// A query against one class.
///
/// Comparison builders dispatch through the owning [`ParseSdk`], so any
/// wrapper installed there sees every call made through this type.
#[derive(Clone)]
pub struct Query {
    sdk: ParseSdk,
    class_name: String,
    where_clause: Map<String, Value>,
    limit: Option<u32>,
    observe_one: bool,
    observe_count: bool,
}

impl Query {
    pub(crate) fn new(sdk: ParseSdk, class_name: impl Into<String>) -> Self {
        Self {
            sdk,
            class_name: class_name.into(),
            where_clause: Map::new(),
            limit: None,
            observe_one: false,
            observe_count: false,
        }
    }

    pub fn sdk(&self) -> &ParseSdk {
        &self.sdk
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn where_clause(&self) -> &Map<String, Value> {
        &self.where_clause
    }

    pub fn limit_value(&self) -> Option<u32> {
        self.limit
    }

    pub fn is_observe_one(&self) -> bool {
        self.observe_one
    }

    pub fn is_observe_count(&self) -> bool {
        self.observe_count
    }

    pub fn observation_mode(&self) -> ObservationMode {
        if self.observe_count {
            ObservationMode::Count
        } else if self.observe_one {
            ObservationMode::Single
        } else {
            ObservationMode::Collection
        }
    }

    pub fn equal_to(self, attribute: &str, value: impl Into<QueryValue>) -> Self {
        self.compare(ComparisonOp::EqualTo, attribute, value.into())
    }

    pub fn not_equal_to(self, attribute: &str, value: impl Into<QueryValue>) -> Self {
        self.compare(ComparisonOp::NotEqualTo, attribute, value.into())
    }

    pub fn contained_in(self, attribute: &str, values: impl Into<QueryValue>) -> Self {
        self.compare(ComparisonOp::ContainedIn, attribute, values.into())
    }

    pub fn not_contained_in(self, attribute: &str, values: impl Into<QueryValue>) -> Self {
        self.compare(ComparisonOp::NotContainedIn, attribute, values.into())
    }

    fn compare(self, op: ComparisonOp, attribute: &str, value: QueryValue) -> Self {
        let method = self.sdk.comparison(op);
        method(self, attribute, value)
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Hands this query to the subscription manager.
    pub fn enroll(&self, callbacks: QueryCallbacks) -> ParseResult<SubscriptionHandle> {
        let method = self
            .sdk
            .methods()
            .enroll
            .clone()
            .ok_or_else(|| unsupported("Query.enroll is not installed"))?;
        method(self, callbacks)
    }

    /// Observes the single object with the given id.
    pub fn observe_one(self, object_id: &str) -> ParseResult<Self> {
        let method = self
            .sdk
            .methods()
            .observe_one
            .clone()
            .ok_or_else(|| unsupported("Query.observeOne is not installed"))?;
        Ok(method(self, object_id))
    }

    /// Observes the number of matching objects.
    pub fn observe_count(self) -> ParseResult<Self> {
        let method = self
            .sdk
            .methods()
            .observe_count
            .clone()
            .ok_or_else(|| unsupported("Query.observeCount is not installed"))?;
        Ok(method(self))
    }

    pub(crate) fn mark_observe_one(&mut self) {
        self.observe_one = true;
    }

    pub(crate) fn mark_observe_count(&mut self) {
        self.observe_count = true;
    }

    /// Base SDK behavior of the comparison builders.
    pub(crate) fn apply_comparison(mut self, op: ComparisonOp, attribute: &str, value: QueryValue) -> Self {
        let encoded = value.to_json();
        match op.operator() {
            None => {
                self.where_clause.insert(attribute.to_string(), encoded);
            }
            Some(operator) => {
                let entry = self
                    .where_clause
                    .entry(attribute.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !is_condition_map(entry) {
                    *entry = Value::Object(Map::new());
                }
                if let Value::Object(conditions) = entry {
                    conditions.insert(operator.to_string(), encoded);
                }
            }
        }
        self
    }

    /// REST representation of the query.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("where".into(), Value::Object(self.where_clause.clone()));
        if let Some(limit) = self.limit {
            map.insert("limit".into(), Value::from(limit));
        }
        Value::Object(map)
    }
}

fn is_condition_map(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty() && map.keys().all(|key| key.starts_with('$')),
        _ => false,
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("sdk", &self.sdk.name())
            .field("class_name", &self.class_name)
            .field("where", &self.where_clause)
            .field("limit", &self.limit)
            .field("observe_one", &self.observe_one)
            .field("observe_count", &self.observe_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Pointer;
    use crate::test_support::unpatched_sdk;
    use serde_json::json;

    #[test]
    fn equal_to_sets_plain_value() {
        let query = unpatched_sdk().query("Post").equal_to("title", "hello").limit(3);
        assert_eq!(query.to_json(), json!({"where": {"title": "hello"}, "limit": 3}));
    }

    #[test]
    fn operators_merge_on_same_attribute() {
        let query = unpatched_sdk()
            .query("Post")
            .not_equal_to("views", 0)
            .contained_in("views", vec![QueryValue::from(1), QueryValue::from(2)])
            .not_contained_in("views", vec![QueryValue::from(3)]);
        assert_eq!(
            query.where_clause()["views"],
            json!({"$ne": 0, "$in": [1, 2], "$nin": [3]})
        );
    }

    #[test]
    fn operator_replaces_previous_equality() {
        let query = unpatched_sdk()
            .query("Post")
            .equal_to("title", "a")
            .not_equal_to("title", "b");
        assert_eq!(query.where_clause()["title"], json!({"$ne": "b"}));
    }

    #[test]
    fn operator_replaces_previous_equality_on_object_value() {
        let query = unpatched_sdk()
            .query("Post")
            .equal_to("meta", json!({"draft": true}))
            .not_equal_to("meta", json!(null));
        assert_eq!(query.where_clause()["meta"], json!({"$ne": null}));
    }

    #[test]
    fn pointer_values_encode_as_wire_pointers() {
        let query = unpatched_sdk()
            .query("Post")
            .equal_to("owner", Pointer::new("User", "abc"));
        assert_eq!(
            query.where_clause()["owner"],
            json!({"__type": "Pointer", "className": "User", "objectId": "abc"})
        );
    }

    #[test]
    fn observation_mode_defaults_to_collection() {
        let mut query = unpatched_sdk().query("Post");
        assert_eq!(query.observation_mode(), ObservationMode::Collection);
        query.mark_observe_one();
        assert_eq!(query.observation_mode(), ObservationMode::Single);
        query.mark_observe_count();
        assert_eq!(query.observation_mode(), ObservationMode::Count);
    }

    #[test]
    fn observation_methods_require_installation() {
        let sdk = unpatched_sdk();
        let error = sdk.query("Post").observe_count().unwrap_err();
        assert_eq!(error.code_str(), "parse/unsupported");
        assert!(sdk.query("Post").observe_one("xyz").is_err());
        assert!(sdk
            .query("Post")
            .enroll(QueryCallbacks::new())
            .is_err());
    }

    #[test]
    fn comparison_op_names_match_sdk_builders() {
        let names: Vec<_> = ComparisonOp::ALL.iter().map(ComparisonOp::method_name).collect();
        assert_eq!(names, ["equalTo", "notEqualTo", "containedIn", "notContainedIn"]);
    }
}
