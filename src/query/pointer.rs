use std::sync::Arc;

use crate::object::{AsReference, Id};

use super::query::{ComparisonFn, Query};
use super::value::QueryValue;

/// Replaces values that reference a remote object with their pointer form.
///
/// Lists are rewritten one level deep, element by element.
pub fn rewrite_pointer_value(value: QueryValue) -> QueryValue {
    match value {
        QueryValue::List(values) => {
            QueryValue::List(values.into_iter().map(rewrite_single).collect())
        }
        other => rewrite_single(other),
    }
}

fn rewrite_single(value: QueryValue) -> QueryValue {
    match value.reference().map(Id::to_pointer) {
        Some(pointer) => QueryValue::Pointer(pointer),
        None => value,
    }
}

/// Wraps a comparison builder so that it always receives rewritten values.
pub(crate) fn rewrite_pointers(original: ComparisonFn) -> ComparisonFn {
    Arc::new(move |query: Query, attribute: &str, value: QueryValue| {
        original(query, attribute, rewrite_pointer_value(value))
    })
}
