use std::sync::Arc;

use crate::object::PlainObject;
use crate::util::errors::ParseError;

pub type NextFn = Arc<dyn Fn(&QueryResults) + Send + Sync + 'static>;
pub type ErrorFn = Arc<dyn Fn(&ParseError) + Send + Sync + 'static>;

/// Results delivered to an enrolled query, shaped by its observation mode.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryResults {
    One(Option<PlainObject>),
    Many(Vec<PlainObject>),
    Count(u64),
}

/// Callback set handed to a subscription manager together with a query.
#[derive(Clone, Default)]
pub struct QueryCallbacks {
    pub on_next: Option<NextFn>,
    pub on_error: Option<ErrorFn>,
}

impl QueryCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_next<F>(mut self, callback: F) -> Self
    where
        F: Fn(&QueryResults) + Send + Sync + 'static,
    {
        self.on_next = Some(Arc::new(callback));
        self
    }

    pub fn with_error<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ParseError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(callback));
        self
    }

    pub fn next(&self, results: &QueryResults) {
        if let Some(callback) = &self.on_next {
            callback(results);
        }
    }

    pub fn error(&self, error: &ParseError) {
        if let Some(callback) = &self.on_error {
            callback(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::errors::network_error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn callbacks_fire_when_present() {
        let hits = Arc::new(AtomicUsize::new(0));
        let next_hits = Arc::clone(&hits);
        let error_hits = Arc::clone(&hits);
        let callbacks = QueryCallbacks::new()
            .with_next(move |results| {
                assert_eq!(results, &QueryResults::Count(2));
                next_hits.fetch_add(1, Ordering::SeqCst);
            })
            .with_error(move |_| {
                error_hits.fetch_add(10, Ordering::SeqCst);
            });
        callbacks.next(&QueryResults::Count(2));
        callbacks.error(&network_error("offline"));
        assert_eq!(hits.load(Ordering::SeqCst), 11);
    }

    #[test]
    fn missing_callbacks_are_ignored() {
        let callbacks = QueryCallbacks::new();
        callbacks.next(&QueryResults::Many(Vec::new()));
        callbacks.error(&network_error("offline"));
    }
}
