use std::fmt;

use crate::query::Query;
use crate::util::errors::ParseResult;

use super::callbacks::QueryCallbacks;

pub type Unsubscribe = Box<dyn FnOnce() + Send + 'static>;

/// Keeps query results in sync with the local object cache.
///
/// Implementations read [`Query::observation_mode`] to decide whether to
/// deliver a single object, a list or a count.
pub trait SubscriptionManager: Send + Sync {
    fn subscribe_to_query(
        &self,
        query: &Query,
        callbacks: QueryCallbacks,
    ) -> ParseResult<SubscriptionHandle>;
}

/// Opaque token returned by a [`SubscriptionManager`].
pub struct SubscriptionHandle {
    id: u64,
    unsubscribe: Option<Unsubscribe>,
}

impl SubscriptionHandle {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            unsubscribe: None,
        }
    }

    pub fn with_unsubscribe<F>(id: u64, unsubscribe: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            id,
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("id", &self.id)
            .field("has_unsubscribe", &self.unsubscribe.is_some())
            .finish()
    }
}
