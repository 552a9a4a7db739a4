use std::sync::Arc;

use crate::subscription::{QueryCallbacks, SubscriptionHandle, SubscriptionManager};
use crate::util::errors::ParseResult;

use super::query::Query;

pub type EnrollFn = Arc<dyn Fn(&Query, QueryCallbacks) -> ParseResult<SubscriptionHandle> + Send + Sync>;
pub type ObserveOneFn = Arc<dyn Fn(Query, &str) -> Query + Send + Sync>;
pub type ObserveCountFn = Arc<dyn Fn(Query) -> Query + Send + Sync>;

pub(crate) fn enroll_with(manager: Arc<dyn SubscriptionManager>) -> EnrollFn {
    Arc::new(move |query: &Query, callbacks: QueryCallbacks| {
        manager.subscribe_to_query(query, callbacks)
    })
}

pub(crate) fn observe_one() -> ObserveOneFn {
    Arc::new(|mut query: Query, object_id: &str| {
        query.mark_observe_one();
        query.equal_to("objectId", object_id).limit(1)
    })
}

pub(crate) fn observe_count() -> ObserveCountFn {
    Arc::new(|mut query: Query| {
        query.mark_observe_count();
        query
    })
}
