//! # Subscriptions
//!
//! Interfaces to the subscription manager that keeps enrolled queries in sync
//! with the local cache, and to the local current-user subscription.

mod callbacks;
mod local;
mod manager;

#[doc(inline)]
pub use callbacks::{ErrorFn, NextFn, QueryCallbacks, QueryResults};

#[doc(inline)]
pub use local::{CurrentUserRefresh, LocalSubscriptions};

#[doc(inline)]
pub use manager::{SubscriptionHandle, SubscriptionManager, Unsubscribe};
