use std::fmt;
use std::sync::Arc;

/// Local subscription holding the cached authenticated user.
pub trait CurrentUserRefresh: Send + Sync {
    /// Re-reads the current user into the cache. Safe with no subscribers.
    fn update(&self);
}

/// Local subscriptions the SDK layer refreshes on its own.
#[derive(Clone)]
pub struct LocalSubscriptions {
    pub current_user: Arc<dyn CurrentUserRefresh>,
}

impl LocalSubscriptions {
    pub fn new(current_user: Arc<dyn CurrentUserRefresh>) -> Self {
        Self { current_user }
    }
}

impl fmt::Debug for LocalSubscriptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSubscriptions").finish_non_exhaustive()
    }
}
