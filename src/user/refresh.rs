use std::sync::Arc;

use crate::object::Attributes;
use crate::subscription::LocalSubscriptions;
use crate::util::errors::ParseResult;

use super::backend::UserBackend;
use super::model::{AuthOptions, LinkOptions, ParseUser};

/// Refreshes the current-user subscription after every successful
/// authentication call of the wrapped backend.
pub struct RefreshingUserBackend {
    inner: Arc<dyn UserBackend>,
    local: LocalSubscriptions,
}

impl RefreshingUserBackend {
    pub fn new(inner: Arc<dyn UserBackend>, local: LocalSubscriptions) -> Self {
        Self { inner, local }
    }

    pub fn inner(&self) -> &Arc<dyn UserBackend> {
        &self.inner
    }

    fn after_success<T>(&self, operation: &str, result: ParseResult<T>) -> ParseResult<T> {
        result.inspect(|_| {
            log::debug!("{operation} succeeded, refreshing current user");
            self.local.current_user.update();
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl UserBackend for RefreshingUserBackend {
    async fn sign_up(
        &self,
        user: &ParseUser,
        attributes: Attributes,
        options: AuthOptions,
    ) -> ParseResult<ParseUser> {
        let result = self.inner.sign_up(user, attributes, options).await;
        self.after_success("signUp", result)
    }

    async fn log_in(&self, user: &ParseUser, options: AuthOptions) -> ParseResult<ParseUser> {
        let result = self.inner.log_in(user, options).await;
        self.after_success("logIn", result)
    }

    async fn link_with(
        &self,
        user: &ParseUser,
        provider: &str,
        options: LinkOptions,
    ) -> ParseResult<ParseUser> {
        let result = self.inner.link_with(user, provider, options).await;
        self.after_success("linkWith", result)
    }

    async fn log_out(&self) -> ParseResult<()> {
        let result = self.inner.log_out().await;
        self.after_success("logOut", result)
    }
}
