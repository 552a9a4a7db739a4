use crate::object::Attributes;
use crate::util::errors::ParseResult;

use super::model::{AuthOptions, LinkOptions, ParseUser};

/// Authentication entry points of the base SDK.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait UserBackend: Send + Sync {
    async fn sign_up(
        &self,
        user: &ParseUser,
        attributes: Attributes,
        options: AuthOptions,
    ) -> ParseResult<ParseUser>;

    async fn log_in(&self, user: &ParseUser, options: AuthOptions) -> ParseResult<ParseUser>;

    async fn link_with(
        &self,
        user: &ParseUser,
        provider: &str,
        options: LinkOptions,
    ) -> ParseResult<ParseUser>;

    async fn log_out(&self) -> ParseResult<()>;
}
