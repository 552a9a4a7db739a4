//! # Users
//!
//! Authentication entry points of the base SDK behind [`UserBackend`], and the
//! [`RefreshingUserBackend`] decorator that keeps the cached current user
//! fresh after sign-up, log-in, provider linking and log-out.

mod backend;
mod model;
mod refresh;

#[doc(inline)]
pub use backend::UserBackend;

#[doc(inline)]
pub use model::{AuthOptions, LinkOptions, ParseUser, USER_CLASS_NAME};

#[doc(inline)]
pub use refresh::RefreshingUserBackend;
