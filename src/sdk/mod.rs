//! # SDK patch layer
//!
//! [`ParseSdk`] wraps the client SDK's object, query and user types behind an
//! explicit method table. [`ParseSdk::apply_patches`] installs the extension
//! methods (`toPlainObject`, `enroll`, `observeOne`, `observeCount`), makes the
//! comparison builders send pointers for remote objects and refreshes the
//! cached current user after authentication calls.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use parse_react_sdk::query::QueryValue;
//! use parse_react_sdk::sdk::{ParseOptions, ParseSdk};
//! use parse_react_sdk::subscription::{CurrentUserRefresh, LocalSubscriptions, QueryCallbacks, SubscriptionManager};
//! use parse_react_sdk::user::UserBackend;
//!
//! fn wire(
//!     users: Arc<dyn UserBackend>,
//!     manager: Arc<dyn SubscriptionManager>,
//!     current_user: Arc<dyn CurrentUserRefresh>,
//! ) -> Result<(), Box<dyn std::error::Error>> {
//!     let sdk = ParseSdk::builder(ParseOptions {
//!         application_id: "my-app".into(),
//!         server_url: Some("https://api.example.com/parse".into()),
//!         ..Default::default()
//!     })
//!     .with_user_backend(users)
//!     .with_subscription_manager(manager)
//!     .with_local_subscriptions(LocalSubscriptions::new(current_user))
//!     .build()?;
//!     sdk.apply_patches();
//!
//!     let comments = sdk
//!         .query("Comment")
//!         .equal_to("approved", QueryValue::from(true))
//!         .observe_count()?;
//!     let _handle = comments.enroll(QueryCallbacks::new().with_next(|results| println!("{results:?}")))?;
//!     Ok(())
//! }
//! ```

mod api;
mod config;
mod registry;

#[doc(inline)]
pub use api::{ParseSdk, ParseSdkBuilder};

#[doc(inline)]
pub use config::{ParseOptions, ParseSdkSettings, DEFAULT_SDK_NAME};

#[doc(inline)]
pub use registry::{PatchPoint, ToPlainObjectFn};

#[doc(inline)]
pub use crate::util::errors::{ParseError, ParseErrorCode, ParseResult};
