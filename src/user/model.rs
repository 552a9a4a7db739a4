use serde_json::Value;

use crate::object::{Id, ParseObject};

pub const USER_CLASS_NAME: &str = "_User";

/// A user account as seen by the base SDK.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseUser {
    object: ParseObject,
    username: Option<String>,
    session_token: Option<String>,
}

impl ParseUser {
    pub fn new() -> Self {
        Self {
            object: ParseObject::new(USER_CLASS_NAME),
            username: None,
            session_token: None,
        }
    }

    pub fn with_credentials(username: impl Into<String>) -> Self {
        let mut user = Self::new();
        user.username = Some(username.into());
        user
    }

    pub fn object(&self) -> &ParseObject {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut ParseObject {
        &mut self.object
    }

    pub fn id(&self) -> Option<Id> {
        self.object.id()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn set_session_token(&mut self, token: impl Into<String>) {
        self.session_token = Some(token.into());
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_token.is_some() && self.object.object_id().is_some()
    }
}

impl Default for ParseUser {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-request options accepted by the authentication entry points.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthOptions {
    pub use_master_key: bool,
    pub session_token: Option<String>,
    pub installation_id: Option<String>,
}

/// Provider data passed to a link-with-provider call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkOptions {
    pub auth_data: Option<Value>,
    pub auth: AuthOptions,
}
