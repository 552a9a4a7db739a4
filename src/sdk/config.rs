use url::Url;

use crate::util::errors::{invalid_argument, ParseResult};

pub const DEFAULT_SDK_NAME: &str = "[DEFAULT]";

/// Connection settings of the underlying client SDK.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub application_id: String,
    pub server_url: Option<String>,
    pub javascript_key: Option<String>,
}

impl ParseOptions {
    pub(crate) fn validate(&self) -> ParseResult<()> {
        if self.application_id.trim().is_empty() {
            return Err(invalid_argument("application_id must not be empty"));
        }
        if let Some(server_url) = &self.server_url {
            Url::parse(server_url).map_err(|err| {
                invalid_argument(format!("server_url `{server_url}` is not a valid URL: {err}"))
            })?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSdkSettings {
    pub name: String,
}

impl Default for ParseSdkSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_SDK_NAME.to_string(),
        }
    }
}
