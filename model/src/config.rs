//! Connection settings for the admin backend.
//!
//! Both front ends receive an [`ApiConfig`] value at construction time (the
//! web UI from build-time variables, the CLI from flags/env), so request code
//! never reads process state itself.

use crate::target::join_url;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Variable naming the backend base URL.
pub const SERVER_URL_VAR: &str = "BOARD_ADMIN_SERVER_URL";
/// Variable naming the static bearer credential.
pub const ACCESS_TOKEN_VAR: &str = "BOARD_ADMIN_ACCESS_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing configuration: {var}")]
    Missing { var: &'static str },
}

/// Base URL plus bearer credential.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub access_token: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), access_token: access_token.into() }
    }

    /// Build from a variable lookup (`std::env::var`, `option_env!`, a map in tests).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when either variable is absent or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing { var })
        };
        Ok(Self::new(required(SERVER_URL_VAR)?, required(ACCESS_TOKEN_VAR)?))
    }

    /// Absolute URL for an endpoint path.
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }

    /// `Authorization` header value.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Default request headers merged with per-call overrides.
    ///
    /// An override replaces a default with the same name (case-insensitive);
    /// other overrides are appended in order.
    #[must_use]
    pub fn request_headers(&self, overrides: &[(String, String)]) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("Authorization".to_owned(), self.authorization()),
        ];
        for (name, value) in overrides {
            match headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(name)) {
                Some(slot) => slot.1.clone_from(value),
                None => headers.push((name.clone(), value.clone())),
            }
        }
        headers
    }
}
