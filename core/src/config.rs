//! Client configuration.
//!
//! The base URL is resolved once and handed to `ItemClient::new`; nothing in
//! the client reads the environment on its own.

use std::env;

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Environment variable consulted by `ClientConfig::from_env`.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Base URL used when `API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Validated client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate `base_url` as an HTTP(S) URL with a host.
    ///
    /// A trailing `/` is stripped so paths can be appended directly.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ApiError::config("base URL cannot be empty"));
        }

        let parsed =
            Url::parse(trimmed).map_err(|e| ApiError::config(format!("{trimmed}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::config(format!(
                "{trimmed}: scheme must be http or https"
            )));
        }
        if parsed.host_str().is_none() {
            return Err(ApiError::config(format!("{trimmed}: missing host")));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ApiError::config(format!(
                "{trimmed}: query and fragment are not allowed"
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Read `API_BASE_URL`, falling back to `DEFAULT_BASE_URL`.
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ApiResult<Self> {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
