use std::time::Duration;

use url::Url;

use credo_core::CredoError;

use crate::ApiBackend;

/// Default scoring backend address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable consulted when no explicit base URL is set.
pub const CREDO_API_URL_VAR: &str = "CREDO_API_URL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("credo/", env!("CARGO_PKG_VERSION"));

/// Builder for [`ApiBackend`].
///
/// Resolution order for the base URL: explicit [`base_url`], then the
/// `CREDO_API_URL` environment variable, then [`DEFAULT_BASE_URL`].
///
/// [`base_url`]: ApiBackendBuilder::base_url
#[derive(Debug, Default)]
pub struct ApiBackendBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    client: Option<reqwest::Client>,
}

impl ApiBackendBuilder {
    /// Create a builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL explicitly.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-request transport timeout (default 30s).
    ///
    /// Ignored when a custom client is supplied via [`Self::client`].
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent header (default `credo/<version>`).
    ///
    /// Ignored when a custom client is supplied via [`Self::client`].
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Supply a preconfigured `reqwest::Client` instead of building one.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the backend.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the resolved base URL does not parse or
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiBackend, CredoError> {
        let raw = self
            .base_url
            .or_else(|| std::env::var(CREDO_API_URL_VAR).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // A trailing slash keeps Url::join from clobbering the last path
        // segment of prefixed base URLs.
        let normalized = if raw.ends_with('/') {
            raw
        } else {
            format!("{raw}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| CredoError::InvalidArg(format!("bad base url {normalized}: {e}")))?;

        let http = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .user_agent(
                    self.user_agent
                        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
                )
                .build()
                .map_err(|e| CredoError::InvalidArg(format!("http client: {e}")))?,
        };

        Ok(ApiBackend::from_parts(http, base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_parses() {
        let backend = ApiBackendBuilder::new()
            .base_url(DEFAULT_BASE_URL)
            .build()
            .unwrap();
        assert_eq!(backend.base_url().as_str(), "http://127.0.0.1:8000/");
    }

    #[test]
    fn prefixed_base_url_keeps_path() {
        let backend = ApiBackendBuilder::new()
            .base_url("http://example.com/api/v1")
            .build()
            .unwrap();
        assert_eq!(backend.base_url().path(), "/api/v1/");
    }

    #[test]
    fn env_var_overrides_default_but_not_explicit() {
        // Only this test touches the variable; every other builder test
        // sets an explicit base URL, which takes precedence over it.
        unsafe { std::env::set_var(CREDO_API_URL_VAR, "http://10.0.0.5:9000") };
        let from_env = ApiBackendBuilder::new().build();
        let explicit = ApiBackendBuilder::new()
            .base_url("http://127.0.0.1:8000")
            .build();
        unsafe { std::env::remove_var(CREDO_API_URL_VAR) };

        assert_eq!(
            from_env.unwrap().base_url().as_str(),
            "http://10.0.0.5:9000/"
        );
        assert_eq!(
            explicit.unwrap().base_url().as_str(),
            "http://127.0.0.1:8000/"
        );
    }

    #[test]
    fn garbage_base_url_is_rejected() {
        let err = ApiBackendBuilder::new()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, CredoError::InvalidArg(_)));
    }
}
