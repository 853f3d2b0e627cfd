use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use credo_core::backend::CreditBackend;
use credo_core::types::{Event, FundamentalsRow, Issuer, NewsArticle, NewsRequest, ScoreResult};
use credo_core::{Capability, CredoError};

const BACKEND_NAME: &str = "credo-api";

/// REST connector backed by a shared `reqwest::Client`.
///
/// `reqwest::Client` is internally reference-counted, so the backend is
/// cheap to clone and needs no external locking.
#[derive(Debug, Clone)]
pub struct ApiBackend {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiBackend {
    /// Start building a backend. See [`crate::ApiBackendBuilder`].
    #[must_use]
    pub fn builder() -> crate::ApiBackendBuilder {
        crate::ApiBackendBuilder::new()
    }

    pub(crate) const fn from_parts(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, CredoError> {
        self.base_url
            .join(path)
            .map_err(|e| CredoError::InvalidArg(format!("bad endpoint path {path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        capability: Capability,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CredoError> {
        let url = self.endpoint(path)?;
        debug!(capability = %capability, %url, "issuing backend request");

        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| map_transport_err(&e, capability))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(map_status_err(status, capability));
        }

        resp.json::<T>()
            .await
            .map_err(|e| CredoError::Data(format!("{capability}: {e}")))
    }
}

fn map_transport_err(e: &reqwest::Error, capability: Capability) -> CredoError {
    if e.is_timeout() {
        CredoError::timeout(capability)
    } else {
        CredoError::backend(BACKEND_NAME, format!("{capability}: {e}"))
    }
}

fn map_status_err(status: StatusCode, capability: Capability) -> CredoError {
    match status {
        StatusCode::NOT_FOUND => CredoError::not_found(capability.to_string()),
        StatusCode::TOO_MANY_REQUESTS => {
            CredoError::backend(BACKEND_NAME, format!("rate limit: {capability}"))
        }
        s if s.is_server_error() => {
            CredoError::backend(BACKEND_NAME, format!("server error {s}: {capability}"))
        }
        s => CredoError::backend(BACKEND_NAME, format!("status {s}: {capability}")),
    }
}

#[async_trait]
impl CreditBackend for ApiBackend {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn issuers(&self) -> Result<Vec<Issuer>, CredoError> {
        self.get_json(Capability::Issuers, "issuers", &[]).await
    }

    async fn fundamentals(&self, issuer_id: i64) -> Result<Vec<FundamentalsRow>, CredoError> {
        self.get_json(
            Capability::Fundamentals,
            "fundamentals",
            &[("issuer_id", issuer_id.to_string())],
        )
        .await
    }

    async fn score(&self, issuer_id: i64) -> Result<ScoreResult, CredoError> {
        self.get_json(Capability::Score, &format!("score/{issuer_id}"), &[])
            .await
            .map_err(|e| match e {
                // Give the caller a more useful description than the bare
                // capability label.
                CredoError::NotFound { .. } => {
                    CredoError::not_found(format!("score for issuer {issuer_id}"))
                }
                other => other,
            })
    }

    async fn events(&self, issuer_id: i64) -> Result<Vec<Event>, CredoError> {
        self.get_json(
            Capability::Events,
            "events",
            &[("issuer_id", issuer_id.to_string())],
        )
        .await
    }

    async fn news(&self, req: NewsRequest) -> Result<Vec<NewsArticle>, CredoError> {
        // The contract exposes no paging parameter; truncate client-side.
        let mut articles: Vec<NewsArticle> =
            self.get_json(Capability::News, "news", &[]).await?;
        articles.truncate(req.count);
        Ok(articles)
    }
}
