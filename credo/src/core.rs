use std::sync::Arc;

use credo_core::types::{Event, FundamentalsRow, Issuer, NewsArticle, NewsRequest, ScoreResult};
use credo_core::{Capability, CreditBackend, CredoConfig, CredoError};

/// Client that drives a credit backend and assembles dashboard views.
pub struct Credo {
    pub(crate) backend: Arc<dyn CreditBackend>,
    pub(crate) cfg: CredoConfig,
}

impl std::fmt::Debug for Credo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credo").field("cfg", &self.cfg).finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Credo`] client with custom configuration.
pub struct CredoBuilder {
    backend: Option<Arc<dyn CreditBackend>>,
    cfg: CredoConfig,
}

impl Default for CredoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CredoBuilder {
    /// Create a new builder with defaults: no backend registered, 5s
    /// per-call timeout, no overall deadline, 20 headlines per view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: None,
            cfg: CredoConfig::default(),
        }
    }

    /// Register the backend connector. Required.
    #[must_use]
    pub fn with_backend(mut self, backend: Arc<dyn CreditBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the timeout applied to each individual backend call.
    #[must_use]
    pub const fn fetch_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.fetch_timeout = timeout;
        self
    }

    /// Set an overall deadline for view assembly (dashboard/overview).
    ///
    /// Bounds total latency even when individual calls stay within their
    /// own timeouts. When exceeded, the operation returns `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Set the number of headlines requested when assembling views.
    #[must_use]
    pub const fn news_count(mut self, count: usize) -> Self {
        self.cfg.news_count = count;
        self
    }

    /// Build the [`Credo`] client.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no backend has been registered via
    /// [`with_backend`](Self::with_backend).
    pub fn build(self) -> Result<Credo, CredoError> {
        let backend = self.backend.ok_or_else(|| {
            CredoError::InvalidArg(
                "no backend registered; add one via with_backend(...)".to_string(),
            )
        })?;
        Ok(Credo {
            backend,
            cfg: self.cfg,
        })
    }
}

impl Credo {
    /// Start building a new `Credo` client.
    #[must_use]
    pub fn builder() -> CredoBuilder {
        CredoBuilder::new()
    }

    /// Wrap a backend future with the per-call timeout and standardized
    /// timeout error mapping.
    pub(crate) async fn call_with_timeout<T, Fut>(
        &self,
        capability: Capability,
        fut: Fut,
    ) -> Result<T, CredoError>
    where
        Fut: std::future::Future<Output = Result<T, CredoError>>,
    {
        (tokio::time::timeout(self.cfg.fetch_timeout, fut).await)
            .unwrap_or_else(|_| Err(CredoError::timeout(capability)))
    }

    /// Apply the optional overall deadline to a view-assembly future.
    pub(crate) async fn with_request_deadline<T, Fut>(
        &self,
        what: &'static str,
        fut: Fut,
    ) -> Result<T, CredoError>
    where
        Fut: std::future::Future<Output = T>,
    {
        match self.cfg.request_timeout {
            Some(deadline) => (tokio::time::timeout(deadline, fut).await)
                .map_err(|_| CredoError::request_timeout(what)),
            None => Ok(fut.await),
        }
    }

    /// List all known issuers.
    ///
    /// # Errors
    /// Propagates backend failures and per-call timeouts.
    pub async fn issuers(&self) -> Result<Vec<Issuer>, CredoError> {
        self.call_with_timeout(Capability::Issuers, self.backend.issuers())
            .await
    }

    /// Resolve a single issuer by id.
    ///
    /// The backend contract exposes no per-issuer endpoint, so this lists
    /// and filters.
    ///
    /// # Errors
    /// Returns `NotFound` when the id is absent from the directory, and
    /// propagates listing failures.
    pub async fn issuer(&self, issuer_id: i64) -> Result<Issuer, CredoError> {
        self.issuers()
            .await?
            .into_iter()
            .find(|i| i.id == issuer_id)
            .ok_or_else(|| CredoError::not_found(format!("issuer {issuer_id}")))
    }

    /// Fetch fundamentals rows for an issuer.
    ///
    /// # Errors
    /// Propagates backend failures and per-call timeouts.
    pub async fn fundamentals(&self, issuer_id: i64) -> Result<Vec<FundamentalsRow>, CredoError> {
        self.call_with_timeout(Capability::Fundamentals, self.backend.fundamentals(issuer_id))
            .await
    }

    /// Fetch the computed credit score and SHAP explanation for an issuer.
    ///
    /// # Errors
    /// Propagates backend failures and per-call timeouts.
    pub async fn score(&self, issuer_id: i64) -> Result<ScoreResult, CredoError> {
        self.call_with_timeout(Capability::Score, self.backend.score(issuer_id))
            .await
    }

    /// Fetch classified events for an issuer.
    ///
    /// # Errors
    /// Propagates backend failures and per-call timeouts.
    pub async fn events(&self, issuer_id: i64) -> Result<Vec<Event>, CredoError> {
        self.call_with_timeout(Capability::Events, self.backend.events(issuer_id))
            .await
    }

    /// Fetch market-wide news headlines.
    ///
    /// # Errors
    /// Propagates backend failures and per-call timeouts.
    pub async fn news(&self, req: NewsRequest) -> Result<Vec<NewsArticle>, CredoError> {
        self.call_with_timeout(Capability::News, self.backend.news(req))
            .await
    }
}
