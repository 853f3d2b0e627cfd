//! Shared test backends for orchestrator tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use credo::{Capability, Credo, CreditBackend, CredoError};
use credo_core::types::{Event, FundamentalsRow, Issuer, NewsArticle, NewsRequest, ScoreResult};
use credo_mock::MockBackend;

/// Wraps the fixture backend, forcing failures for selected capabilities
/// and injecting a uniform latency before every call.
pub struct ShapedBackend {
    inner: MockBackend,
    fail: HashSet<Capability>,
    latency: Option<Duration>,
}

impl ShapedBackend {
    pub fn new() -> Self {
        Self {
            inner: MockBackend::new(),
            fail: HashSet::new(),
            latency: None,
        }
    }

    pub fn failing(mut self, capability: Capability) -> Self {
        self.fail.insert(capability);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    async fn gate(&self, capability: Capability) -> Result<(), CredoError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.fail.contains(&capability) {
            return Err(CredoError::backend(
                self.name(),
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CreditBackend for ShapedBackend {
    fn name(&self) -> &'static str {
        "shaped-test"
    }

    async fn issuers(&self) -> Result<Vec<Issuer>, CredoError> {
        self.gate(Capability::Issuers).await?;
        self.inner.issuers().await
    }

    async fn fundamentals(&self, issuer_id: i64) -> Result<Vec<FundamentalsRow>, CredoError> {
        self.gate(Capability::Fundamentals).await?;
        self.inner.fundamentals(issuer_id).await
    }

    async fn score(&self, issuer_id: i64) -> Result<ScoreResult, CredoError> {
        self.gate(Capability::Score).await?;
        self.inner.score(issuer_id).await
    }

    async fn events(&self, issuer_id: i64) -> Result<Vec<Event>, CredoError> {
        self.gate(Capability::Events).await?;
        self.inner.events(issuer_id).await
    }

    async fn news(&self, req: NewsRequest) -> Result<Vec<NewsArticle>, CredoError> {
        self.gate(Capability::News).await?;
        self.inner.news(req).await
    }
}

pub fn client_with(backend: ShapedBackend) -> Credo {
    Credo::builder()
        .with_backend(Arc::new(backend))
        .build()
        .unwrap()
}
