//! credo-mock
//!
//! Mock backend for CI-safe examples and orchestrator tests. Serves
//! deterministic data from static fixtures mirroring the scoring
//! backend's seed dataset, plus sentinel issuer ids that force failure
//! and latency paths.
#![warn(missing_docs)]

use async_trait::async_trait;

use credo_core::backend::CreditBackend;
use credo_core::types::{Event, FundamentalsRow, Issuer, NewsArticle, NewsRequest, ScoreResult};
use credo_core::CredoError;

mod fixtures;

/// Issuer id that forces a backend failure on every capability.
pub const FAIL_ISSUER_ID: i64 = 999;
/// Issuer id that responds after a short delay; orchestrators with a tight
/// timeout will observe a timeout instead of data.
pub const SLOW_ISSUER_ID: i64 = 998;

/// Mock backend providing deterministic data from static fixtures.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockBackend;

impl MockBackend {
    /// Create a mock backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_stall(issuer_id: i64, capability: &'static str) -> Result<(), CredoError> {
        match issuer_id {
            FAIL_ISSUER_ID => Err(CredoError::backend(
                "credo-mock",
                format!("forced failure: {capability}"),
            )),
            SLOW_ISSUER_ID => {
                // Keep short to avoid slowing tests excessively.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CreditBackend for MockBackend {
    fn name(&self) -> &'static str {
        "credo-mock"
    }

    async fn issuers(&self) -> Result<Vec<Issuer>, CredoError> {
        Ok(fixtures::issuers::all())
    }

    async fn fundamentals(&self, issuer_id: i64) -> Result<Vec<FundamentalsRow>, CredoError> {
        Self::maybe_fail_or_stall(issuer_id, "fundamentals").await?;
        Ok(fixtures::fundamentals::by_issuer(issuer_id))
    }

    async fn score(&self, issuer_id: i64) -> Result<ScoreResult, CredoError> {
        Self::maybe_fail_or_stall(issuer_id, "score").await?;
        fixtures::score::by_issuer(issuer_id)
            .ok_or_else(|| CredoError::not_found(format!("score for issuer {issuer_id}")))
    }

    async fn events(&self, issuer_id: i64) -> Result<Vec<Event>, CredoError> {
        Self::maybe_fail_or_stall(issuer_id, "events").await?;
        Ok(fixtures::events::by_issuer(issuer_id))
    }

    async fn news(&self, req: NewsRequest) -> Result<Vec<NewsArticle>, CredoError> {
        let mut articles = fixtures::news::all();
        articles.truncate(req.count);
        Ok(articles)
    }
}
