use async_trait::async_trait;

use crate::CredoError;
use crate::types::{Event, FundamentalsRow, Issuer, NewsArticle, NewsRequest, ScoreResult};

/// Contract implemented by data connectors for the scoring backend.
///
/// Connectors are expected to normalize transport and provider failures
/// into [`CredoError`] variants; the orchestrator adds timeouts and
/// degradation policy on top.
#[async_trait]
pub trait CreditBackend: Send + Sync {
    /// Stable backend name used in error tagging and logs.
    fn name(&self) -> &'static str;

    /// List all known issuers.
    async fn issuers(&self) -> Result<Vec<Issuer>, CredoError>;

    /// Fetch fundamentals rows for an issuer. Row order is unspecified.
    async fn fundamentals(&self, issuer_id: i64) -> Result<Vec<FundamentalsRow>, CredoError>;

    /// Fetch the computed credit score and SHAP explanation for an issuer.
    async fn score(&self, issuer_id: i64) -> Result<ScoreResult, CredoError>;

    /// Fetch classified events for an issuer. Order is unspecified.
    async fn events(&self, issuer_id: i64) -> Result<Vec<Event>, CredoError>;

    /// Fetch market-wide news headlines.
    async fn news(&self, req: NewsRequest) -> Result<Vec<NewsArticle>, CredoError>;
}
