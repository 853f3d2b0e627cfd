//! Wire and derived data structures for the credit intelligence backend.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An entity (company) being credit-scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issuer {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Legal or display name, unique on the backend.
    pub name: String,
    /// Optional exchange ticker.
    #[serde(default)]
    pub ticker: Option<String>,
    /// Optional ISO country code.
    #[serde(default)]
    pub country: Option<String>,
}

/// One periodic fundamentals snapshot for an issuer.
///
/// Rows are immutable once fetched. The backend allows null metrics; the
/// score heuristic treats missing values as `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsRow {
    /// Backend-assigned row identifier, when present.
    #[serde(default)]
    pub id: Option<i64>,
    /// Owning issuer, when present.
    #[serde(default)]
    pub issuer_id: Option<i64>,
    /// End date of the reporting period.
    pub report_date: NaiveDate,
    /// Revenue for the period.
    #[serde(default)]
    pub revenue: Option<f64>,
    /// EBITDA for the period.
    #[serde(default)]
    pub ebitda: Option<f64>,
    /// Total debt outstanding at period end.
    #[serde(default)]
    pub total_debt: Option<f64>,
}

impl FundamentalsRow {
    /// Revenue with the backend's null-as-zero convention applied.
    #[must_use]
    pub fn revenue_or_zero(&self) -> f64 {
        self.revenue.unwrap_or(0.0)
    }

    /// EBITDA with the backend's null-as-zero convention applied.
    #[must_use]
    pub fn ebitda_or_zero(&self) -> f64 {
        self.ebitda.unwrap_or(0.0)
    }

    /// Total debt with the backend's null-as-zero convention applied.
    #[must_use]
    pub fn total_debt_or_zero(&self) -> f64 {
        self.total_debt.unwrap_or(0.0)
    }
}

/// A classified, sentiment-scored event associated with an issuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Issuer the event is attributed to, when resolved.
    #[serde(default)]
    pub issuer_id: Option<i64>,
    /// Classification label, e.g. "earnings", "merger", "downgrade".
    pub event_type: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Compound sentiment in [-1, 1], when NLP produced one.
    ///
    /// Events without a numeric sentiment are excluded from sentiment
    /// averages rather than counted as zero.
    #[serde(default)]
    pub sentiment: Option<f64>,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
}

/// A news headline from the backend's ingestion feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Headline text.
    pub title: String,
    /// Canonical article URL.
    pub link: String,
    /// Publication time, when the feed reported one.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Feed-provided summary, when present.
    #[serde(default)]
    pub summary: Option<String>,
}

/// Per-feature signed contribution to a score, used for explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapEntry {
    /// Feature name, e.g. "debt_to_ebitda".
    pub feature: String,
    /// Feature value the model saw.
    pub value: f64,
    /// Signed SHAP contribution to the score.
    pub shap_value: f64,
}

/// A computed credit score with its explanation, as returned by `/score/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Score clamped to [300, 850] by the backend.
    pub score: f64,
    /// Unclamped model output, when the backend exposes it.
    #[serde(default)]
    pub raw_score: Option<f64>,
    /// Issuer summary attached to the response, when present.
    #[serde(default)]
    pub issuer: Option<Issuer>,
    /// Feature values the score was computed from, keyed by feature name.
    #[serde(default)]
    pub features: BTreeMap<String, f64>,
    /// Per-feature contributions, ordered by descending absolute impact.
    ///
    /// The backend sorts this sequence; the client preserves its order.
    #[serde(default)]
    pub shap: Vec<ShapEntry>,
}

/// A derived time-series point: computed, never persisted, recomputed from
/// the current fundamentals and events on every build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Report date the point corresponds to.
    pub date: NaiveDate,
    /// Synthetic score, rounded to the nearest integer.
    pub score: f64,
    /// Revenue for the period (null-as-zero).
    pub revenue: f64,
    /// Total debt at period end (null-as-zero).
    pub total_debt: f64,
}

/// Request envelope for news fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRequest {
    /// Maximum number of headlines to return.
    pub count: usize,
}

impl Default for NewsRequest {
    fn default() -> Self {
        Self { count: 20 }
    }
}
