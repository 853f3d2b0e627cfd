//! Assembled dashboard views and their degradation policy.
//!
//! Views fan out independent backend fetches concurrently and degrade each
//! failed fetch to an absent/empty value rather than failing the whole
//! view. The only hard failure in a dashboard is an unresolvable issuer.

use credo_core::types::{
    Event, FundamentalsRow, Issuer, NewsArticle, NewsRequest, ScoreResult, SeriesPoint,
};
use credo_core::{Capability, CredoError, build_score_series, issuer_features, synth_score};

use crate::core::Credo;

/// Everything needed to render a single-issuer dashboard page.
///
/// Produced by [`Credo::issuer_dashboard`]. Fields populated from fetches
/// that failed are `None` or empty; consult the logs for the cause.
#[derive(Debug, Clone)]
pub struct IssuerDashboard {
    /// The resolved issuer. Always present.
    pub issuer: Issuer,
    /// The backend-computed score with its SHAP explanation, if the score
    /// fetch succeeded.
    pub score: Option<ScoreResult>,
    /// Fundamentals rows sorted ascending by report date.
    pub fundamentals: Vec<FundamentalsRow>,
    /// Classified events for the issuer.
    pub events: Vec<Event>,
    /// Market-wide headlines.
    pub news: Vec<NewsArticle>,
    /// Synthetic score series derived from `fundamentals` and `events`.
    pub series: Vec<SeriesPoint>,
    /// Locally derived point-in-time score. Serves as a fallback when
    /// `score` is absent; `None` only when there are no fundamentals to
    /// derive it from.
    pub synthetic_score: Option<f64>,
}

impl IssuerDashboard {
    /// The score to display: the backend's when available, otherwise the
    /// locally derived synthetic one.
    #[must_use]
    pub fn display_score(&self) -> Option<f64> {
        self.score
            .as_ref()
            .map(|s| s.score)
            .or(self.synthetic_score)
    }
}

/// Landing-page view: the issuer directory plus market headlines.
///
/// Produced by [`Credo::overview`]. Both fields degrade to empty on fetch
/// failure; the overview itself never fails (absent an overall deadline).
#[derive(Debug, Clone, Default)]
pub struct MarketOverview {
    /// All known issuers.
    pub issuers: Vec<Issuer>,
    /// Market-wide headlines.
    pub news: Vec<NewsArticle>,
}

/// Degrade a failed fetch to `None`, logging the capability that degraded.
fn ok_or_none<T>(capability: Capability, res: Result<T, CredoError>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(capability = %capability, error = %e, "fetch degraded");
            None
        }
    }
}

/// Degrade a failed list fetch to empty, logging the capability that degraded.
fn ok_or_empty<T>(capability: Capability, res: Result<Vec<T>, CredoError>) -> Vec<T> {
    ok_or_none(capability, res).unwrap_or_default()
}

impl Credo {
    /// Assemble the dashboard view for one issuer.
    ///
    /// Resolves the issuer first, then fetches score, fundamentals,
    /// events, and news concurrently. Each fetch degrades independently;
    /// the synthetic series and fallback score are derived from whatever
    /// fundamentals and events arrived.
    ///
    /// # Errors
    /// Returns `NotFound` when the issuer id is unknown, propagates the
    /// issuer-directory fetch failure, and returns `RequestTimeout` when a
    /// configured overall deadline elapses.
    pub async fn issuer_dashboard(&self, issuer_id: i64) -> Result<IssuerDashboard, CredoError> {
        self.with_request_deadline("issuer-dashboard", self.assemble_dashboard(issuer_id))
            .await?
    }

    async fn assemble_dashboard(&self, issuer_id: i64) -> Result<IssuerDashboard, CredoError> {
        let issuer = self.issuer(issuer_id).await?;

        let news_req = NewsRequest {
            count: self.cfg.news_count,
        };
        let (score, fundamentals, events, news) = futures::join!(
            self.score(issuer_id),
            self.fundamentals(issuer_id),
            self.events(issuer_id),
            self.news(news_req),
        );

        let score = ok_or_none(Capability::Score, score);
        let mut fundamentals = ok_or_empty(Capability::Fundamentals, fundamentals);
        let events = ok_or_empty(Capability::Events, events);
        let news = ok_or_empty(Capability::News, news);

        fundamentals.sort_by_key(|r| r.report_date);
        let series = build_score_series(&fundamentals, &events);
        let synthetic_score = (!fundamentals.is_empty())
            .then(|| synth_score(&issuer_features(&fundamentals, &events).score_inputs()));

        Ok(IssuerDashboard {
            issuer,
            score,
            fundamentals,
            events,
            news,
            series,
            synthetic_score,
        })
    }

    /// Assemble the landing-page overview: issuer directory plus headlines.
    ///
    /// Both fetches run concurrently and degrade to empty independently.
    ///
    /// # Errors
    /// Returns `RequestTimeout` only when a configured overall deadline
    /// elapses; fetch failures degrade rather than propagate.
    pub async fn overview(&self) -> Result<MarketOverview, CredoError> {
        self.with_request_deadline("market-overview", self.assemble_overview())
            .await
    }

    async fn assemble_overview(&self) -> MarketOverview {
        let news_req = NewsRequest {
            count: self.cfg.news_count,
        };
        let (issuers, news) = futures::join!(self.issuers(), self.news(news_req));
        MarketOverview {
            issuers: ok_or_empty(Capability::Issuers, issuers),
            news: ok_or_empty(Capability::News, news),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_or_none_passes_values_through() {
        let v: Option<i32> = ok_or_none(Capability::Score, Ok(7));
        assert_eq!(v, Some(7));
    }

    #[test]
    fn ok_or_none_swallows_errors() {
        let v: Option<i32> =
            ok_or_none(Capability::Score, Err(CredoError::Other("boom".into())));
        assert_eq!(v, None);
    }

    #[test]
    fn ok_or_empty_degrades_to_empty_vec() {
        let v: Vec<i32> = ok_or_empty(
            Capability::Events,
            Err(CredoError::backend("test", "down")),
        );
        assert!(v.is_empty());
    }
}
