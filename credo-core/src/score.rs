//! Synthetic score heuristic.
//!
//! Mirrors the backend's label-synthesis formula so clients can render a
//! plausible score even for periods the backend has not scored yet:
//!
//! ```text
//! score = 600
//!       - 100 * clamp(debt_to_ebitda, 0, 10) / 10
//!       + 150 * clamp(revenue_growth, -1, 1)
//!       + 100 * clamp(ebitda_margin, -1, 1)
//!       + 100 * clamp(avg_sentiment, -1, 1)
//! ```
//! clamped to [300, 850]. All ratios are epsilon-floored, so the formula
//! is total over finite inputs.

use serde::{Deserialize, Serialize};

use crate::types::{Event, FundamentalsRow};

/// Lower bound of the score range.
pub const SCORE_MIN: f64 = 300.0;
/// Upper bound of the score range.
pub const SCORE_MAX: f64 = 850.0;
/// Neutral starting score before feature adjustments.
pub const BASE_SCORE: f64 = 600.0;

/// Denominator floor for ratio features.
pub(crate) const EPS: f64 = 1e-6;

/// Ratio inputs to the synthetic score formula.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreInputs {
    /// Total debt over EBITDA (epsilon-floored denominator).
    pub debt_to_ebitda: f64,
    /// EBITDA over revenue (epsilon-floored denominator).
    pub ebitda_margin: f64,
    /// Revenue growth relative to the preceding period.
    pub revenue_growth: f64,
    /// Average compound sentiment in [-1, 1].
    pub avg_sentiment: f64,
}

/// Point-in-time feature vector for an issuer, matching the backend's
/// feature engineering (latest two fundamentals rows, recent events).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Total debt over EBITDA from the latest row.
    pub debt_to_ebitda: f64,
    /// EBITDA margin from the latest row.
    pub ebitda_margin: f64,
    /// Revenue growth from the latest row versus the one before it.
    pub revenue_growth: f64,
    /// Average sentiment over the last scored events.
    pub avg_sentiment: f64,
    /// Latest raw revenue.
    pub recent_revenue: f64,
    /// Latest raw total debt.
    pub recent_total_debt: f64,
}

impl FeatureVector {
    /// The ratio subset consumed by [`synth_score`].
    #[must_use]
    pub const fn score_inputs(&self) -> ScoreInputs {
        ScoreInputs {
            debt_to_ebitda: self.debt_to_ebitda,
            ebitda_margin: self.ebitda_margin,
            revenue_growth: self.revenue_growth,
            avg_sentiment: self.avg_sentiment,
        }
    }
}

/// Divide with the denominator floored at [`EPS`]; never divides by zero.
pub(crate) fn eps_div(num: f64, den: f64) -> f64 {
    num / den.max(EPS)
}

/// Compute the synthetic score from ratio inputs.
///
/// Deterministic, pure, and clamped to `[SCORE_MIN, SCORE_MAX]` for all
/// finite inputs.
#[must_use]
pub fn synth_score(inputs: &ScoreInputs) -> f64 {
    let debt_penalty = 100.0 * inputs.debt_to_ebitda.clamp(0.0, 10.0) / 10.0;
    let growth_bonus = 150.0 * inputs.revenue_growth.clamp(-1.0, 1.0);
    let margin_bonus = 100.0 * inputs.ebitda_margin.clamp(-1.0, 1.0);
    let sentiment_bonus = 100.0 * inputs.avg_sentiment.clamp(-1.0, 1.0);
    (BASE_SCORE - debt_penalty + growth_bonus + margin_bonus + sentiment_bonus)
        .clamp(SCORE_MIN, SCORE_MAX)
}

/// Compute the synthetic score from a fundamentals row plus a precomputed
/// growth scalar and an average sentiment.
#[must_use]
pub fn synth_score_from_row(row: &FundamentalsRow, revenue_growth: f64, avg_sentiment: f64) -> f64 {
    let ebitda = row.ebitda_or_zero();
    synth_score(&ScoreInputs {
        debt_to_ebitda: eps_div(row.total_debt_or_zero(), ebitda),
        ebitda_margin: eps_div(ebitda, row.revenue_or_zero()),
        revenue_growth,
        avg_sentiment,
    })
}

/// Number of most-recent events considered for point-in-time sentiment.
const SENTIMENT_EVENT_LOOKBACK: usize = 10;

/// Compute the point-in-time feature vector for an issuer from its
/// fundamentals rows and events, matching the backend's semantics: the
/// latest two rows by `report_date` drive the ratios, and the sentiment
/// average spans the last [`SENTIMENT_EVENT_LOOKBACK`] events carrying a
/// numeric sentiment. Empty fundamentals yield a zeroed vector.
#[must_use]
pub fn issuer_features(rows: &[FundamentalsRow], events: &[Event]) -> FeatureVector {
    let mut sorted: Vec<&FundamentalsRow> = rows.iter().collect();
    sorted.sort_by_key(|r| std::cmp::Reverse(r.report_date));

    let Some(latest) = sorted.first() else {
        return FeatureVector::default();
    };
    let prev = sorted.get(1);

    let revenue = latest.revenue_or_zero();
    let ebitda = latest.ebitda_or_zero();
    let debt = latest.total_debt_or_zero();

    let revenue_growth = prev.map_or(0.0, |p| {
        let prev_revenue = p.revenue_or_zero();
        eps_div(revenue - prev_revenue, prev_revenue)
    });

    let mut recent: Vec<&Event> = events.iter().collect();
    recent.sort_by_key(|e| std::cmp::Reverse(e.timestamp));
    let sentiments: Vec<f64> = recent
        .iter()
        .take(SENTIMENT_EVENT_LOOKBACK)
        .filter_map(|e| e.sentiment)
        .collect();
    let avg_sentiment = if sentiments.is_empty() {
        0.0
    } else {
        sentiments.iter().sum::<f64>() / sentiments.len() as f64
    };

    FeatureVector {
        debt_to_ebitda: eps_div(debt, ebitda),
        ebitda_margin: eps_div(ebitda, revenue),
        revenue_growth,
        avg_sentiment,
        recent_revenue: revenue,
        recent_total_debt: debt,
    }
}
