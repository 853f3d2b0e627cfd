use std::collections::BTreeMap;

use credo_core::types::{ScoreResult, ShapEntry};
use credo_core::{issuer_features, synth_score};

use super::{events, fundamentals, issuers};

/// Build a score result by running the synthetic heuristic over the
/// issuer's fixture data, so mock scores stay consistent with the
/// fundamentals and events served alongside them.
pub fn by_issuer(issuer_id: i64) -> Option<ScoreResult> {
    let issuer = issuers::by_id(issuer_id)?;
    let rows = fundamentals::by_issuer(issuer_id);
    let evts = events::by_issuer(issuer_id);

    let feats = issuer_features(&rows, &evts);
    let score = synth_score(&feats.score_inputs());

    let mut features = BTreeMap::new();
    features.insert("debt_to_ebitda".to_string(), feats.debt_to_ebitda);
    features.insert("ebitda_margin".to_string(), feats.ebitda_margin);
    features.insert("revenue_growth".to_string(), feats.revenue_growth);
    features.insert("avg_sentiment".to_string(), feats.avg_sentiment);
    features.insert("recent_revenue".to_string(), feats.recent_revenue);
    features.insert("recent_total_debt".to_string(), feats.recent_total_debt);

    // Attribute each term's contribution relative to the neutral base, and
    // order by absolute impact like the real backend does.
    let mut shap = vec![
        ShapEntry {
            feature: "debt_to_ebitda".into(),
            value: feats.debt_to_ebitda,
            shap_value: -100.0 * feats.debt_to_ebitda.clamp(0.0, 10.0) / 10.0,
        },
        ShapEntry {
            feature: "revenue_growth".into(),
            value: feats.revenue_growth,
            shap_value: 150.0 * feats.revenue_growth.clamp(-1.0, 1.0),
        },
        ShapEntry {
            feature: "ebitda_margin".into(),
            value: feats.ebitda_margin,
            shap_value: 100.0 * feats.ebitda_margin.clamp(-1.0, 1.0),
        },
        ShapEntry {
            feature: "avg_sentiment".into(),
            value: feats.avg_sentiment,
            shap_value: 100.0 * feats.avg_sentiment.clamp(-1.0, 1.0),
        },
    ];
    shap.sort_by(|a, b| {
        b.shap_value
            .abs()
            .partial_cmp(&a.shap_value.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Some(ScoreResult {
        score,
        raw_score: Some(score),
        issuer: Some(issuer),
        features,
        shap,
    })
}
