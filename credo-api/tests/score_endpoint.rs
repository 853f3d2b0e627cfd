use credo_api::ApiBackend;
use credo_core::{CreditBackend, CredoError};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn score_decodes_and_preserves_shap_order() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/score/4");
            then.status(200).json_body(json!({
                "score": 612.4,
                "raw_score": 608.9,
                "issuer": {"id": 4, "name": "Bharat Power Ltd", "ticker": "BPL", "country": "IN"},
                "features": {
                    "debt_to_ebitda": 4.66,
                    "ebitda_margin": 0.153,
                    "revenue_growth": -0.02,
                    "avg_sentiment": 0.1
                },
                "shap": [
                    {"feature": "debt_to_ebitda", "value": 4.66, "shap_value": -38.2},
                    {"feature": "revenue_growth", "value": -0.02, "shap_value": 12.1},
                    {"feature": "avg_sentiment", "value": 0.1, "shap_value": 4.0}
                ]
            }));
        })
        .await;

    let backend = ApiBackend::builder()
        .base_url(server.base_url())
        .build()
        .unwrap();

    let result = backend.score(4).await.unwrap();
    assert_eq!(result.score, 612.4);
    assert_eq!(result.raw_score, Some(608.9));
    assert_eq!(result.issuer.as_ref().unwrap().name, "Bharat Power Ltd");
    // The backend orders shap by |impact| descending; order must survive
    // the round trip untouched.
    let features: Vec<&str> = result.shap.iter().map(|s| s.feature.as_str()).collect();
    assert_eq!(
        features,
        ["debt_to_ebitda", "revenue_growth", "avg_sentiment"]
    );
    assert_eq!(result.features.get("ebitda_margin"), Some(&0.153));
}

#[tokio::test]
async fn score_404_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/score/99");
            then.status(404);
        })
        .await;

    let backend = ApiBackend::builder()
        .base_url(server.base_url())
        .build()
        .unwrap();

    let err = backend.score(99).await.unwrap_err();
    match err {
        CredoError::NotFound { what } => assert_eq!(what, "score for issuer 99"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn sparse_score_body_decodes_with_defaults() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/score/1");
            then.status(200).json_body(json!({"score": 700.0}));
        })
        .await;

    let backend = ApiBackend::builder()
        .base_url(server.base_url())
        .build()
        .unwrap();

    let result = backend.score(1).await.unwrap();
    assert_eq!(result.score, 700.0);
    assert_eq!(result.raw_score, None);
    assert!(result.issuer.is_none());
    assert!(result.features.is_empty());
    assert!(result.shap.is_empty());
}
