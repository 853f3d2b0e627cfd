//! Dashboard fan-out and per-fetch degradation behavior.

mod common;

use std::sync::Arc;

use credo::{Capability, Credo, CredoError};
use credo_mock::MockBackend;

use common::{ShapedBackend, client_with};

#[tokio::test]
async fn full_dashboard_from_healthy_backend() {
    let credo = Credo::builder()
        .with_backend(Arc::new(MockBackend::new()))
        .build()
        .unwrap();

    let dashboard = credo.issuer_dashboard(1).await.unwrap();
    assert_eq!(dashboard.issuer.id, 1);
    assert!(dashboard.score.is_some());
    assert_eq!(dashboard.fundamentals.len(), 2);
    assert_eq!(dashboard.series.len(), 2);
    assert!(!dashboard.news.is_empty());

    // Series points line up with fundamentals, ascending by date.
    let dates: Vec<_> = dashboard.series.iter().map(|p| p.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    for point in &dashboard.series {
        assert!(point.score >= 300.0 && point.score <= 850.0);
    }
}

#[tokio::test]
async fn score_failure_degrades_to_synthetic_fallback() {
    let credo = client_with(ShapedBackend::new().failing(Capability::Score));

    let dashboard = credo.issuer_dashboard(1).await.unwrap();
    assert!(dashboard.score.is_none());
    // Fundamentals arrived, so the synthetic fallback is available.
    let synthetic = dashboard.synthetic_score.unwrap();
    assert!((300.0..=850.0).contains(&synthetic));
    assert_eq!(dashboard.display_score(), Some(synthetic));
}

#[tokio::test]
async fn each_fetch_degrades_independently() {
    let credo = client_with(
        ShapedBackend::new()
            .failing(Capability::Events)
            .failing(Capability::News),
    );

    let dashboard = credo.issuer_dashboard(1).await.unwrap();
    assert!(dashboard.events.is_empty());
    assert!(dashboard.news.is_empty());
    // Untouched capabilities still populate.
    assert!(dashboard.score.is_some());
    assert!(!dashboard.fundamentals.is_empty());
    // Series still builds, with the sentiment term neutral.
    assert_eq!(dashboard.series.len(), dashboard.fundamentals.len());
}

#[tokio::test]
async fn fundamentals_failure_empties_series_but_keeps_score() {
    let credo = client_with(ShapedBackend::new().failing(Capability::Fundamentals));

    let dashboard = credo.issuer_dashboard(1).await.unwrap();
    assert!(dashboard.fundamentals.is_empty());
    assert!(dashboard.series.is_empty());
    assert!(dashboard.synthetic_score.is_none());
    assert!(dashboard.score.is_some());
    assert_eq!(
        dashboard.display_score(),
        dashboard.score.as_ref().map(|s| s.score)
    );
}

#[tokio::test]
async fn unknown_issuer_is_a_hard_not_found() {
    let credo = Credo::builder()
        .with_backend(Arc::new(MockBackend::new()))
        .build()
        .unwrap();

    let err = credo.issuer_dashboard(42).await.unwrap_err();
    assert!(matches!(err, CredoError::NotFound { .. }));
}

#[tokio::test]
async fn issuer_directory_failure_fails_the_dashboard() {
    let credo = client_with(ShapedBackend::new().failing(Capability::Issuers));

    let err = credo.issuer_dashboard(1).await.unwrap_err();
    assert!(matches!(err, CredoError::Backend { .. }));
}

#[tokio::test]
async fn overview_degrades_instead_of_failing() {
    let credo = client_with(
        ShapedBackend::new()
            .failing(Capability::Issuers)
            .failing(Capability::News),
    );

    let overview = credo.overview().await.unwrap();
    assert!(overview.issuers.is_empty());
    assert!(overview.news.is_empty());
}

#[tokio::test]
async fn overview_respects_news_count() {
    let credo = Credo::builder()
        .with_backend(Arc::new(MockBackend::new()))
        .news_count(2)
        .build()
        .unwrap();

    let overview = credo.overview().await.unwrap();
    assert_eq!(overview.news.len(), 2);
    assert_eq!(overview.issuers.len(), 3);
}
