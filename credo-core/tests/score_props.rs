use credo_core::score::{SCORE_MAX, SCORE_MIN};
use credo_core::types::FundamentalsRow;
use credo_core::{ScoreInputs, synth_score, synth_score_from_row};
use proptest::prelude::*;

fn arb_finite() -> impl Strategy<Value = f64> {
    // Large but finite magnitudes, including values far outside the clamp
    // ranges on both sides.
    -1.0e12f64..1.0e12f64
}

proptest! {
    #[test]
    fn score_always_in_range(
        d2e in arb_finite(),
        margin in arb_finite(),
        growth in arb_finite(),
        sentiment in arb_finite(),
    ) {
        let s = synth_score(&ScoreInputs {
            debt_to_ebitda: d2e,
            ebitda_margin: margin,
            revenue_growth: growth,
            avg_sentiment: sentiment,
        });
        prop_assert!(s >= SCORE_MIN);
        prop_assert!(s <= SCORE_MAX);
    }

    #[test]
    fn row_score_in_range_and_finite(
        revenue in prop::option::of(arb_finite()),
        ebitda in prop::option::of(arb_finite()),
        debt in prop::option::of(arb_finite()),
        growth in arb_finite(),
        sentiment in arb_finite(),
    ) {
        let row = FundamentalsRow {
            id: None,
            issuer_id: None,
            report_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            revenue,
            ebitda,
            total_debt: debt,
        };
        let s = synth_score_from_row(&row, growth, sentiment);
        prop_assert!(s.is_finite());
        prop_assert!(s >= SCORE_MIN);
        prop_assert!(s <= SCORE_MAX);
    }

    #[test]
    fn score_is_deterministic(
        d2e in arb_finite(),
        margin in arb_finite(),
        growth in arb_finite(),
        sentiment in arb_finite(),
    ) {
        let inputs = ScoreInputs {
            debt_to_ebitda: d2e,
            ebitda_margin: margin,
            revenue_growth: growth,
            avg_sentiment: sentiment,
        };
        prop_assert_eq!(synth_score(&inputs), synth_score(&inputs));
    }
}
