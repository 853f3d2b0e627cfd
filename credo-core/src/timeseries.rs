//! Score time-series derivation.
//!
//! Joins sorted fundamentals rows with nearby events to produce a
//! per-report-date synthetic score series for charting. The series is a
//! pure function of its inputs and is recomputed on every build.

use chrono::NaiveDate;

use crate::score::{eps_div, synth_score_from_row};
use crate::types::{Event, FundamentalsRow, SeriesPoint};

/// Half-width of the event join window around a report date, in days.
pub const EVENT_WINDOW_DAYS: i64 = 30;

/// Average the numeric sentiments of events within `window_days` (absolute)
/// of `date`. Events lacking a numeric sentiment are excluded from the
/// average, not counted as zero. Returns `0.0` when no event qualifies.
#[must_use]
pub fn avg_sentiment_near(events: &[Event], date: NaiveDate, window_days: i64) -> f64 {
    let sentiments: Vec<f64> = events
        .iter()
        .filter(|e| {
            let delta = (e.timestamp.date_naive() - date).num_days();
            delta.abs() <= window_days
        })
        .filter_map(|e| e.sentiment)
        .collect();
    if sentiments.is_empty() {
        0.0
    } else {
        sentiments.iter().sum::<f64>() / sentiments.len() as f64
    }
}

/// Build the synthetic score series from unordered fundamentals and events.
///
/// Procedure: sort rows ascending by `report_date`; compute each row's
/// growth against the immediately preceding row's revenue (`0.0` for the
/// first row); average the sentiment of events within
/// [`EVENT_WINDOW_DAYS`] of the report date; feed the heuristic; emit the
/// rounded score alongside the row's raw revenue and debt.
///
/// Empty fundamentals yield an empty series.
#[must_use]
pub fn build_score_series(rows: &[FundamentalsRow], events: &[Event]) -> Vec<SeriesPoint> {
    let mut sorted: Vec<&FundamentalsRow> = rows.iter().collect();
    sorted.sort_by_key(|r| r.report_date);

    let mut series = Vec::with_capacity(sorted.len());
    let mut prev_revenue: Option<f64> = None;
    for row in sorted {
        let revenue = row.revenue_or_zero();
        let growth = prev_revenue.map_or(0.0, |prev| eps_div(revenue - prev, prev));
        let sentiment = avg_sentiment_near(events, row.report_date, EVENT_WINDOW_DAYS);
        let score = synth_score_from_row(row, growth, sentiment);
        series.push(SeriesPoint {
            date: row.report_date,
            score: score.round(),
            revenue,
            total_debt: row.total_debt_or_zero(),
        });
        prev_revenue = Some(revenue);
    }
    series
}
