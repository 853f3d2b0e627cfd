use chrono::NaiveDate;
use credo_core::types::FundamentalsRow;

fn row(id: i64, issuer_id: i64, ymd: (i32, u32, u32), revenue: f64, ebitda: f64, debt: f64) -> FundamentalsRow {
    FundamentalsRow {
        id: Some(id),
        issuer_id: Some(issuer_id),
        report_date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
        revenue: Some(revenue),
        ebitda: Some(ebitda),
        total_debt: Some(debt),
    }
}

pub fn by_issuer(issuer_id: i64) -> Vec<FundamentalsRow> {
    match issuer_id {
        1 => vec![
            row(1, 1, (2024, 12, 31), 1250.5, 210.2, 450.0),
            row(2, 1, (2025, 3, 31), 310.4, 52.1, 440.0),
        ],
        2 => vec![row(3, 2, (2024, 12, 31), 980.2, 150.3, 700.0)],
        3 => vec![row(4, 3, (2025, 3, 31), 220.0, 80.0, 120.0)],
        _ => vec![],
    }
}
