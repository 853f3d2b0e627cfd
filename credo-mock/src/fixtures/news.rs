use chrono::{TimeZone, Utc};
use credo_core::types::NewsArticle;

pub fn all() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: 1,
            title: "Acme Industries posts strong Q4 profit".into(),
            link: "https://news.example/acme-q4".into(),
            published_at: Some(Utc.with_ymd_and_hms(2025, 1, 15, 7, 0, 0).unwrap()),
            summary: Some("Revenue and margins ahead of consensus.".into()),
        },
        NewsArticle {
            id: 2,
            title: "Bharat Power downgraded by rating agency".into(),
            link: "https://news.example/bpl-downgrade".into(),
            published_at: Some(Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap()),
            summary: None,
        },
        NewsArticle {
            id: 3,
            title: "Global Finance PLC to acquire regional rival".into(),
            link: "https://news.example/gfin-merger".into(),
            published_at: Some(Utc.with_ymd_and_hms(2025, 3, 28, 16, 30, 0).unwrap()),
            summary: None,
        },
    ]
}
