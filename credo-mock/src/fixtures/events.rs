use chrono::{DateTime, TimeZone, Utc};
use credo_core::types::Event;

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
}

pub fn by_issuer(issuer_id: i64) -> Vec<Event> {
    match issuer_id {
        1 => vec![
            Event {
                id: 1,
                issuer_id: Some(1),
                event_type: "earnings".into(),
                description: Some("Q4 results beat estimates".into()),
                sentiment: Some(0.4),
                timestamp: at(2025, 1, 15),
            },
            Event {
                id: 2,
                issuer_id: Some(1),
                event_type: "management".into(),
                description: Some("CFO resigns".into()),
                sentiment: Some(-0.3),
                timestamp: at(2025, 3, 20),
            },
            // Price-ingestion events carry no NLP sentiment.
            Event {
                id: 3,
                issuer_id: Some(1),
                event_type: "price".into(),
                description: None,
                sentiment: None,
                timestamp: at(2025, 3, 25),
            },
        ],
        2 => vec![Event {
            id: 4,
            issuer_id: Some(2),
            event_type: "downgrade".into(),
            description: Some("Rating cut on leverage concerns".into()),
            sentiment: Some(-0.6),
            timestamp: at(2025, 1, 10),
        }],
        3 => vec![Event {
            id: 5,
            issuer_id: Some(3),
            event_type: "merger".into(),
            description: Some("Announces acquisition of regional rival".into()),
            sentiment: Some(0.5),
            timestamp: at(2025, 3, 28),
        }],
        _ => vec![],
    }
}
