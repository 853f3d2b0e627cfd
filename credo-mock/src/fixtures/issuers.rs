use credo_core::types::Issuer;

pub fn all() -> Vec<Issuer> {
    vec![
        Issuer {
            id: 1,
            name: "Acme Industries".into(),
            ticker: Some("ACME".into()),
            country: Some("IN".into()),
        },
        Issuer {
            id: 2,
            name: "Bharat Power Ltd".into(),
            ticker: Some("BPL".into()),
            country: Some("IN".into()),
        },
        Issuer {
            id: 3,
            name: "Global Finance PLC".into(),
            ticker: Some("GFIN".into()),
            country: Some("UK".into()),
        },
    ]
}

pub fn by_id(issuer_id: i64) -> Option<Issuer> {
    all().into_iter().find(|i| i.id == issuer_id)
}
