//! credo-core
//!
//! Core types, traits, and utilities shared across the credo ecosystem.
//!
//! - `types`: common data structures (issuers, fundamentals, events, scores).
//! - `backend`: the `CreditBackend` trait implemented by connectors.
//! - `score`: the synthetic score heuristic and feature engineering.
//! - `timeseries`: the per-report-date score series builder.
//!
//! Everything in this crate is runtime-agnostic except `backend`, whose
//! async trait methods are expected to run under a Tokio 1.x runtime when
//! driven by the `credo` orchestrator.
#![warn(missing_docs)]

/// The `CreditBackend` trait implemented by data connectors.
pub mod backend;
/// Capability labels used in errors and logs.
pub mod capability;
/// Orchestrator configuration.
pub mod config;
/// Unified error type for the credo workspace.
pub mod error;
/// Synthetic score heuristic and per-issuer feature engineering.
pub mod score;
/// Score time-series derivation from fundamentals and events.
pub mod timeseries;
pub mod types;

pub use backend::CreditBackend;
pub use capability::Capability;
pub use config::CredoConfig;
pub use error::CredoError;
pub use score::{FeatureVector, ScoreInputs, issuer_features, synth_score, synth_score_from_row};
pub use timeseries::{EVENT_WINDOW_DAYS, avg_sentiment_near, build_score_series};
pub use types::*;
