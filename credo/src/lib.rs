//! Credo assembles credit-intelligence dashboard views from a scoring backend.
//!
//! Overview
//! - Drives any connector implementing the `credo_core` [`CreditBackend`]
//!   contract (HTTP via `credo-api`, fixtures via `credo-mock`).
//! - Wraps every backend call in a per-call timeout and normalizes errors.
//! - Assembles views by fanning out independent fetches concurrently and
//!   degrading each failed fetch to an empty/absent value instead of
//!   failing the whole view.
//! - Derives a synthetic score time-series (and a fallback score) from
//!   fundamentals and events when the backend's score is missing or stale.
//!
//! Key behaviors and trade-offs
//! - Per-fetch degradation: a dashboard renders with whatever arrived;
//!   only a missing issuer is a hard failure. Degraded capabilities are
//!   reported with `tracing` warnings.
//! - Cancellation: all fetches for a view are children of the future the
//!   operation returns; dropping it cancels everything in flight.
//! - Optional overall deadline bounds view assembly even when individual
//!   call timeouts would allow it to drag on.
//!
//! Building a client and rendering a dashboard:
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! let backend = Arc::new(credo_api::ApiBackend::builder().build()?);
//! let credo = credo::Credo::builder().with_backend(backend).build()?;
//!
//! let dashboard = credo.issuer_dashboard(1).await?;
//! match &dashboard.score {
//!     Some(s) => println!("score: {:.0}", s.score),
//!     None => println!("No score available"),
//! }
//! for point in &dashboard.series {
//!     println!("{} {:.0}", point.date, point.score);
//! }
//! ```
//!
//! See `credo/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod views;

pub use core::{Credo, CredoBuilder};
pub use views::{IssuerDashboard, MarketOverview};

// Re-export core types for convenience
pub use credo_core::{
    Capability,
    CreditBackend,
    CredoConfig,
    CredoError,
    Event,
    FeatureVector,
    FundamentalsRow,
    Issuer,
    NewsArticle,
    NewsRequest,
    ScoreResult,
    SeriesPoint,
    ShapEntry,
    build_score_series,
    issuer_features,
    synth_score,
    synth_score_from_row,
};
