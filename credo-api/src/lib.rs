//! credo-api
//!
//! HTTP connector for the credo credit intelligence ecosystem. Implements
//! [`credo_core::CreditBackend`] against the scoring backend's REST API:
//! `/issuers`, `/fundamentals`, `/score/{id}`, `/events`, and `/news`.
//!
//! The base URL defaults to `http://127.0.0.1:8000` and can be overridden
//! with the `CREDO_API_URL` environment variable or explicitly through
//! [`ApiBackendBuilder`].
#![warn(missing_docs)]

mod builder;
mod client;

pub use builder::{ApiBackendBuilder, CREDO_API_URL_VAR, DEFAULT_BASE_URL};
pub use client::ApiBackend;
