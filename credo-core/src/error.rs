use thiserror::Error;

use crate::capability::Capability;

/// Unified error type for the credo workspace.
///
/// This wraps backend-tagged failures, data decoding issues, argument
/// validation errors, not-found conditions, and timeouts.
#[derive(Debug, Error)]
pub enum CredoError {
    /// Issues with the returned or expected data (missing fields, bad JSON, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The backend returned an error for a request.
    #[error("{backend} failed: {msg}")]
    Backend {
        /// Backend name that failed.
        backend: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "score for issuer 3".
        what: String,
    },

    /// A backend call exceeded the configured timeout.
    #[error("timed out: {capability}")]
    Timeout {
        /// Capability label for which the call timed out.
        capability: Capability,
    },

    /// An overall view assembly exceeded the configured deadline.
    #[error("request timed out: {what}")]
    RequestTimeout {
        /// Label of the aggregation that timed out, e.g. "issuer-dashboard".
        what: &'static str,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl CredoError {
    /// Helper: build a `Backend` error with the backend name and message.
    pub fn backend(backend: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Backend {
            backend: backend.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Timeout` error for a capability.
    #[must_use]
    pub const fn timeout(capability: Capability) -> Self {
        Self::Timeout { capability }
    }

    /// Helper: build a `RequestTimeout` error for an aggregation label.
    #[must_use]
    pub const fn request_timeout(what: &'static str) -> Self {
        Self::RequestTimeout { what }
    }
}

impl From<serde_json::Error> for CredoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}
