use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for errors and telemetry.
///
/// These map one-to-one with backend endpoints and allow consistent
/// Display formatting and match-exhaustive handling when adding new
/// capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Issuer directory listing.
    Issuers,
    /// Periodic fundamentals rows for an issuer.
    Fundamentals,
    /// Computed credit score with SHAP explanation.
    Score,
    /// Sentiment-bearing events for an issuer.
    Events,
    /// Market-wide news headlines.
    News,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Issuers => "issuers",
            Self::Fundamentals => "fundamentals",
            Self::Score => "score",
            Self::Events => "events",
            Self::News => "news",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
