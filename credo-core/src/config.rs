use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `Credo` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredoConfig {
    /// Timeout applied to each individual backend call.
    pub fetch_timeout: Duration,
    /// Optional overall deadline for fan-out aggregations (dashboard/overview).
    /// If set, operations that join multiple backend calls are bounded by it.
    pub request_timeout: Option<Duration>,
    /// Number of headlines requested when assembling views.
    pub news_count: usize,
}

impl Default for CredoConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(5),
            request_timeout: None,
            news_count: 20,
        }
    }
}
