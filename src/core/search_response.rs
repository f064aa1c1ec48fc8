use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Category, RankedResult};

/// Ranked result plus the metadata of the search that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Category the specialist searched
    pub category: Category,

    /// Best match or fallback suggestions
    pub result: RankedResult,

    /// Size of the unfiltered collection that was ranked
    pub collection_size: usize,

    /// Search latency in milliseconds
    pub latency_ms: f64,

    /// Provider that supplied the collection
    pub provider: String,

    /// Ranking method used
    pub ranking_method: String,

    pub searched_at: DateTime<Utc>,
}

impl SearchResponse {
    /// Create a new search response
    pub fn new(category: Category, result: RankedResult, collection_size: usize, latency_ms: f64) -> Self {
        Self {
            category,
            result,
            collection_size,
            latency_ms,
            provider: String::from("unknown"),
            ranking_method: String::from("unknown"),
            searched_at: Utc::now(),
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Set ranking method
    pub fn with_ranking_method(mut self, method: impl Into<String>) -> Self {
        self.ranking_method = method.into();
        self
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match &self.result {
            RankedResult::Match(best) => format!(
                "[{}] {} via {} ({:.2}ms)",
                self.category,
                best.display(),
                self.ranking_method,
                self.latency_ms
            ),
            RankedResult::NoMatch { suggestions, .. } => format!(
                "[{}] no match, {} suggestion(s) via {} ({:.2}ms)",
                self.category,
                suggestions.len(),
                self.ranking_method,
                self.latency_ms
            ),
        }
    }
}
