//! # Smart Filter Engine
//!
//! Rental listing search shared by three category specialists
//! (transport, accommodation, item):
//! - Sparse, category-specific filter criteria
//! - Fixed price/rating score with "High Rating" / "Cheap" reason tags
//! - Up to three fallback suggestions when nothing matches
//! - Mock, JSON and SQLite listing providers
//! - Coordinator over an injected intent classifier
//! - Multiple interfaces: Rust library, Python bindings, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smart_filter_engine::{FilterCriteria, FilterEngine, TransportCriteria};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = FilterEngine::with_mock_data();
//!
//!     let response = engine
//!         .search(&FilterCriteria::Transport(TransportCriteria {
//!             location: Some("Kuala Lumpur".to_string()),
//!             max_price: Some(75.0),
//!             ..Default::default()
//!         }))
//!         .await?;
//!
//!     if let Some(best) = response.result.best() {
//!         println!("Found: {} ({})", best.title, best.reason);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod providers;
pub mod ranking;
pub mod routing;

// Re-export primary types
pub use crate::core::{
    AccommodationCriteria, Category, FilterCriteria, ItemCriteria, Listing, ListingDetails,
    ListingSummary, RankedResult, ReasonTag, SearchResponse, TransportCriteria,
};
pub use config::{DataSource, EngineConfig};
pub use engine::FilterEngine;
pub use error::{FilterEngineError, Result};
pub use ranking::{HeuristicRanker, Ranker};
pub use routing::{Coordinator, CoordinatorReply, Intent, IntentClassifier};

// Python bindings
#[cfg(feature = "python")]
pub mod python;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
