pub mod heuristic;
pub mod scoring;

use crate::core::{FilterCriteria, Listing, RankedResult};

pub use heuristic::{best_match, filter_candidates, select_best, suggest, HeuristicRanker, MAX_SUGGESTIONS};
pub use scoring::{score, ScoredListing, TagScope};

/// Trait for ranking implementations.
///
/// Ranking is total: an empty candidate set is an ordinary
/// [`RankedResult::NoMatch`], never an error.
pub trait Ranker: Send + Sync {
    /// Filter `listings` by `criteria` and pick the best match or fallbacks
    fn rank(&self, listings: &[Listing], criteria: &FilterCriteria) -> RankedResult;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}
