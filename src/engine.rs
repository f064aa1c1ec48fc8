use crate::config::{DataSource, EngineConfig};
use crate::core::{Category, FilterCriteria, Listing, SearchResponse};
use crate::error::Result;
use crate::providers::{JsonFileProvider, ListingProvider, MockProvider, SqliteProvider};
use crate::ranking::{HeuristicRanker, Ranker};
use std::sync::Arc;
use std::time::Instant;

/// Category specialist dispatch: fetches a collection and ranks it
pub struct FilterEngine {
    provider: Arc<dyn ListingProvider>,
    ranker: Arc<dyn Ranker>,
}

impl FilterEngine {
    /// Create an engine over `provider` with the heuristic ranker
    pub fn new(provider: Arc<dyn ListingProvider>) -> Self {
        Self {
            provider,
            ranker: Arc::new(HeuristicRanker::new()),
        }
    }

    /// Engine over the built-in mock dataset
    pub fn with_mock_data() -> Self {
        Self::new(Arc::new(MockProvider::new()))
    }

    /// Build the provider named by the configuration
    pub async fn from_config(config: &EngineConfig) -> Result<Self> {
        let provider: Arc<dyn ListingProvider> = match &config.data {
            DataSource::Mock => Arc::new(MockProvider::new()),
            DataSource::Json { path } => Arc::new(JsonFileProvider::new(path).await?),
            DataSource::Sqlite { path } => Arc::new(SqliteProvider::new(path).await?),
        };

        tracing::info!("✅ Listing provider initialized: {}", provider.name());

        Ok(Self::new(provider))
    }

    /// Replace the ranker
    pub fn with_ranker(mut self, ranker: Arc<dyn Ranker>) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Unfiltered collection for a category
    pub async fn listings(&self, category: Category) -> Result<Vec<Listing>> {
        self.provider.listings(category).await
    }

    /// Rank the criteria's category collection.
    ///
    /// An empty candidate set is reported inside the response, not as an error.
    pub async fn search(&self, criteria: &FilterCriteria) -> Result<SearchResponse> {
        let start = Instant::now();
        let category = criteria.category();

        let listings = self.provider.listings(category).await?;
        tracing::debug!("Provider {} returned {} {} listings", self.provider.name(), listings.len(), category);

        let result = self.ranker.rank(&listings, criteria);
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        let response = SearchResponse::new(category, result, listings.len(), latency_ms)
            .with_provider(self.provider.name())
            .with_ranking_method(self.ranker.name());

        tracing::info!("{}", response.display());

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ItemCriteria, RankedResult, ReasonTag};

    #[tokio::test]
    async fn test_engine_creation() {
        let engine = FilterEngine::from_config(&EngineConfig::default()).await.unwrap();
        assert_eq!(engine.provider_name(), "mock");
    }

    #[tokio::test]
    async fn test_search_items() {
        let engine = FilterEngine::with_mock_data();
        let criteria = FilterCriteria::Item(ItemCriteria {
            item_category: Some("electronics".to_string()),
            ..Default::default()
        });

        let response = engine.search(&criteria).await.unwrap();
        assert_eq!(response.category, Category::Item);
        assert_eq!(response.collection_size, 2);
        assert_eq!(response.ranking_method, "heuristic");

        let best = response.result.best().unwrap();
        assert_eq!(best.listing_id, "I001");
        assert_eq!(best.reason, ReasonTag::HighRating);
    }

    struct EmptyRanker;

    impl Ranker for EmptyRanker {
        fn rank(&self, _listings: &[Listing], criteria: &FilterCriteria) -> RankedResult {
            RankedResult::NoMatch {
                error: criteria.category().no_match_message(),
                suggestions: Vec::new(),
            }
        }

        fn name(&self) -> &str {
            "empty"
        }
    }

    #[tokio::test]
    async fn test_custom_ranker() {
        let engine = FilterEngine::with_mock_data().with_ranker(Arc::new(EmptyRanker));
        let response = engine
            .search(&FilterCriteria::unconstrained(Category::Transport))
            .await
            .unwrap();

        assert_eq!(response.ranking_method, "empty");
        assert!(!response.result.is_match());
    }
}
