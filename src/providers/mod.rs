pub mod json;
pub mod mock;
pub mod sqlite;

use async_trait::async_trait;
use crate::core::{Category, Listing};
use crate::error::Result;

pub use json::JsonFileProvider;
pub use mock::MockProvider;
pub use sqlite::SqliteProvider;

/// Trait for listing data sources (mock dataset, JSON snapshot, SQLite store)
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// All listings of one category, in a stable order.
    ///
    /// Order is observable: ranking ties resolve to the earlier listing.
    async fn listings(&self, category: Category) -> Result<Vec<Listing>>;

    /// Get provider name
    fn name(&self) -> &str;

    /// Check if provider is available
    async fn is_available(&self) -> bool;
}
