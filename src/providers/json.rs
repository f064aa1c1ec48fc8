use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::core::{validate_listings, Category, Listing};
use crate::error::Result;
use crate::providers::ListingProvider;

/// Listings loaded once from a JSON array on disk
///
/// ```json
/// [
///   {"listingId": "T001", "title": "Toyota Camry 2018", "basePrice": 80.0,
///    "location": "Kuala Lumpur", "averageRating": 4.7, "category": "transport",
///    "vehicleType": "car", "make": "Toyota", "model": "Camry", "year": 2018}
/// ]
/// ```
pub struct JsonFileProvider {
    path: PathBuf,
    listings: Vec<Listing>,
}

impl JsonFileProvider {
    /// Load and validate the snapshot at `path`
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let raw = tokio::fs::read_to_string(&path).await?;
        let listings: Vec<Listing> = serde_json::from_str(&raw)?;
        validate_listings(&listings)?;

        tracing::info!("Loaded {} listings from {}", listings.len(), path.display());

        Ok(Self { path, listings })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[async_trait]
impl ListingProvider for JsonFileProvider {
    async fn listings(&self, category: Category) -> Result<Vec<Listing>> {
        Ok(self
            .listings
            .iter()
            .filter(|l| l.category() == category)
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "json"
    }

    async fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterEngineError;
    use crate::providers::mock::mock_listings;
    use std::io::Write;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_snapshot() {
        let json = serde_json::to_string(&mock_listings()).unwrap();
        let file = write_snapshot(&json);

        let provider = JsonFileProvider::new(file.path()).await.unwrap();
        assert_eq!(provider.len(), 6);

        let items = provider.listings(Category::Item).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Canon DSLR Camera");
    }

    #[tokio::test]
    async fn test_integer_prices_are_accepted() {
        let file = write_snapshot(
            r#"[{"listingId": "I9", "title": "Ladder", "basePrice": 15,
                 "location": "Ipoh", "averageRating": 4, "category": "item",
                 "itemCategory": "Tools"}]"#,
        );
        let provider = JsonFileProvider::new(file.path()).await.unwrap();
        let items = provider.listings(Category::Item).await.unwrap();
        assert_eq!(items[0].base_price, 15.0);
        assert!(items[0].owner_id.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_invalid_dataset() {
        let file = write_snapshot(
            r#"[{"listingId": "I9", "title": "Ladder", "basePrice": -5,
                 "location": "Ipoh", "averageRating": 4.0, "category": "item",
                 "itemCategory": "Tools"}]"#,
        );
        let err = JsonFileProvider::new(file.path()).await.err().unwrap();
        assert!(matches!(err, FilterEngineError::InvalidListing { .. }));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = JsonFileProvider::new("/nonexistent/listings.json").await.err().unwrap();
        assert!(matches!(err, FilterEngineError::Io(_)));
    }
}
