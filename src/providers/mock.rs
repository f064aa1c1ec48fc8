use async_trait::async_trait;

use crate::core::{
    AccommodationDetails, Category, ItemDetails, Listing, ListingDetails, TransportDetails,
};
use crate::error::Result;
use crate::providers::ListingProvider;

/// Built-in demonstration dataset, one or more listings per category
pub struct MockProvider {
    listings: Vec<Listing>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            listings: mock_listings(),
        }
    }

    /// Every mock listing across categories
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingProvider for MockProvider {
    async fn listings(&self, category: Category) -> Result<Vec<Listing>> {
        Ok(self
            .listings
            .iter()
            .filter(|l| l.category() == category)
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "mock"
    }

    async fn is_available(&self) -> bool {
        true
    }
}

fn transport(
    id: &str,
    owner: &str,
    title: &str,
    description: &str,
    price: f64,
    rating: f64,
    (make, model, year): (&str, &str, i32),
) -> Listing {
    Listing::new(
        id,
        title,
        price,
        "Kuala Lumpur",
        rating,
        ListingDetails::Transport(TransportDetails {
            vehicle_type: "car".to_string(),
            make: make.to_string(),
            model: model.to_string(),
            year,
        }),
    )
    .with_owner(owner)
    .with_description(description)
}

/// The reference listings used by the demo agents and tests
pub fn mock_listings() -> Vec<Listing> {
    vec![
        transport(
            "T001",
            "U123",
            "Toyota Camry 2018",
            "A comfortable midsize sedan.",
            80.0,
            4.7,
            ("Toyota", "Camry", 2018),
        ),
        transport(
            "T002",
            "U124",
            "Honda City 2019",
            "Compact sedan with great fuel economy.",
            70.0,
            4.5,
            ("Honda", "City", 2019),
        ),
        Listing::new(
            "A001",
            "Cozy Apartment in KL",
            150.0,
            "Kuala Lumpur",
            4.6,
            ListingDetails::Accommodation(AccommodationDetails {
                property_type: "Apartment".to_string(),
                num_guests: 2,
            }),
        )
        .with_owner("U456")
        .with_description("A modern one-bedroom apartment close to downtown."),
        Listing::new(
            "A002",
            "Family Home in Penang",
            200.0,
            "Penang",
            4.8,
            ListingDetails::Accommodation(AccommodationDetails {
                property_type: "House".to_string(),
                num_guests: 6,
            }),
        )
        .with_owner("U457")
        .with_description("A spacious house suitable for families."),
        Listing::new(
            "I001",
            "Canon DSLR Camera",
            60.0,
            "Kuala Lumpur",
            4.8,
            ListingDetails::Item(ItemDetails {
                item_category: "Electronics".to_string(),
            }),
        )
        .with_owner("U789")
        .with_description("A professional DSLR camera for rent."),
        Listing::new(
            "I002",
            "Power Drill",
            20.0,
            "Kuala Lumpur",
            4.3,
            ListingDetails::Item(ItemDetails {
                item_category: "Tools".to_string(),
            }),
        )
        .with_owner("U790")
        .with_description("Heavy duty power drill for DIY projects."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate_listings;

    #[tokio::test]
    async fn test_mock_split_by_category() {
        let provider = MockProvider::new();

        for category in Category::ALL {
            let listings = provider.listings(category).await.unwrap();
            assert_eq!(listings.len(), 2);
            assert!(listings.iter().all(|l| l.category() == category));
        }
    }

    #[tokio::test]
    async fn test_mock_keeps_dataset_order() {
        let provider = MockProvider::new();
        let transport = provider.listings(Category::Transport).await.unwrap();
        assert_eq!(transport[0].listing_id, "T001");
        assert_eq!(transport[1].listing_id, "T002");
    }

    #[test]
    fn test_mock_is_available() {
        let provider = MockProvider::default();
        assert!(tokio_test::block_on(provider.is_available()));
        assert_eq!(provider.name(), "mock");
    }

    #[test]
    fn test_mock_dataset_is_valid() {
        assert!(validate_listings(MockProvider::new().all()).is_ok());
    }
}
