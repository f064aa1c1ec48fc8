use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{FilterEngineError, Result};

/// Listing category handled by one specialist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Accommodation,
    Item,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Transport, Category::Accommodation, Category::Item];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Accommodation => "accommodation",
            Self::Item => "item",
        }
    }

    /// Message returned when no listing of this category survives filtering
    pub fn no_match_message(self) -> String {
        format!("No matching {} listings found.", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FilterEngineError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "transport" | "vehicle" => Ok(Self::Transport),
            "accommodation" | "lodging" => Ok(Self::Accommodation),
            "item" | "items" => Ok(Self::Item),
            other => Err(FilterEngineError::UnknownCategory(other.to_string())),
        }
    }
}

/// A vehicle available for rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportDetails {
    pub vehicle_type: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// A place to stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationDetails {
    pub property_type: String,
    pub num_guests: u32,
}

/// A general item available for rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetails {
    pub item_category: String,
}

/// Category-specific attributes of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum ListingDetails {
    Transport(TransportDetails),
    Accommodation(AccommodationDetails),
    Item(ItemDetails),
}

impl ListingDetails {
    pub fn category(&self) -> Category {
        match self {
            Self::Transport(_) => Category::Transport,
            Self::Accommodation(_) => Category::Accommodation,
            Self::Item(_) => Category::Item,
        }
    }
}

/// A rentable offering with shared base attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique within its category collection
    pub listing_id: String,

    #[serde(default)]
    pub owner_id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Rental price, never negative
    pub base_price: f64,

    /// Free-text city or area
    pub location: String,

    /// Conventionally 0.0 - 5.0
    pub average_rating: f64,

    #[serde(flatten)]
    pub details: ListingDetails,
}

impl Listing {
    /// Create a new Listing with required fields
    pub fn new(
        listing_id: impl Into<String>,
        title: impl Into<String>,
        base_price: f64,
        location: impl Into<String>,
        average_rating: f64,
        details: ListingDetails,
    ) -> Self {
        Self {
            listing_id: listing_id.into(),
            owner_id: String::new(),
            title: title.into(),
            description: String::new(),
            base_price,
            location: location.into(),
            average_rating,
            details,
        }
    }

    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(&self) -> Category {
        self.details.category()
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        format!("{} [{}] ({})", self.title, self.listing_id, self.location)
    }
}

/// Check the dataset invariants a collection must hold before ranking.
///
/// Ids must be unique per category, prices finite and non-negative,
/// ratings finite.
pub fn validate_listings(listings: &[Listing]) -> Result<()> {
    let mut seen = HashSet::new();

    for listing in listings {
        let invalid = |message: &str| FilterEngineError::InvalidListing {
            listing_id: listing.listing_id.clone(),
            message: message.to_string(),
        };

        if !seen.insert((listing.category(), listing.listing_id.as_str())) {
            return Err(invalid("duplicate listing id within category"));
        }
        if !listing.base_price.is_finite() || listing.base_price < 0.0 {
            return Err(invalid("base price must be a non-negative number"));
        }
        if !listing.average_rating.is_finite() {
            return Err(invalid("average rating must be a finite number"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drill() -> Listing {
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
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Transport".parse::<Category>().unwrap(), Category::Transport);
        assert_eq!(" item ".parse::<Category>().unwrap(), Category::Item);
        assert!(matches!(
            "boats".parse::<Category>(),
            Err(FilterEngineError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_no_match_message() {
        assert_eq!(
            Category::Accommodation.no_match_message(),
            "No matching accommodation listings found."
        );
    }

    #[test]
    fn test_listing_json_shape() {
        let listing = drill().with_owner("U790");
        let value = serde_json::to_value(&listing).unwrap();

        assert_eq!(value["listingId"], "I002");
        assert_eq!(value["ownerId"], "U790");
        assert_eq!(value["basePrice"], 20.0);
        assert_eq!(value["category"], "item");
        assert_eq!(value["itemCategory"], "Tools");

        let back: Listing = serde_json::from_value(value).unwrap();
        assert_eq!(back, listing);
    }

    #[test]
    fn test_validate_rejects_duplicates_and_bad_prices() {
        assert!(validate_listings(&[drill()]).is_ok());

        let err = validate_listings(&[drill(), drill()]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));

        let mut negative = drill();
        negative.base_price = -1.0;
        assert!(validate_listings(&[negative]).is_err());

        let mut nan_rating = drill();
        nan_rating.average_rating = f64::NAN;
        assert!(validate_listings(&[nan_rating]).is_err());
    }

    #[test]
    fn test_same_id_in_other_category_is_allowed() {
        let car = Listing::new(
            "I002",
            "Odd Id Car",
            10.0,
            "Penang",
            4.0,
            ListingDetails::Transport(TransportDetails {
                vehicle_type: "car".to_string(),
                make: "Perodua".to_string(),
                model: "Myvi".to_string(),
                year: 2020,
            }),
        );
        assert!(validate_listings(&[drill(), car]).is_ok());
    }
}
