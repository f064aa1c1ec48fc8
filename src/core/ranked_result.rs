use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Listing;

/// Why a listing was recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonTag {
    #[serde(rename = "High Rating")]
    HighRating,
    #[serde(rename = "Cheap")]
    Cheap,
    /// Won on score without standing out (best match only)
    #[serde(rename = "Best Match")]
    BestMatch,
    /// Next-best scored fallback (suggestions only)
    #[serde(rename = "Related")]
    Related,
}

impl ReasonTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighRating => "High Rating",
            Self::Cheap => "Cheap",
            Self::BestMatch => "Best Match",
            Self::Related => "Related",
        }
    }
}

impl fmt::Display for ReasonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a recommended listing, shared by best matches and suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    pub listing_id: String,
    pub title: String,
    pub location: String,
    pub base_price: f64,
    pub reason: ReasonTag,
}

impl ListingSummary {
    pub fn from_listing(listing: &Listing, reason: ReasonTag) -> Self {
        Self {
            listing_id: listing.listing_id.clone(),
            title: listing.title.clone(),
            location: listing.location.clone(),
            base_price: listing.base_price,
            reason,
        }
    }

    /// Get display string for logging/UI
    pub fn display(&self) -> String {
        format!("{} - {} - {:.2} ({})", self.title, self.location, self.base_price, self.reason)
    }
}

/// Outcome of ranking one category collection.
///
/// Serializes to the flat shape callers already consume: either the summary
/// fields directly, or `{"error": ..., "suggestions": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RankedResult {
    /// At least one listing satisfied every criterion
    Match(ListingSummary),
    /// Nothing survived filtering; up to three fallbacks from the full collection
    NoMatch {
        error: String,
        suggestions: Vec<ListingSummary>,
    },
}

impl RankedResult {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    pub fn best(&self) -> Option<&ListingSummary> {
        match self {
            Self::Match(summary) => Some(summary),
            Self::NoMatch { .. } => None,
        }
    }

    pub fn suggestions(&self) -> &[ListingSummary] {
        match self {
            Self::Match(_) => &[],
            Self::NoMatch { suggestions, .. } => suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(reason: ReasonTag) -> ListingSummary {
        ListingSummary {
            listing_id: "T002".to_string(),
            title: "Honda City 2019".to_string(),
            location: "Kuala Lumpur".to_string(),
            base_price: 70.0,
            reason,
        }
    }

    #[test]
    fn test_match_serializes_flat() {
        let result = RankedResult::Match(summary(ReasonTag::HighRating));
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["listingId"], "T002");
        assert_eq!(value["basePrice"], 70.0);
        assert_eq!(value["reason"], "High Rating");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_no_match_serializes_error_and_suggestions() {
        let result = RankedResult::NoMatch {
            error: "No matching transport listings found.".to_string(),
            suggestions: vec![summary(ReasonTag::Cheap)],
        };
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["error"], "No matching transport listings found.");
        assert_eq!(value["suggestions"][0]["reason"], "Cheap");
        assert!(!result.is_match());
        assert!(result.best().is_none());
        assert_eq!(result.suggestions().len(), 1);
    }

    #[test]
    fn test_untagged_round_trip_picks_variant() {
        let json = r#"{"error": "No matching item listings found.", "suggestions": []}"#;
        let result: RankedResult = serde_json::from_str(json).unwrap();
        assert!(matches!(result, RankedResult::NoMatch { ref suggestions, .. } if suggestions.is_empty()));
    }
}
