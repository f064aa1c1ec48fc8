//! Fixed price/rating heuristic and the reason-tag thresholds.

use crate::core::{Listing, ReasonTag};

/// Weight applied to the average rating
pub const RATING_WEIGHT: f64 = 2.0;

/// Every this many units of price costs one score point
pub const PRICE_DIVISOR: f64 = 100.0;

/// Absolute rating floor for "High Rating"
pub const HIGH_RATING_FLOOR: f64 = 4.5;

/// A rating within 1% of the best rating in scope counts as top rated
pub const RATING_PROXIMITY: f64 = 0.99;

/// A price within 1% of the cheapest price in scope counts as cheap
pub const PRICE_PROXIMITY: f64 = 1.01;

/// Score a listing. Higher is better.
pub fn score(listing: &Listing) -> f64 {
    listing.average_rating * RATING_WEIGHT - listing.base_price / PRICE_DIVISOR
}

/// A listing paired with its score
#[derive(Debug, Clone, Copy)]
pub struct ScoredListing<'a> {
    pub listing: &'a Listing,
    pub score: f64,
}

impl<'a> ScoredListing<'a> {
    pub fn new(listing: &'a Listing) -> Self {
        Self {
            listing,
            score: score(listing),
        }
    }
}

/// Best rating and lowest price over the scope a tag is judged against.
///
/// The scope is the candidate set for a best match and the whole category
/// collection for suggestions, recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagScope {
    pub max_rating: f64,
    pub min_price: f64,
}

impl TagScope {
    pub fn over<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Self {
        listings.into_iter().fold(
            Self {
                max_rating: f64::NEG_INFINITY,
                min_price: f64::INFINITY,
            },
            |scope, listing| Self {
                max_rating: scope.max_rating.max(listing.average_rating),
                min_price: scope.min_price.min(listing.base_price),
            },
        )
    }

    /// Pick exactly one tag: High Rating, then Cheap, then `fallback`.
    pub fn tag(&self, listing: &Listing, fallback: ReasonTag) -> ReasonTag {
        let rating = listing.average_rating;
        if rating >= HIGH_RATING_FLOOR && rating >= RATING_PROXIMITY * self.max_rating {
            ReasonTag::HighRating
        } else if listing.base_price <= self.min_price * PRICE_PROXIMITY {
            ReasonTag::Cheap
        } else {
            fallback
        }
    }
}
