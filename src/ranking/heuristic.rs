
use crate::core::{FilterCriteria, Listing, ListingSummary, RankedResult, ReasonTag};
use crate::ranking::scoring::{score, ScoredListing, TagScope};
use crate::ranking::Ranker;

/// Maximum number of fallback suggestions
pub const MAX_SUGGESTIONS: usize = 3;

/// Price/rating ranker shared by every category specialist
pub struct HeuristicRanker;

impl HeuristicRanker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for HeuristicRanker {
    fn rank(&self, listings: &[Listing], criteria: &FilterCriteria) -> RankedResult {
        let candidates = filter_candidates(listings, criteria);

        tracing::debug!(
            "{} criteria kept {}/{} listings",
            criteria.category(),
            candidates.len(),
            listings.len()
        );

        match best_match(&candidates) {
            Some(best) => RankedResult::Match(best),
            None => RankedResult::NoMatch {
                error: criteria.category().no_match_message(),
                suggestions: suggest(listings),
            },
        }
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// Listings that satisfy every criterion that is set, in input order
pub fn filter_candidates<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    let predicates = criteria.predicates();
    listings
        .iter()
        .filter(|listing| predicates.iter().all(|p| p.matches(listing)))
        .collect()
}

/// Highest scoring candidate; on equal scores the first one encountered wins.
pub fn select_best<'a>(candidates: &[&'a Listing]) -> Option<&'a Listing> {
    let mut best = None;
    let mut best_score = f64::NEG_INFINITY;

    for &listing in candidates {
        let listing_score = score(listing);
        if listing_score > best_score {
            best_score = listing_score;
            best = Some(listing);
        }
    }

    best
}

/// Best candidate tagged against the candidate set, or `None` when empty
pub fn best_match(candidates: &[&Listing]) -> Option<ListingSummary> {
    // A candidate whose score cannot beat -inf still gets returned
    let best = select_best(candidates).or_else(|| candidates.first().copied())?;
    let scope = TagScope::over(candidates.iter().copied());

    Some(ListingSummary::from_listing(best, scope.tag(best, ReasonTag::BestMatch)))
}

/// Top scored listings of the whole collection, tagged against that collection.
///
/// Ordered by descending score, then ascending price; the sort is stable so
/// remaining ties keep collection order.
pub fn suggest(listings: &[Listing]) -> Vec<ListingSummary> {
    let mut scored: Vec<ScoredListing> = listings.iter().map(ScoredListing::new).collect();
    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.listing.base_price.total_cmp(&b.listing.base_price))
    });

    let scope = TagScope::over(listings);

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|s| ListingSummary::from_listing(s.listing, scope.tag(s.listing, ReasonTag::Related)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ItemCriteria, ItemDetails, ListingDetails};

    fn item(id: &str, price: f64, rating: f64) -> Listing {
        Listing::new(
            id,
            format!("Item {}", id),
            price,
            "Kuala Lumpur",
            rating,
            ListingDetails::Item(ItemDetails {
                item_category: "Tools".to_string(),
            }),
        )
    }

    fn items(criteria: ItemCriteria) -> FilterCriteria {
        FilterCriteria::Item(criteria)
    }

    #[test]
    fn test_first_encountered_wins_ties() {
        // both score 8.0
        let listings = vec![item("a", 100.0, 4.5), item("b", 0.0, 4.0)];
        let refs: Vec<&Listing> = listings.iter().collect();
        assert_eq!(select_best(&refs).unwrap().listing_id, "a");

        let reversed: Vec<&Listing> = listings.iter().rev().collect();
        assert_eq!(select_best(&reversed).unwrap().listing_id, "b");
    }

    #[test]
    fn test_best_match_falls_back_to_best_match_tag() {
        // scores 5.9, 8.0, 8.3: c wins but is neither top rated nor cheapest
        let listings = vec![item("a", 10.0, 3.0), item("b", 60.0, 4.3), item("c", 50.0, 4.4)];
        let result = HeuristicRanker::new().rank(&listings, &items(ItemCriteria::default()));

        let best = result.best().unwrap();
        assert_eq!(best.listing_id, "c");
        assert_eq!(best.reason, ReasonTag::BestMatch);
    }

    #[test]
    fn test_cheap_winner() {
        let listings = vec![item("a", 20.0, 4.3), item("b", 60.0, 4.8), item("c", 300.0, 4.9)];
        let result = HeuristicRanker::new().rank(
            &listings,
            &items(ItemCriteria {
                max_price: Some(30.0),
                ..Default::default()
            }),
        );
        let best = result.best().unwrap();
        assert_eq!(best.listing_id, "a");
        // sole candidate, under the rating floor
        assert_eq!(best.reason, ReasonTag::Cheap);
    }

    #[test]
    fn test_suggestions_sorted_by_score_then_price() {
        let listings = vec![
            item("a", 100.0, 4.5), // 8.0
            item("b", 0.0, 4.0),   // 8.0, cheaper
            item("c", 10.0, 4.9),  // 9.7
            item("d", 500.0, 3.0), // 1.0
        ];
        let suggestions = suggest(&listings);
        let ids: Vec<&str> = suggestions.iter().map(|s| s.listing_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);

        assert_eq!(suggestions[0].reason, ReasonTag::HighRating);
        assert_eq!(suggestions[1].reason, ReasonTag::Cheap);
        assert_eq!(suggestions[2].reason, ReasonTag::Related);
    }

    #[test]
    fn test_suggest_tolerates_nan_ratings() {
        let listings: Vec<Listing> = (0..40)
            .map(|i| {
                let rating = if i % 3 == 0 { f64::NAN } else { 3.0 + (i % 20) as f64 / 10.0 };
                item(&format!("i{}", i), 10.0 + i as f64, rating)
            })
            .collect();

        let suggestions = suggest(&listings);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);

        let result = HeuristicRanker::new().rank(
            &listings,
            &items(ItemCriteria {
                item_category: Some("Furniture".to_string()),
                ..Default::default()
            }),
        );
        assert_eq!(result.suggestions().len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_no_match_uses_whole_collection() {
        let listings = vec![item("a", 20.0, 4.3), item("b", 60.0, 4.8)];
        let result = HeuristicRanker::new().rank(
            &listings,
            &items(ItemCriteria {
                item_category: Some("Furniture".to_string()),
                ..Default::default()
            }),
        );

        match result {
            RankedResult::NoMatch { error, suggestions } => {
                assert_eq!(error, "No matching item listings found.");
                assert_eq!(suggestions.len(), 2);
                assert_eq!(suggestions[0].listing_id, "b");
            }
            other => panic!("expected no match, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_collection_gives_empty_suggestions() {
        let result = HeuristicRanker::new().rank(&[], &items(ItemCriteria::default()));
        assert!(!result.is_match());
        assert!(result.suggestions().is_empty());
    }

    #[test]
    fn test_negative_ceiling_is_an_empty_candidate_set() {
        let listings = vec![item("a", 0.0, 4.0)];
        let result = HeuristicRanker::new().rank(
            &listings,
            &items(ItemCriteria {
                max_price: Some(-1.0),
                ..Default::default()
            }),
        );
        assert!(!result.is_match());
        assert_eq!(result.suggestions().len(), 1);
    }
}
