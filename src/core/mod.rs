pub mod criteria;
pub mod listing;
pub mod ranked_result;
pub mod search_response;

pub use criteria::{AccommodationCriteria, FilterCriteria, ItemCriteria, Predicate, TransportCriteria};
pub use listing::{
    validate_listings, AccommodationDetails, Category, ItemDetails, Listing, ListingDetails,
    TransportDetails,
};
pub use ranked_result::{ListingSummary, RankedResult, ReasonTag};
pub use search_response::SearchResponse;
