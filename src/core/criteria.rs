use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::listing::{Category, Listing, ListingDetails};

/// Transport search parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportCriteria {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Accommodation search parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccommodationCriteria {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub property_type: Option<String>,
    /// Minimum number of guests the place must accommodate. Any integer is
    /// accepted; values at or below a listing's capacity simply keep it.
    #[serde(default)]
    pub num_guests: Option<i64>,
}

/// Item search parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCriteria {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub item_category: Option<String>,
}

/// Sparse, category-specific filter set. Unset fields impose no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum FilterCriteria {
    Transport(TransportCriteria),
    Accommodation(AccommodationCriteria),
    Item(ItemCriteria),
}

impl FilterCriteria {
    /// Criteria with no constraint for the given category
    pub fn unconstrained(category: Category) -> Self {
        match category {
            Category::Transport => Self::Transport(TransportCriteria::default()),
            Category::Accommodation => Self::Accommodation(AccommodationCriteria::default()),
            Category::Item => Self::Item(ItemCriteria::default()),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Transport(_) => Category::Transport,
            Self::Accommodation(_) => Category::Accommodation,
            Self::Item(_) => Category::Item,
        }
    }

    /// Build the named predicates for every criterion that is set.
    ///
    /// Empty text, a year of 0 and a guest count of 0 count as unset.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        match self {
            Self::Transport(c) => {
                push_common(&mut predicates, c.location.as_deref(), c.max_price);
                if let Some(needle) = non_empty(c.vehicle_type.as_deref()) {
                    predicates.push(Predicate::contains("vehicle_type", needle, |l| {
                        match &l.details {
                            ListingDetails::Transport(t) => Some(&t.vehicle_type),
                            _ => None,
                        }
                    }));
                }
                if let Some(needle) = non_empty(c.make.as_deref()) {
                    predicates.push(Predicate::contains("make", needle, |l| match &l.details {
                        ListingDetails::Transport(t) => Some(&t.make),
                        _ => None,
                    }));
                }
                if let Some(needle) = non_empty(c.model.as_deref()) {
                    predicates.push(Predicate::contains("model", needle, |l| match &l.details {
                        ListingDetails::Transport(t) => Some(&t.model),
                        _ => None,
                    }));
                }
                if let Some(year) = c.year.filter(|y| *y != 0) {
                    predicates.push(Predicate::new("year", move |l| {
                        matches!(&l.details, ListingDetails::Transport(t) if t.year == year)
                    }));
                }
            }
            Self::Accommodation(c) => {
                push_common(&mut predicates, c.location.as_deref(), c.max_price);
                if let Some(needle) = non_empty(c.property_type.as_deref()) {
                    predicates.push(Predicate::contains("property_type", needle, |l| {
                        match &l.details {
                            ListingDetails::Accommodation(a) => Some(&a.property_type),
                            _ => None,
                        }
                    }));
                }
                if let Some(guests) = c.num_guests.filter(|g| *g != 0) {
                    predicates.push(Predicate::new("num_guests", move |l| {
                        matches!(&l.details, ListingDetails::Accommodation(a) if i64::from(a.num_guests) >= guests)
                    }));
                }
            }
            Self::Item(c) => {
                push_common(&mut predicates, c.location.as_deref(), c.max_price);
                if let Some(needle) = non_empty(c.item_category.as_deref()) {
                    predicates.push(Predicate::contains("item_category", needle, |l| {
                        match &l.details {
                            ListingDetails::Item(i) => Some(&i.item_category),
                            _ => None,
                        }
                    }));
                }
            }
        }

        predicates
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn push_common(predicates: &mut Vec<Predicate>, location: Option<&str>, max_price: Option<f64>) {
    if let Some(needle) = non_empty(location) {
        predicates.push(Predicate::contains("location", needle, |l| Some(&l.location)));
    }
    // A ceiling of zero or below is still a constraint
    if let Some(ceiling) = max_price {
        predicates.push(Predicate::new("max_price", move |l| l.base_price <= ceiling));
    }
}

type PredicateFn = Box<dyn Fn(&Listing) -> bool + Send + Sync>;

/// A named test over a single listing
pub struct Predicate {
    name: &'static str,
    test: PredicateFn,
}

impl Predicate {
    pub fn new(name: &'static str, test: impl Fn(&Listing) -> bool + Send + Sync + 'static) -> Self {
        Self {
            name,
            test: Box::new(test),
        }
    }

    /// Case-insensitive substring match against a text field.
    /// Listings without the field (other categories) never match.
    pub fn contains(
        name: &'static str,
        needle: &str,
        field: fn(&Listing) -> Option<&String>,
    ) -> Self {
        let needle = needle.to_lowercase();
        Self::new(name, move |listing| {
            field(listing)
                .map(|value| value.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        (self.test)(listing)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("name", &self.name).finish()
    }
}
