// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Search pipeline: query normalization, filtering, and sorting.
//!
//! All functions here are pure transformations over borrowed catalog data;
//! per-request state never outlives the request.

use crate::models::Activity;

/// Canonical, normalized search query.
///
/// Empty collections and a zero price bound mean "no restriction" for the
/// corresponding predicate.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Requested city names; empty means no city filter
    pub cities: Vec<String>,
    /// Upper price bound; 0 means unbounded
    pub max_price: f64,
    /// Requested category tags; empty means no type filter
    pub types: Vec<String>,
    /// Free-text needle for name matching; empty means no text filter
    pub free_text: String,
    pub sort: Option<SortKey>,
}

impl SearchQuery {
    /// Normalize raw request parameters into a canonical query.
    ///
    /// `legacy_types` carries values from the deprecated `type` parameter
    /// name; they are appended after the canonical `types` values. A
    /// `max_price` that is absent, unparsable, or non-positive becomes 0
    /// (no bound) rather than an error.
    pub fn normalize(
        cities: Vec<String>,
        max_price: Option<&str>,
        types: Vec<String>,
        legacy_types: Vec<String>,
        free_text: Option<&str>,
        sort: Option<&str>,
    ) -> Self {
        let max_price = max_price
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| *v > 0.0)
            .unwrap_or(0.0);

        let mut merged_types = types;
        merged_types.extend(legacy_types);

        Self {
            cities,
            max_price,
            types: merged_types,
            free_text: free_text.map(str::trim).unwrap_or_default().to_string(),
            sort: sort.and_then(SortKey::parse),
        }
    }
}

/// Sort strategy requested via the `sort` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Descending by review count
    PopularityDesc,
    /// Descending by average rating; unrated records last
    RatingDesc,
    /// Ascending by price
    PriceAsc,
    /// Records flagged "new" first
    AgeAsc,
}

impl SortKey {
    /// Parse a sort key, case-insensitively. Unknown keys are `None`,
    /// which the sort engine treats as identity.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "popularity-desc" => Some(Self::PopularityDesc),
            "rating-desc" => Some(Self::RatingDesc),
            "price-asc" => Some(Self::PriceAsc),
            "age-asc" => Some(Self::AgeAsc),
            _ => None,
        }
    }
}

/// Filter the catalog down to records matching every active predicate.
///
/// Matches keep their relative catalog order; input records are not mutated.
pub fn filter_activities(catalog: &[Activity], query: &SearchQuery) -> Vec<Activity> {
    catalog
        .iter()
        .filter(|activity| matches_query(activity, query))
        .cloned()
        .collect()
}

/// AND across the independent per-field predicates; an inactive filter
/// always passes.
fn matches_query(activity: &Activity, query: &SearchQuery) -> bool {
    if query.max_price > 0.0 && activity.price.value > query.max_price {
        return false;
    }

    if !query.cities.is_empty() && !query.cities.iter().any(|c| *c == activity.location.city) {
        return false;
    }

    if !query.types.is_empty() && !activity.types.iter().any(|t| query.types.contains(t)) {
        return false;
    }

    if !query.free_text.is_empty() {
        let needle = query.free_text.to_lowercase();
        if !activity.name.to_lowercase().contains(&needle) {
            return false;
        }
    }

    true
}

/// Order results in place by the requested strategy.
///
/// `slice::sort_by` is stable, so ties keep their catalog order. All
/// comparators return a signed `Ordering`.
pub fn sort_activities(results: &mut [Activity], sort: Option<SortKey>) {
    let Some(key) = sort else {
        return;
    };

    match key {
        SortKey::PopularityDesc => {
            results.sort_by(|a, b| b.reviews.count.cmp(&a.reviews.count));
        }
        SortKey::RatingDesc => {
            // Missing ratings sort after every rated record
            results.sort_by(|a, b| {
                let ra = a.reviews.average_rating.unwrap_or(f64::NEG_INFINITY);
                let rb = b.reviews.average_rating.unwrap_or(f64::NEG_INFINITY);
                rb.total_cmp(&ra)
            });
        }
        SortKey::PriceAsc => {
            results.sort_by(|a, b| a.price.value.total_cmp(&b.price.value));
        }
        SortKey::AgeAsc => {
            results.sort_by_key(|a| !a.is_new());
        }
    }
}
