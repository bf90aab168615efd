//! Aggregate statistics derived per search request.
//!
//! Stats are recomputed from scratch for every request; nothing here is
//! cached or shared between requests.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Activity, CityMeta};

/// Aggregated statistics returned alongside the filtered results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchStats {
    /// One entry per distinct city in the catalog, first-seen order
    pub cities: Vec<CityStat>,
    /// True when no city filter is effectively in force
    pub all_cities: bool,
    pub price: PriceStats,
    /// Descriptive region label for the dataset (e.g. "Mexico")
    pub location: String,
    pub result_count: u32,
}

/// Per-city selection state for the city chips in the frontend.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CityStat {
    pub name: String,
    pub img: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PriceStats {
    pub graph: PriceGraph,
    pub average: PriceBounds,
}

/// Smoothed price-distribution curve, ready for SVG rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PriceGraph {
    pub path_data: String,
    pub width: f64,
    pub height: f64,
}

/// Price bounds over the filtered result set.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl SearchStats {
    /// Aggregate stats for one request.
    ///
    /// City entries are derived from the full catalog so the city list stays
    /// stable across queries; price bounds and the result count come from
    /// the filtered results.
    pub fn compute(
        all_activities: &[Activity],
        city_meta: &[CityMeta],
        results: &[Activity],
        selected_cities: &[String],
        graph: PriceGraph,
        location: &str,
    ) -> Self {
        let cities = build_city_stats(all_activities, city_meta, selected_cities);

        // Escape hatch: an empty filter, or a filter that selected nothing
        // we know about, both mean "show all cities".
        let all_cities = selected_cities.is_empty() || !cities.iter().any(|c| c.selected);

        Self {
            cities,
            all_cities,
            price: PriceStats {
                graph,
                average: price_bounds(results),
            },
            location: location.to_string(),
            result_count: results.len() as u32,
        }
    }
}

/// Build per-city selection stats from the activity set.
///
/// De-duplicated by name in first-seen order. A city's `selected` flag is
/// OR-accumulated across duplicate rows: once true it stays true.
pub fn build_city_stats(
    activities: &[Activity],
    city_meta: &[CityMeta],
    selected_cities: &[String],
) -> Vec<CityStat> {
    let mut stats: Vec<CityStat> = Vec::new();

    for activity in activities {
        let name = &activity.location.city;
        let selected = selected_cities.iter().any(|c| c == name);

        match stats.iter_mut().find(|s| &s.name == name) {
            Some(existing) => existing.selected = existing.selected || selected,
            None => stats.push(CityStat {
                name: name.clone(),
                img: city_image(city_meta, name),
                selected,
            }),
        }
    }

    stats
}

/// Look up a city's image, defaulting to empty when there is no metadata.
fn city_image(city_meta: &[CityMeta], name: &str) -> String {
    city_meta
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.img.clone())
        .unwrap_or_default()
}

/// True min/max over the filtered prices; `{0, 0}` for an empty result set.
pub fn price_bounds(results: &[Activity]) -> PriceBounds {
    let mut prices = results.iter().map(|a| a.price.value);

    match prices.next() {
        None => PriceBounds { min: 0.0, max: 0.0 },
        Some(first) => {
            let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
            PriceBounds { min, max }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Price, Reviews};

    fn make_activity(id: &str, city: &str, price: f64) -> Activity {
        Activity {
            id: id.to_string(),
            name: format!("Test Activity {}", id),
            price: Price {
                value: price,
                currency: "USD".to_string(),
            },
            location: Location {
                city: city.to_string(),
                lat: 0.0,
                lng: 0.0,
            },
            reviews: Reviews {
                average_rating: None,
                count: 0,
            },
            flags: vec![],
            types: vec![],
        }
    }

    fn test_graph() -> PriceGraph {
        PriceGraph {
            path_data: "m0,100".to_string(),
            width: 800.0,
            height: 100.0,
        }
    }

    #[test]
    fn test_city_stats_dedup_first_seen_order() {
        let activities = vec![
            make_activity("a", "La Paz", 10.0),
            make_activity("b", "Oaxaca", 20.0),
            make_activity("c", "La Paz", 30.0),
        ];

        let stats = build_city_stats(&activities, &[], &[]);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].name, "La Paz");
        assert_eq!(stats[1].name, "Oaxaca");
    }

    #[test]
    fn test_selection_stays_true_across_duplicates() {
        let activities = vec![
            make_activity("a", "La Paz", 10.0),
            make_activity("b", "La Paz", 20.0),
            make_activity("c", "La Paz", 30.0),
        ];
        let selected = vec!["La Paz".to_string()];

        let stats = build_city_stats(&activities, &[], &selected);

        assert_eq!(stats.len(), 1);
        assert!(stats[0].selected);
    }

    #[test]
    fn test_city_image_enrichment_and_default() {
        let activities = vec![
            make_activity("a", "La Paz", 10.0),
            make_activity("b", "Oaxaca", 20.0),
        ];
        let meta = vec![CityMeta {
            name: "La Paz".to_string(),
            img: "/img/cities/la-paz.jpg".to_string(),
        }];

        let stats = build_city_stats(&activities, &meta, &[]);

        assert_eq!(stats[0].img, "/img/cities/la-paz.jpg");
        assert_eq!(stats[1].img, "");
    }

    #[test]
    fn test_all_cities_without_filter() {
        let activities = vec![make_activity("a", "La Paz", 10.0)];
        let stats = SearchStats::compute(&activities, &[], &activities, &[], test_graph(), "Mexico");

        assert!(stats.all_cities);
    }

    #[test]
    fn test_all_cities_when_selection_matches_nothing() {
        let activities = vec![make_activity("a", "La Paz", 10.0)];
        let selected = vec!["Atlantis".to_string()];

        let stats = SearchStats::compute(
            &activities,
            &[],
            &activities,
            &selected,
            test_graph(),
            "Mexico",
        );

        // Nothing we know about was selected, so fall back to "show all".
        assert!(stats.all_cities);
    }

    #[test]
    fn test_all_cities_false_with_matching_selection() {
        let activities = vec![
            make_activity("a", "La Paz", 10.0),
            make_activity("b", "Oaxaca", 20.0),
        ];
        let selected = vec!["Oaxaca".to_string()];

        let stats = SearchStats::compute(
            &activities,
            &[],
            &activities,
            &selected,
            test_graph(),
            "Mexico",
        );

        assert!(!stats.all_cities);
        assert!(stats.cities.iter().any(|c| c.name == "Oaxaca" && c.selected));
    }

    #[test]
    fn test_price_bounds() {
        let results = vec![
            make_activity("a", "La Paz", 40.0),
            make_activity("b", "Oaxaca", 20.0),
            make_activity("c", "Puebla", 100.0),
        ];

        let bounds = price_bounds(&results);

        assert_eq!(bounds.min, 20.0);
        assert_eq!(bounds.max, 100.0);
    }

    #[test]
    fn test_price_bounds_empty_results() {
        let bounds = price_bounds(&[]);

        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 0.0);
    }

    #[test]
    fn test_result_count_tracks_filtered_set() {
        let all = vec![
            make_activity("a", "La Paz", 10.0),
            make_activity("b", "Oaxaca", 20.0),
        ];
        let filtered = vec![all[0].clone()];

        let stats = SearchStats::compute(&all, &[], &filtered, &[], test_graph(), "Mexico");

        assert_eq!(stats.result_count, 1);
        assert_eq!(stats.cities.len(), 2); // city list still covers the catalog
    }
}
