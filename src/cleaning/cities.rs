/*! City reconciliation engine.

A row carries one city candidate per resolved tag. Most rows agree with
themselves and collapse to a single value; the rest go through an ordered
tie-break cascade:

1. first candidate that is a substring of the row title,
2. strict plurality vote (only for candidate lists longer than two),
3. exact title lookup in the curated venue table,
4. left ambiguous. Not an error: downstream either tolerates the shape or
   filters such rows out explicitly.
!*/
use std::collections::HashMap;

use itertools::Itertools;
use lazy_static::lazy_static;
use log::debug;

use crate::types::{CityAttribution, ResolvedReview};

lazy_static! {
    /// Curated venue-title → city table, the last-resort disambiguation
    /// source. Never mutated at runtime.
    pub static ref CITY_OVERRIDES: HashMap<String, String> = {
        let mut m = HashMap::new();
        m.insert("Al Masmak Fortress".to_string(), "Riyadh".to_string());
        m.insert("Edge of the World".to_string(), "Riyadh".to_string());
        m.insert("King Fahd Fountain".to_string(), "Jeddah".to_string());
        m.insert("Al Balad Historic District".to_string(), "Jeddah".to_string());
        m.insert("Al Rahma Floating Mosque".to_string(), "Jeddah".to_string());
        m.insert("Quba Mosque".to_string(), "Madinah".to_string());
        m.insert("Jabal Al Noor".to_string(), "Makkah".to_string());
        m.insert("Half Moon Bay".to_string(), "Dammam".to_string());
        m
    };
}

/// Collapse a candidate sequence when it is trivially unanimous.
///
/// A single element, or several identical ones, yield
/// [CityAttribution::Single]; anything else is left as-is for the repair
/// cascade.
pub fn reformat_city(mut cities: Vec<String>) -> CityAttribution {
    if cities.len() == 1 {
        // len checked, pop cannot fail
        return CityAttribution::Single(cities.pop().unwrap());
    }
    if !cities.is_empty() && cities.iter().all_equal() {
        return CityAttribution::Single(cities.pop().unwrap());
    }
    CityAttribution::Ambiguous(cities)
}

/// Apply [reformat_city] table-wide.
pub fn collapse_cities(rows: Vec<ResolvedReview>) -> Vec<ResolvedReview> {
    rows.into_iter()
        .map(|mut row| {
            row.city = match row.city {
                CityAttribution::Ambiguous(cities) => reformat_city(cities),
                single => single,
            };
            row
        })
        .collect()
}

/// Indices of rows whose city is still a multi-value sequence after the
/// table-wide collapse.
pub fn find_ambiguous_rows(rows: &[ResolvedReview]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.city.is_ambiguous())
        .map(|(idx, _)| idx)
        .collect()
}

/// Run the tie-break cascade over the flagged rows.
///
/// Expressed as a pure corrections-map application: only flagged indices
/// may change, every other row keeps its value and position.
pub fn fix_incorrect_cities(
    rows: Vec<ResolvedReview>,
    ambiguous: &[usize],
    overrides: &HashMap<String, String>,
) -> Vec<ResolvedReview> {
    let mut corrections: HashMap<usize, String> = HashMap::new();
    for &idx in ambiguous {
        let row = &rows[idx];
        if let Some(city) = resolve_ambiguous(row.city.candidates(), &row.title, overrides) {
            corrections.insert(idx, city);
        }
    }
    debug!(
        "city repair: {} of {} ambiguous rows resolved",
        corrections.len(),
        ambiguous.len()
    );
    apply_corrections(rows, corrections)
}

fn apply_corrections(
    rows: Vec<ResolvedReview>,
    mut corrections: HashMap<usize, String>,
) -> Vec<ResolvedReview> {
    rows.into_iter()
        .enumerate()
        .map(|(idx, mut row)| {
            if let Some(city) = corrections.remove(&idx) {
                row.city = CityAttribution::Single(city);
            }
            row
        })
        .collect()
}

/// The cascade itself. First rule that yields a value wins.
fn resolve_ambiguous(
    candidates: &[String],
    title: &str,
    overrides: &HashMap<String, String>,
) -> Option<String> {
    // 1. candidate named in the title, scanned in candidate order
    if let Some(city) = candidates.iter().find(|city| title.contains(city.as_str())) {
        return Some(city.clone());
    }

    // 2. plurality vote; a 2-element list can never have a strict majority
    if candidates.len() > 2 {
        if let Some(city) = strict_mode(candidates) {
            return Some(city);
        }
    }

    // 3. curated venue lookup
    overrides.get(title).cloned()
}

/// The unique most-frequent value, or [None] when the maximum count is tied
/// across two or more distinct values.
fn strict_mode(candidates: &[String]) -> Option<String> {
    let counts = candidates.iter().counts();
    let max = counts.values().copied().max()?;
    let mut at_max = counts.iter().filter(|(_, &count)| count == max);
    let (city, _) = at_max.next()?;
    if at_max.next().is_some() {
        return None;
    }
    Some((*city).clone())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{
        collapse_cities, find_ambiguous_rows, fix_incorrect_cities, reformat_city, CITY_OVERRIDES,
    };
    use crate::cleaning::schema::parse_timestamp;
    use crate::types::{CityAttribution, ResolvedReview, TagAttributes};

    fn gen_row(id: &str, title: &str, cities: &[&str]) -> ResolvedReview {
        let transformed_tags: Vec<TagAttributes> = cities
            .iter()
            .map(|city| TagAttributes {
                location_type: "Restaurant".to_string(),
                city: city.to_string(),
            })
            .collect();

        ResolvedReview {
            id: id.to_string(),
            date: parse_timestamp("2022-03-14T09:26:53+0300").unwrap(),
            sentiments: cities.iter().map(|_| "positive".to_string()).collect(),
            normalized_rating: 4.0,
            raw_rating: 8.0,
            title: title.to_string(),
            content: "c".to_string(),
            language: "eng".to_string(),
            location_types: transformed_tags
                .iter()
                .map(|t| t.location_type.clone())
                .collect(),
            city: CityAttribution::Ambiguous(cities.iter().map(|s| s.to_string()).collect()),
            transformed_tags,
        }
    }

    fn cities(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reformat_single() {
        assert_eq!(
            reformat_city(cities(&["Riyadh"])),
            CityAttribution::Single("Riyadh".to_string())
        );
    }

    #[test]
    fn test_reformat_unanimous() {
        assert_eq!(
            reformat_city(cities(&["Riyadh", "Riyadh", "Riyadh"])),
            CityAttribution::Single("Riyadh".to_string())
        );
    }

    #[test]
    fn test_reformat_keeps_ambiguous() {
        assert_eq!(
            reformat_city(cities(&["Riyadh", "Jeddah"])),
            CityAttribution::Ambiguous(cities(&["Riyadh", "Jeddah"]))
        );
    }

    #[test]
    fn test_find_ambiguous_rows() {
        let rows = collapse_cities(vec![
            gen_row("r0", "t", &["Riyadh"]),
            gen_row("r1", "t", &["Riyadh", "Jeddah"]),
            gen_row("r2", "t", &["Jeddah", "Jeddah"]),
            gen_row("r3", "t", &["Dammam", "Riyadh"]),
        ]);
        assert_eq!(find_ambiguous_rows(&rows), vec![1, 3]);
    }

    #[test]
    fn test_title_substring_precedence() {
        // must pick the title city regardless of candidate order
        for candidates in [&["Riyadh", "Jeddah"], &["Jeddah", "Riyadh"]] {
            let rows = vec![gen_row("r0", "Visit to Jeddah Park", candidates)];
            let fixed = fix_incorrect_cities(rows, &[0], &CITY_OVERRIDES);
            assert_eq!(
                fixed[0].city,
                CityAttribution::Single("Jeddah".to_string())
            );
        }
    }

    #[test]
    fn test_plurality_majority_resolves() {
        let rows = vec![gen_row("r0", "no city here", &["A", "A", "A", "B"])];
        let fixed = fix_incorrect_cities(rows, &[0], &CITY_OVERRIDES);
        assert_eq!(fixed[0].city, CityAttribution::Single("A".to_string()));
    }

    #[test]
    fn test_plurality_tie_stays_ambiguous() {
        let rows = vec![gen_row("r0", "no city here", &["A", "A", "B", "B"])];
        let fixed = fix_incorrect_cities(rows, &[0], &CITY_OVERRIDES);
        assert_eq!(
            fixed[0].city,
            CityAttribution::Ambiguous(cities(&["A", "A", "B", "B"]))
        );
    }

    #[test]
    fn test_two_candidates_skip_the_vote() {
        // a bare majority needs more than two candidates
        let rows = vec![gen_row("r0", "no city here", &["A", "B"])];
        let fixed = fix_incorrect_cities(rows, &[0], &CITY_OVERRIDES);
        assert!(fixed[0].city.is_ambiguous());
    }

    #[test]
    fn test_override_lookup_is_last() {
        let mut overrides = HashMap::new();
        overrides.insert("Corniche".to_string(), "Jeddah".to_string());

        let rows = vec![gen_row("r0", "Corniche", &["Riyadh", "Dammam"])];
        let fixed = fix_incorrect_cities(rows, &[0], &overrides);
        assert_eq!(fixed[0].city, CityAttribution::Single("Jeddah".to_string()));
    }

    #[test]
    fn test_unflagged_rows_untouched() {
        let rows = vec![
            gen_row("r0", "Visit to Jeddah Park", &["Riyadh", "Jeddah"]),
            gen_row("r1", "Visit to Jeddah Park", &["Riyadh", "Jeddah"]),
        ];
        let fixed = fix_incorrect_cities(rows, &[1], &CITY_OVERRIDES);
        assert!(fixed[0].city.is_ambiguous());
        assert_eq!(fixed[1].city, CityAttribution::Single("Jeddah".to_string()));
    }
}
