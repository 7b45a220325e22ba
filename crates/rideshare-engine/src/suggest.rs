//! City autocomplete.

use crate::mock::CITIES;

/// Known cities containing `input` (case-insensitive), minus `exclude`.
///
/// `exclude` is compared exactly; it is the city already chosen on the other
/// end of the route.
pub fn city_suggestions(input: &str, exclude: Option<&str>) -> Vec<&'static str> {
    let needle = input.to_lowercase();
    CITIES
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().contains(&needle))
        .filter(|city| exclude != Some(*city))
        .collect()
}
