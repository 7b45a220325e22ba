//! Filter and sort pipeline.
//!
//! Pure functions over a borrowed catalog. The catalog is never mutated and
//! no ride is fabricated: the output is always a subsequence of the input,
//! reordered only by the selected sort key.

use std::cmp::Ordering;

use rideshare_core::{Ride, SearchFilters, SortBy};

/// Case-insensitive substring match; an empty needle matches everything.
fn city_matches(city: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    city.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether `ride` satisfies every active predicate in `filters`.
pub fn matches_filters(ride: &Ride, filters: &SearchFilters) -> bool {
    city_matches(&ride.from.city, &filters.from)
        && city_matches(&ride.to.city, &filters.to)
        && (filters.date.is_empty() || ride.date == filters.date)
        && (filters.seats == 0 || ride.seats_available >= filters.seats)
        && filters.price_range.contains(ride.price_per_seat)
        && filters.vehicle_type.matches(ride.vehicle_type)
        && (!filters.verified_only || ride.driver.verified)
}

/// Ordering for `sort_by`. Ties compare equal so the stable sort keeps
/// catalog order.
pub fn compare_rides(a: &Ride, b: &Ride, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Price => a.price_per_seat.total_cmp(&b.price_per_seat),
        SortBy::Time => a.time.cmp(&b.time),
        SortBy::Rating => b.driver.rating.total_cmp(&a.driver.rating),
    }
}

/// Filter `catalog` by `filters` and stable-sort by `filters.sort_by`.
pub fn filter_and_sort(catalog: &[Ride], filters: &SearchFilters) -> Vec<Ride> {
    let mut results: Vec<Ride> = catalog
        .iter()
        .filter(|ride| matches_filters(ride, filters))
        .cloned()
        .collect();
    results.sort_by(|a, b| compare_rides(a, b, filters.sort_by));
    tracing::debug!(
        "Filtered {} rides down to {} (sort: {:?})",
        catalog.len(),
        results.len(),
        filters.sort_by
    );
    results
}
