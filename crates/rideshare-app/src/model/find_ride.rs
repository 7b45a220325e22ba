//! Find-ride screen: search results plus the filter panel.

use rideshare_core::{PriceRange, Ride, SearchConfig, SearchFilters, SortBy, VehicleFilter};
use rideshare_engine::{ObservableSearch, RideQueryEngine};
use tokio::sync::watch;

use super::search::{SearchForm, SearchQuery};
use crate::format::format_price;

/// State behind the find-ride screen.
///
/// Every panel change goes through the observable session, so the result
/// list is recomputed and broadcast before the method returns.
pub struct FindRideScreen {
    pub form: SearchForm,
    query: SearchQuery,
    search: ObservableSearch,
    config: SearchConfig,
    /// Mobile filter sheet visibility.
    pub show_filters: bool,
}

impl FindRideScreen {
    pub fn new(engine: &RideQueryEngine, query: SearchQuery, config: &SearchConfig) -> Self {
        let search = engine.session(query.to_filters(config));
        Self {
            form: SearchForm::new(&query, config),
            query,
            search,
            config: config.clone(),
            show_filters: false,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Ride>> {
        self.search.subscribe()
    }

    pub fn filters(&self) -> SearchFilters {
        self.search.filters()
    }

    pub fn results(&self) -> Vec<Ride> {
        self.search.results()
    }

    // =========================================================================
    // Filter panel
    // =========================================================================

    pub fn set_sort(&self, sort_by: SortBy) {
        self.search.update(|f| f.sort_by = sort_by);
    }

    /// Set the price bounds, clamped to the slider range and ordered.
    pub fn set_price_range(&self, min: f64, max: f64) {
        let clamp = |v: f64| v.clamp(self.config.price_min, self.config.price_max);
        let (min, max) = (clamp(min.min(max)), clamp(min.max(max)));
        self.search.update(|f| f.price_range = PriceRange::new(min, max));
    }

    pub fn set_vehicle_type(&self, vehicle_type: VehicleFilter) {
        self.search.update(|f| f.vehicle_type = vehicle_type);
    }

    pub fn set_verified_only(&self, verified_only: bool) {
        self.search.update(|f| f.verified_only = verified_only);
    }

    /// Restore price, vehicle and verified filters. Sort and route are kept.
    pub fn reset(&self) {
        let price_range = PriceRange::new(self.config.price_min, self.config.price_max);
        self.search.update(|f| {
            f.price_range = price_range;
            f.vehicle_type = VehicleFilter::All;
            f.verified_only = false;
        });
    }

    /// Re-run the search from the form, as when the compact form is submitted.
    ///
    /// Panel filters and sort survive; route fields come from the form.
    pub fn submit_form(&mut self) {
        self.query = self.form.submit();
        let route = self.query.to_filters(&self.config);
        self.search.update(|f| {
            f.from = route.from;
            f.to = route.to;
            f.date = route.date;
            f.seats = route.seats;
        });
    }

    /// Entries of the "Sort by" dropdown, in display order.
    pub fn sort_options(&self) -> Vec<(SortBy, &'static str)> {
        SortBy::ALL.iter().map(|sort| (*sort, sort.label())).collect()
    }

    /// Vehicle type buttons as `(filter, label, selected)`.
    pub fn vehicle_options(&self) -> Vec<(VehicleFilter, String, bool)> {
        let current = self.search.filters().vehicle_type;
        VehicleFilter::ALL
            .iter()
            .map(|vehicle| (*vehicle, vehicle.to_string(), *vehicle == current))
            .collect()
    }

    // =========================================================================
    // Labels
    // =========================================================================

    /// "N Rides Found".
    pub fn heading(&self) -> String {
        format!("{} Rides Found", self.search.results().len())
    }

    /// "From → To" when both ends were searched.
    pub fn route_caption(&self) -> Option<String> {
        match (self.query.from.as_deref(), self.query.to.as_deref()) {
            (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => {
                Some(format!("{} → {}", from, to))
            }
            _ => None,
        }
    }

    pub fn price_label(&self) -> String {
        let range = self.search.filters().price_range;
        format!(
            "Price Range ({} - {})",
            format_price(range.min),
            format_price(range.max)
        )
    }

    /// Message for an empty result list.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.search.results().is_empty().then_some(
            "No rides found. Try adjusting your search criteria or check back later for new rides.",
        )
    }
}
