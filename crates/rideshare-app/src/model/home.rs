//! Home screen: search form, popular routes and featured rides.

use rideshare_core::{Ride, SearchConfig};
use rideshare_engine::mock::{popular_routes, PopularRoute};
use rideshare_engine::RideQueryEngine;

use super::search::{SearchForm, SearchQuery};

/// Rides shown under "Available Rides".
pub const FEATURED_RIDES: usize = 4;

pub struct HomeScreen {
    pub form: SearchForm,
    pub popular_routes: Vec<PopularRoute>,
    pub featured: Vec<Ride>,
}

impl HomeScreen {
    pub fn new(engine: &RideQueryEngine, config: &SearchConfig) -> Self {
        let mut featured = engine.catalog().snapshot();
        featured.truncate(FEATURED_RIDES);
        Self {
            form: SearchForm::new(&SearchQuery::default(), config),
            popular_routes: popular_routes(),
            featured,
        }
    }
}

/// Query opened by a popular route card.
pub fn route_query(route: &PopularRoute) -> SearchQuery {
    SearchQuery {
        from: Some(route.from.to_string()),
        to: Some(route.to.to_string()),
        ..Default::default()
    }
}

/// "120 rides/week"
pub fn route_frequency(route: &PopularRoute) -> String {
    format!("{} rides/week", route.rides_per_week)
}
