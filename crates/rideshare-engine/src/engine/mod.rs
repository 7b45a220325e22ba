//! Ride Query Engine
//!
//! The RideQueryEngine answers ride searches over the shared catalog:
//! - Predicate filtering (route, date, seats, price, vehicle, verified)
//! - Single-key stable sorting
//! - Observable search sessions for screens that re-render on change
//!
//! ## Query Flow
//!
//! ```text
//! Filter changes
//!        │
//!        ▼
//! ┌───────────────────┐
//! │ Snapshot catalog  │
//! │ (read lock only)  │
//! └────────┬──────────┘
//!          │
//!          ▼
//! Keep rides matching
//! every active predicate
//!          │
//!          ▼
//! Stable sort by
//! price / time / rating
//!          │
//!          ▼
//! Return (or broadcast)
//! the ordered rides
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use rideshare_core::{Ride, SearchFilters};

use crate::catalog::RideCatalog;

mod observable_search;
mod pipeline;

pub use observable_search::ObservableSearch;
pub use pipeline::{compare_rides, filter_and_sort, matches_filters};

// =============================================================================
// Ride Query Engine
// =============================================================================

/// Runs searches against a shared [`RideCatalog`].
///
/// The engine holds no per-search state; every call is a pure function of
/// the catalog snapshot and the filters.
#[derive(Clone)]
pub struct RideQueryEngine {
    catalog: Arc<RideCatalog>,
}

impl RideQueryEngine {
    pub fn new(catalog: Arc<RideCatalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this engine searches.
    pub fn catalog(&self) -> Arc<RideCatalog> {
        self.catalog.clone()
    }

    /// Filter and sort the catalog.
    pub fn search(&self, filters: &SearchFilters) -> Vec<Ride> {
        self.catalog
            .with_rides_ref(|rides| filter_and_sort(rides, filters))
    }

    /// Look up a single ride.
    pub fn find(&self, id: &str) -> Option<Ride> {
        self.catalog.get(id)
    }

    /// Start an observable session seeded with `filters`.
    pub fn session(&self, filters: SearchFilters) -> ObservableSearch {
        ObservableSearch::new(self.catalog.clone(), filters)
    }

    /// Distinct origin and destination cities, sorted.
    pub fn cities(&self) -> Vec<String> {
        self.catalog.with_rides_ref(|rides| {
            rides
                .iter()
                .flat_map(|r| [r.from.city.clone(), r.to.city.clone()])
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        })
    }
}
