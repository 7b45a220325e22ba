//! Observable search session with automatic change notifications.
//!
//! Mutation = notification. Every method that changes the filters also
//! recomputes the result list and broadcasts it. Callers cannot change the
//! filters without subscribers seeing the new results.

use std::sync::Arc;

use parking_lot::RwLock;
use rideshare_core::{Ride, SearchFilters};
use tokio::sync::watch;

use super::pipeline::filter_and_sort;
use crate::catalog::RideCatalog;

// =============================================================================
// ObservableSearch
// =============================================================================

/// A filter set bound to a catalog that broadcasts its results.
///
/// ## Thread Safety
///
/// Uses `parking_lot::RwLock` for the filters (never poisons) and
/// `tokio::sync::watch` for broadcasts.
///
/// ## Usage
///
/// ```ignore
/// let search = ObservableSearch::new(catalog, SearchFilters::default());
/// let rx = search.subscribe();
///
/// // This updates AND broadcasts
/// search.update(|f| f.verified_only = true);
///
/// let rides = rx.borrow().clone();
/// ```
pub struct ObservableSearch {
    catalog: Arc<RideCatalog>,
    filters: RwLock<SearchFilters>,
    tx: watch::Sender<Vec<Ride>>,
    rx: watch::Receiver<Vec<Ride>>,
}

impl ObservableSearch {
    /// Create a session and compute the initial results.
    pub fn new(catalog: Arc<RideCatalog>, filters: SearchFilters) -> Self {
        let initial = catalog.with_rides_ref(|rides| filter_and_sort(rides, &filters));
        let (tx, rx) = watch::channel(initial);
        Self {
            catalog,
            filters: RwLock::new(filters),
            tx,
            rx,
        }
    }

    // =========================================================================
    // Mutation Methods (all broadcast automatically)
    // =========================================================================

    /// Replace the filters. Broadcasts the new results.
    pub fn set_filters(&self, filters: SearchFilters) {
        self.update(|current| *current = filters);
    }

    /// Modify the filters in place. Broadcasts the new results.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut SearchFilters),
    {
        let results = {
            let mut filters = self.filters.write();
            f(&mut filters);
            self.catalog
                .with_rides_ref(|rides| filter_and_sort(rides, &filters))
        };
        tracing::debug!("Search updated, {} results", results.len());
        let _ = self.tx.send(results);
    }

    /// Recompute against the current catalog, e.g. after a ride was published.
    pub fn refresh(&self) {
        self.update(|_| {});
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    pub fn filters(&self) -> SearchFilters {
        self.filters.read().clone()
    }

    /// Latest broadcast results.
    pub fn results(&self) -> Vec<Ride> {
        self.rx.borrow().clone()
    }

    /// Subscribe to result changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Ride>> {
        self.rx.clone()
    }
}
