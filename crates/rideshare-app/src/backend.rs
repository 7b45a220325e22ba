//! Backend integration for the RideShare screens.
//!
//! This module provides the bridge between the screens and the ride engine.
//! The `Backend` trait is renderer-independent and mockable for testing.
//!
//! ## Reactive State
//!
//! The engine's search session broadcasts results via `tokio::sync::watch`.
//! `search()` updates the session, so every subscriber sees the new list.

use futures::future::BoxFuture;
use parking_lot::RwLock;
use rideshare_core::{AppConfig, BookingConfig, Ride, RideBooking, SearchFilters, User};
use rideshare_engine::mock::{self as fixtures, Dashboard};
use rideshare_engine::{
    BookingService, CatalogPublisher, Notifier, ObservableSearch, RideCatalog, RidePublisher,
    RideQueryEngine, TracingNotifier,
};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::error::{AppError, AppResult};

// =============================================================================
// Backend Trait
// =============================================================================

/// Trait for backend operations.
///
/// Returns futures so the caller decides how to run them; tests swap in
/// [`mock::MockBackend`].
pub trait Backend: Send + Sync {
    /// Subscribe to search result changes.
    fn subscribe(&self) -> watch::Receiver<Vec<Ride>>;

    /// Run a search and make it the current session's filters.
    fn search(&self, filters: SearchFilters) -> BoxFuture<'static, AppResult<Vec<Ride>>>;

    /// Look up a ride by id.
    fn get_ride(&self, id: String) -> BoxFuture<'static, AppResult<Ride>>;

    /// Request seats on a ride for the signed-in user.
    ///
    /// Resolves to [`BookingError::Cancelled`](rideshare_core::BookingError)
    /// if `cancel` fires before the request is acknowledged.
    fn request_booking(
        &self,
        ride_id: String,
        seats: u32,
        cancel: CancellationToken,
    ) -> BoxFuture<'static, AppResult<RideBooking>>;

    /// The signed-in user's bookings and offered rides.
    fn dashboard(&self) -> BoxFuture<'static, AppResult<Dashboard>>;

    /// Publisher handed to the offer wizard.
    fn publisher(&self) -> Arc<dyn RidePublisher>;

    /// Notifier for user-facing notices.
    fn notifier(&self) -> Arc<dyn Notifier>;
}

// =============================================================================
// Runtime Backend
// =============================================================================

/// Backend over the in-memory catalog and mock dashboard.
pub struct RuntimeBackend {
    engine: RideQueryEngine,
    session: Arc<ObservableSearch>,
    current_user: User,
    offered_rides: Vec<Ride>,
    bookings: Arc<RwLock<Vec<RideBooking>>>,
    booking_config: BookingConfig,
    notifier: Arc<dyn Notifier>,
}

impl RuntimeBackend {
    /// Create a backend seeded with the bundled mock data.
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let catalog = Arc::new(RideCatalog::with_mock_data()?);
        let dashboard = catalog.with_rides_ref(fixtures::dashboard)?;
        tracing::info!(
            "Loaded {} rides, {} bookings for {}",
            catalog.len(),
            dashboard.bookings.len(),
            dashboard.current_user.name
        );

        let engine = RideQueryEngine::new(catalog);
        let filters = SearchFilters::default().sorted_by(config.search.default_sort);
        let session = Arc::new(engine.session(filters));

        Ok(Self {
            engine,
            session,
            current_user: dashboard.current_user,
            offered_rides: dashboard.offered_rides,
            bookings: Arc::new(RwLock::new(dashboard.bookings)),
            booking_config: config.booking.clone(),
            notifier: Arc::new(TracingNotifier),
        })
    }

    /// Use a custom notifier.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn engine(&self) -> &RideQueryEngine {
        &self.engine
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }
}

impl Backend for RuntimeBackend {
    fn subscribe(&self) -> watch::Receiver<Vec<Ride>> {
        self.session.subscribe()
    }

    fn search(&self, filters: SearchFilters) -> BoxFuture<'static, AppResult<Vec<Ride>>> {
        let session = self.session.clone();
        Box::pin(async move {
            // set_filters broadcasts to subscribers
            session.set_filters(filters);
            Ok(session.results())
        })
    }

    fn get_ride(&self, id: String) -> BoxFuture<'static, AppResult<Ride>> {
        let ride = self.engine.find(&id);
        Box::pin(async move { ride.ok_or(AppError::RideNotFound(id)) })
    }

    fn request_booking(
        &self,
        ride_id: String,
        seats: u32,
        cancel: CancellationToken,
    ) -> BoxFuture<'static, AppResult<RideBooking>> {
        let passenger = self.current_user.clone();
        let bookings = self.bookings.clone();
        let session = self.session.clone();
        let service = BookingService::new(
            &self.booking_config,
            self.engine.catalog(),
            self.notifier.clone(),
        );

        Box::pin(async move {
            let booking = service.request(&ride_id, &passenger, seats, &cancel).await?;
            bookings.write().push(booking.clone());
            // Results carry seat counts
            session.refresh();
            Ok(booking)
        })
    }

    fn dashboard(&self) -> BoxFuture<'static, AppResult<Dashboard>> {
        let user_id = self.current_user.id.clone();
        // Offers published this session are listed alongside the fixtures
        let mut offered_rides = self.offered_rides.clone();
        offered_rides.extend(self.engine.catalog().with_rides_ref(|rides| {
            rides
                .iter()
                .filter(|r| r.driver.id == user_id)
                .cloned()
                .collect::<Vec<_>>()
        }));
        let dashboard = Dashboard {
            current_user: self.current_user.clone(),
            offered_rides,
            bookings: self.bookings.read().clone(),
        };
        Box::pin(async move { Ok(dashboard) })
    }

    fn publisher(&self) -> Arc<dyn RidePublisher> {
        Arc::new(CatalogPublisher::new(
            self.engine.catalog(),
            self.current_user.clone(),
        ))
    }

    fn notifier(&self) -> Arc<dyn Notifier> {
        self.notifier.clone()
    }
}

// =============================================================================
// Mock Backend for Testing
// =============================================================================


// =============================================================================
// Tests
// =============================================================================
