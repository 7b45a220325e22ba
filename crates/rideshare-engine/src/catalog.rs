//! Ride Catalog
//!
//! Shared, in-memory collection of ride offers. Searches read snapshots;
//! publishing appends; accepted bookings take seats.

use parking_lot::RwLock;
use rideshare_core::{BookingError, Ride};

use crate::booking::validate_seat_request;
use crate::mock;

/// The catalog of ride offers.
pub struct RideCatalog {
    rides: RwLock<Vec<Ride>>,
}

impl RideCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            rides: RwLock::new(Vec::new()),
        }
    }

    pub fn with_rides(rides: Vec<Ride>) -> Self {
        Self {
            rides: RwLock::new(rides),
        }
    }

    /// Catalog seeded with the bundled mock rides.
    pub fn with_mock_data() -> serde_json::Result<Self> {
        Ok(Self::with_rides(mock::rides()?))
    }

    /// Append a ride. Returns `false` if a ride with the same id exists.
    pub fn insert(&self, ride: Ride) -> bool {
        let mut rides = self.rides.write();
        if rides.iter().any(|r| r.id == ride.id) {
            tracing::warn!("Ride {} already in catalog", ride.id);
            return false;
        }
        tracing::debug!("Added ride {} ({} -> {})", ride.id, ride.from.city, ride.to.city);
        rides.push(ride);
        true
    }

    /// Take `seats` from a ride's free seats.
    ///
    /// The request is checked against the seats left at this moment, under
    /// the write lock, so concurrent bookings cannot oversell a ride. Returns
    /// the ride as it stands after the reservation.
    pub fn reserve_seats(&self, id: &str, seats: u32) -> Result<Ride, BookingError> {
        let mut rides = self.rides.write();
        let ride = rides
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| BookingError::RideNotFound(id.to_string()))?;
        validate_seat_request(ride, seats)?;
        ride.seats_available -= seats;
        tracing::debug!(
            "Reserved {} seat(s) on ride {}, {} left",
            seats,
            id,
            ride.seats_available
        );
        Ok(ride.clone())
    }

    /// Look up a ride by id.
    pub fn get(&self, id: &str) -> Option<Ride> {
        self.rides.read().iter().find(|r| r.id == id).cloned()
    }

    /// Copy of every ride in catalog order.
    pub fn snapshot(&self) -> Vec<Ride> {
        self.rides.read().clone()
    }

    /// Run `f` over the rides without cloning them.
    pub fn with_rides_ref<T>(&self, f: impl FnOnce(&[Ride]) -> T) -> T {
        f(&self.rides.read())
    }

    pub fn len(&self) -> usize {
        self.rides.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.read().is_empty()
    }
}

impl Default for RideCatalog {
    fn default() -> Self {
        Self::new()
    }
}
