//! Booking requests.
//!
//! A request is validated against the ride's current seats and status, then
//! waits out the configured round trip before it is acknowledged. An
//! acknowledged request takes its seats from the catalog. The wait is
//! cancellable; a cancelled request produces neither a booking nor a notice.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rideshare_core::{
    BookingConfig, BookingError, BookingStatus, Ride, RideBooking, RideStatus, User,
};
use tokio_util::sync::CancellationToken;

use crate::catalog::RideCatalog;
use crate::collab::{Notice, Notifier};

/// Check a seat request against `ride` without booking anything.
pub fn validate_seat_request(ride: &Ride, seats: u32) -> Result<(), BookingError> {
    if ride.status != RideStatus::Upcoming {
        return Err(BookingError::RideUnavailable {
            status: ride.status,
        });
    }
    if seats == 0 {
        return Err(BookingError::NoSeatsRequested);
    }
    if seats > ride.seats_available {
        return Err(BookingError::InsufficientSeats {
            requested: seats,
            available: ride.seats_available,
        });
    }
    Ok(())
}

/// Sends booking requests on behalf of a passenger.
pub struct BookingService {
    catalog: Arc<RideCatalog>,
    notifier: Arc<dyn Notifier>,
    delay: Duration,
}

impl BookingService {
    pub fn new(
        config: &BookingConfig,
        catalog: Arc<RideCatalog>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            catalog,
            notifier,
            delay: config.request_delay(),
        }
    }

    /// Request `seats` seats on the listed ride `ride_id`.
    ///
    /// The request is checked up front, then again when it is acknowledged,
    /// when the seats are taken from the catalog. Returns a pending booking,
    /// or [`BookingError::Cancelled`] if `cancel` fires first.
    pub async fn request(
        &self,
        ride_id: &str,
        passenger: &User,
        seats: u32,
        cancel: &CancellationToken,
    ) -> Result<RideBooking, BookingError> {
        let checked = self
            .catalog
            .get(ride_id)
            .ok_or_else(|| BookingError::RideNotFound(ride_id.to_string()))
            .and_then(|ride| validate_seat_request(&ride, seats));
        if let Err(err) = checked {
            tracing::warn!("Booking on ride {} rejected: {}", ride_id, err);
            return Err(err);
        }

        tracing::debug!("Requesting {} seat(s) on ride {}", seats, ride_id);
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!("Booking request on ride {} cancelled", ride_id);
                return Err(BookingError::Cancelled);
            }
            _ = tokio::time::sleep(self.delay) => {}
        }

        // Seats may have gone while the request was in flight
        let ride = match self.catalog.reserve_seats(ride_id, seats) {
            Ok(ride) => ride,
            Err(err) => {
                tracing::warn!("Booking on ride {} rejected: {}", ride_id, err);
                return Err(err);
            }
        };

        let booking = RideBooking::new(
            uuid::Uuid::new_v4().to_string(),
            ride,
            passenger.clone(),
            seats,
            BookingStatus::Pending,
            Utc::now(),
        );
        tracing::info!(
            "Booking {} sent: {} seat(s) on ride {} for {}",
            booking.id,
            seats,
            ride_id,
            booking.total_amount
        );
        self.notifier.notify(
            Notice::success("Booking request sent!").with_description(format!(
                "You requested {} seat(s). The driver will confirm shortly.",
                seats
            )),
        );
        Ok(booking)
    }
}
