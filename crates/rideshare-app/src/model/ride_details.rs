//! Ride details screen: seat picker, saved toggle and booking request.

use rideshare_core::{Ride, RideBooking};
use tokio_util::sync::CancellationToken;

use crate::backend::Backend;
use crate::error::{AppError, AppResult};
use crate::format::{
    amenity_chips, format_date_long, format_price, format_time, seats_urgent, AmenityChips,
};

/// What the share sheet offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareInfo {
    pub title: String,
    pub text: String,
}

/// Top-level screen state. Invalid states are impossible.
#[derive(Debug)]
pub enum RideDetailsScreen {
    /// No ride with this id; the screen offers a way back to browsing.
    NotFound { ride_id: String },
    Loaded(RideDetails),
}

impl RideDetailsScreen {
    /// Load the ride for `ride_id`.
    pub async fn load(backend: &dyn Backend, ride_id: &str) -> AppResult<Self> {
        match backend.get_ride(ride_id.to_string()).await {
            Ok(ride) => Ok(RideDetailsScreen::Loaded(RideDetails::new(ride))),
            Err(AppError::RideNotFound(ride_id)) => {
                tracing::warn!("Ride {} not found", ride_id);
                Ok(RideDetailsScreen::NotFound { ride_id })
            }
            Err(err) => Err(err),
        }
    }

    pub fn details(&self) -> Option<&RideDetails> {
        match self {
            RideDetailsScreen::Loaded(details) => Some(details),
            RideDetailsScreen::NotFound { .. } => None,
        }
    }

    pub fn details_mut(&mut self) -> Option<&mut RideDetails> {
        match self {
            RideDetailsScreen::Loaded(details) => Some(details),
            RideDetailsScreen::NotFound { .. } => None,
        }
    }
}

/// A loaded ride and the passenger's pending choices.
#[derive(Debug)]
pub struct RideDetails {
    pub ride: Ride,
    seats_to_book: u32,
    is_booking: bool,
    is_saved: bool,
    last_booking: Option<RideBooking>,
}

impl RideDetails {
    pub fn new(ride: Ride) -> Self {
        Self {
            ride,
            seats_to_book: 1,
            is_booking: false,
            is_saved: false,
            last_booking: None,
        }
    }

    // =========================================================================
    // Seat picker
    // =========================================================================

    /// Selectable seat counts, `1..=seats_available`.
    pub fn seat_options(&self) -> Vec<u32> {
        (1..=self.ride.seats_available).collect()
    }

    pub fn seats_to_book(&self) -> u32 {
        self.seats_to_book
    }

    /// Select a seat count. Returns `false` and keeps the current choice when
    /// `seats` is not one of the options.
    pub fn select_seats(&mut self, seats: u32) -> bool {
        if !(1..=self.ride.seats_available).contains(&seats) {
            return false;
        }
        self.seats_to_book = seats;
        true
    }

    /// Fare for the selected seats.
    pub fn total_price(&self) -> f64 {
        self.ride.fare_for(self.seats_to_book)
    }

    // =========================================================================
    // Saved toggle
    // =========================================================================

    pub fn is_saved(&self) -> bool {
        self.is_saved
    }

    pub fn toggle_saved(&mut self) {
        self.is_saved = !self.is_saved;
    }

    // =========================================================================
    // Booking
    // =========================================================================

    pub fn is_booking(&self) -> bool {
        self.is_booking
    }

    pub fn last_booking(&self) -> Option<&RideBooking> {
        self.last_booking.as_ref()
    }

    /// Whether the book button is enabled.
    pub fn can_book(&self) -> bool {
        !self.is_booking && self.ride.is_bookable()
    }

    /// Send a booking request for the selected seats.
    ///
    /// `cancel` belongs to the screen; firing it when the screen goes away
    /// abandons the request without a booking. Dropping the future also
    /// clears `is_booking`.
    pub async fn book(
        &mut self,
        backend: &dyn Backend,
        cancel: CancellationToken,
    ) -> AppResult<RideBooking> {
        let request = backend.request_booking(self.ride.id.clone(), self.seats_to_book, cancel);
        let result = {
            let _in_flight = InFlight::raise(&mut self.is_booking);
            request.await
        };

        let booking = result?;
        self.ride = booking.ride.clone();
        self.seats_to_book = self.seats_to_book.min(self.ride.seats_available).max(1);
        self.last_booking = Some(booking.clone());
        Ok(booking)
    }

    // =========================================================================
    // Labels
    // =========================================================================

    pub fn date_label(&self) -> String {
        format_date_long(&self.ride.date)
    }

    pub fn time_label(&self) -> String {
        format_time(&self.ride.time)
    }

    /// "N left", flagged urgent when one seat or fewer remain.
    pub fn seats_left(&self) -> (String, bool) {
        (
            format!("{} left", self.ride.seats_available),
            seats_urgent(self.ride.seats_available),
        )
    }

    /// "Price x N seat(s)" line of the fare summary.
    pub fn fare_line(&self) -> (String, String) {
        (
            format!("Price x {} seat(s)", self.seats_to_book),
            format_price(self.total_price()),
        )
    }

    pub fn amenities(&self) -> AmenityChips {
        amenity_chips(&self.ride.amenities)
    }

    pub fn share_info(&self) -> ShareInfo {
        ShareInfo {
            title: format!("Ride from {} to {}", self.ride.from.city, self.ride.to.city),
            text: "Check out this ride on RideShare!".to_string(),
        }
    }
}

/// Holds a busy flag up until dropped.
struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use rideshare_core::{BookingError, BookingStatus};
    use std::time::Duration;

    fn backend() -> MockBackend {
        MockBackend::new().with_rides(rideshare_engine::mock::rides().unwrap())
    }

    async fn loaded(backend: &MockBackend, id: &str) -> RideDetails {
        match RideDetailsScreen::load(backend, id).await.unwrap() {
            RideDetailsScreen::Loaded(details) => details,
            other => panic!("expected ride, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_not_found() {
        let screen = RideDetailsScreen::load(&backend(), "404").await.unwrap();
        assert!(matches!(
            screen,
            RideDetailsScreen::NotFound { ref ride_id } if ride_id == "404"
        ));
        assert!(screen.details().is_none());
    }

    #[tokio::test]
    async fn test_seat_picker_and_total() {
        let mut details = loaded(&backend(), "1").await;
        assert_eq!(details.seat_options(), vec![1, 2, 3]);
        assert_eq!(details.total_price(), 450.0);

        assert!(details.select_seats(3));
        assert_eq!(details.total_price(), 1350.0);
        assert_eq!(
            details.fare_line(),
            ("Price x 3 seat(s)".to_string(), "₹1350".to_string())
        );

        assert!(!details.select_seats(4));
        assert!(!details.select_seats(0));
        assert_eq!(details.seats_to_book(), 3);
    }

    #[tokio::test]
    async fn test_labels() {
        let details = loaded(&backend(), "4").await;
        assert_eq!(details.time_label(), "10:00 PM");
        assert_eq!(details.date_label(), "Monday, 12 January 2026");
        assert_eq!(details.seats_left(), ("1 left".to_string(), true));
        assert_eq!(details.share_info().title, "Ride from Hyderabad to Bangalore");

        let chips = loaded(&backend(), "3").await.amenities();
        assert_eq!(chips.labels, vec!["AC", "Music", "Charging Point"]);
        assert_eq!(chips.overflow_label().as_deref(), Some("+1"));
    }

    #[tokio::test]
    async fn test_saved_toggle() {
        let mut details = loaded(&backend(), "2").await;
        assert!(!details.is_saved());
        details.toggle_saved();
        assert!(details.is_saved());
        details.toggle_saved();
        assert!(!details.is_saved());
    }

    #[tokio::test]
    async fn test_book() {
        let backend = backend();
        let mut details = loaded(&backend, "1").await;
        details.select_seats(2);
        assert!(details.can_book());

        let booking = details.book(&backend, CancellationToken::new()).await.unwrap();
        assert_eq!(booking.seats_booked, 2);
        assert_eq!(booking.total_amount, 900.0);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(!details.is_booking());
        assert_eq!(details.last_booking(), Some(&booking));
    }

    #[tokio::test]
    async fn test_full_ride_cannot_be_booked() {
        let backend = backend();
        let mut details = loaded(&backend, "7").await;
        assert!(details.seat_options().is_empty());
        assert!(!details.can_book());

        let err = details.book(&backend, CancellationToken::new()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Booking(BookingError::InsufficientSeats { .. })
        ));
        assert!(details.last_booking().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_booking_leaves_no_booking() {
        let backend = backend().with_booking_delay(Duration::from_millis(1500));
        let mut details = loaded(&backend, "2").await;

        let cancel = CancellationToken::new();
        let unmount = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            unmount.cancel();
        });

        let err = details.book(&backend, cancel).await.unwrap_err();
        assert!(matches!(err, AppError::Booking(BookingError::Cancelled)));
        assert!(!details.is_booking());
        assert!(details.last_booking().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_booking_clears_busy_flag() {
        let backend = backend().with_booking_delay(Duration::from_secs(60));
        let mut details = loaded(&backend, "2").await;

        let abandoned = tokio::time::timeout(
            Duration::from_millis(100),
            details.book(&backend, CancellationToken::new()),
        )
        .await;
        assert!(abandoned.is_err());
        assert!(!details.is_booking());
        assert!(details.can_book());
        assert!(details.last_booking().is_none());
    }

    #[tokio::test]
    async fn test_booking_updates_seats_left() {
        let mut config = rideshare_core::AppConfig::default();
        config.booking.request_delay_ms = 1;
        let backend = crate::backend::RuntimeBackend::new(&config).unwrap();

        let mut details = match RideDetailsScreen::load(&backend, "1").await.unwrap() {
            RideDetailsScreen::Loaded(details) => details,
            other => panic!("expected ride, got {:?}", other),
        };
        assert!(details.select_seats(2));
        details.book(&backend, CancellationToken::new()).await.unwrap();

        assert_eq!(details.seats_left(), ("1 left".to_string(), true));
        assert_eq!(details.seat_options(), vec![1]);
        assert_eq!(details.seats_to_book(), 1);

        details.book(&backend, CancellationToken::new()).await.unwrap();
        assert!(details.seat_options().is_empty());
        assert!(!details.can_book());
    }
}
