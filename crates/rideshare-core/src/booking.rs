//! Seat bookings made by passengers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ride::{Location, Ride, User};

/// State of a booking request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
        }
    }

    /// Whether the booking reached a settled, positive outcome.
    pub fn is_settled(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Completed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Seats reserved by a passenger on a ride.
///
/// `total_amount` is always `ride.price_per_seat * seats_booked`; build
/// bookings through [`RideBooking::new`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideBooking {
    pub id: String,
    pub ride: Ride,
    pub passenger: User,
    pub seats_booked: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_point: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_point: Option<Location>,
}

impl RideBooking {
    pub fn new(
        id: impl Into<String>,
        ride: Ride,
        passenger: User,
        seats_booked: u32,
        status: BookingStatus,
        booked_at: DateTime<Utc>,
    ) -> Self {
        let total_amount = ride.fare_for(seats_booked);
        Self {
            id: id.into(),
            ride,
            passenger,
            seats_booked,
            total_amount,
            status,
            booked_at,
            pickup_point: None,
            drop_point: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ride::{RideStatus, VehicleType};
    use chrono::TimeZone;

    fn test_ride(price: f64) -> Ride {
        Ride {
            id: "r1".to_string(),
            driver: User::new("d1", "Vikram"),
            from: Location::new("Delhi", "Connaught Place"),
            to: Location::new("Jaipur", "MI Road"),
            date: "2026-03-04".to_string(),
            time: "07:15".to_string(),
            seats_available: 3,
            total_seats: 4,
            price_per_seat: price,
            vehicle_type: VehicleType::Suv,
            vehicle_name: "XUV700".to_string(),
            vehicle_number: "DL 3C AB 9876".to_string(),
            amenities: Default::default(),
            status: RideStatus::Upcoming,
            stops: None,
            notes: None,
        }
    }

    #[test]
    fn test_total_amount_is_derived() {
        let booked_at = Utc.with_ymd_and_hms(2026, 2, 20, 10, 0, 0).unwrap();
        let booking = RideBooking::new(
            "b1",
            test_ride(650.0),
            User::new("p1", "Meera"),
            2,
            BookingStatus::Pending,
            booked_at,
        );
        assert_eq!(booking.total_amount, 1300.0);
        assert_eq!(booking.status.label(), "Pending");
    }

    #[test]
    fn test_settled_statuses() {
        assert!(BookingStatus::Confirmed.is_settled());
        assert!(BookingStatus::Completed.is_settled());
        assert!(!BookingStatus::Pending.is_settled());
        assert!(!BookingStatus::Cancelled.is_settled());
    }
}
