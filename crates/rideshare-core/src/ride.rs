//! Ride, driver and location types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A place a ride starts, ends or stops at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
}

impl Location {
    pub fn new(city: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            address: address.into(),
            landmark: None,
        }
    }
}

/// A driver or passenger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Average rating in `0.0..=5.0`.
    pub rating: f64,
    pub total_rides: u32,
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// Create an unverified user with no ride history.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
            rating: 0.0,
            total_rides: 0,
            verified: false,
            phone: None,
        }
    }
}

/// Vehicle class offered for a ride.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    #[default]
    Car,
    Suv,
}

impl VehicleType {
    pub const ALL: [VehicleType; 2] = [VehicleType::Car, VehicleType::Suv];

    /// Label shown on the vehicle picker.
    pub fn description(&self) -> &'static str {
        match self {
            VehicleType::Car => "Hatchback/Sedan",
            VehicleType::Suv => "SUV/MUV",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::Car => write!(f, "CAR"),
            VehicleType::Suv => write!(f, "SUV"),
        }
    }
}

/// Lifecycle of an offered ride.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RideStatus::Upcoming => "Upcoming",
            RideStatus::Ongoing => "Ongoing",
            RideStatus::Completed => "Completed",
            RideStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A ride offered by a driver.
///
/// `seats_available` never exceeds `total_seats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: String,
    pub driver: User,
    pub from: Location,
    pub to: Location,
    /// ISO date, e.g. `2026-01-10`.
    pub date: String,
    /// Zero-padded 24h departure time, e.g. `08:00`.
    pub time: String,
    pub seats_available: u32,
    pub total_seats: u32,
    pub price_per_seat: f64,
    pub vehicle_type: VehicleType,
    pub vehicle_name: String,
    pub vehicle_number: String,
    /// Amenity ids in listing order.
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub status: RideStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<Location>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Ride {
    /// Seats already taken by passengers.
    pub fn seats_booked(&self) -> u32 {
        self.total_seats.saturating_sub(self.seats_available)
    }

    /// Whether the seat counts are consistent.
    pub fn seats_consistent(&self) -> bool {
        self.seats_available <= self.total_seats
    }

    /// Whether a passenger can still request seats on this ride.
    pub fn is_bookable(&self) -> bool {
        self.status == RideStatus::Upcoming && self.seats_available > 0
    }

    /// Fare for `seats` seats.
    pub fn fare_for(&self, seats: u32) -> f64 {
        self.price_per_seat * f64::from(seats)
    }

    /// Intermediate stops in travel order; empty when the ride is direct.
    pub fn stops(&self) -> &[Location] {
        self.stops.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ride() -> Ride {
        Ride {
            id: "r1".to_string(),
            driver: User::new("u1", "Asha"),
            from: Location::new("Pune", "Shivajinagar"),
            to: Location::new("Mumbai", "Dadar"),
            date: "2026-01-10".to_string(),
            time: "08:00".to_string(),
            seats_available: 2,
            total_seats: 4,
            price_per_seat: 450.0,
            vehicle_type: VehicleType::Car,
            vehicle_name: "Honda City".to_string(),
            vehicle_number: "MH 12 AB 1234".to_string(),
            amenities: vec!["ac".to_string()],
            status: RideStatus::Upcoming,
            stops: None,
            notes: None,
        }
    }

    #[test]
    fn test_seat_accounting() {
        let ride = test_ride();
        assert_eq!(ride.seats_booked(), 2);
        assert!(ride.seats_consistent());
        assert_eq!(ride.fare_for(2), 900.0);
    }

    #[test]
    fn test_bookable_requires_upcoming_and_free_seats() {
        let mut ride = test_ride();
        assert!(ride.is_bookable());

        ride.status = RideStatus::Completed;
        assert!(!ride.is_bookable());

        ride.status = RideStatus::Upcoming;
        ride.seats_available = 0;
        assert!(!ride.is_bookable());
    }

    #[test]
    fn test_ride_deserializes_camel_case() {
        let json = r#"{
            "id": "r9",
            "driver": {
                "id": "d1", "name": "Ravi", "rating": 4.5, "totalRides": 12, "verified": true
            },
            "from": {"city": "Bangalore", "address": "Koramangala"},
            "to": {"city": "Mysore", "address": "Palace Road", "landmark": "Gate 2"},
            "date": "2026-02-01",
            "time": "06:30",
            "seatsAvailable": 3,
            "totalSeats": 4,
            "pricePerSeat": 350,
            "vehicleType": "suv",
            "vehicleName": "Innova",
            "vehicleNumber": "KA 01 AB 1234",
            "amenities": ["ac", "music"],
            "status": "upcoming"
        }"#;

        let ride: Ride = serde_json::from_str(json).unwrap();
        assert_eq!(ride.vehicle_type, VehicleType::Suv);
        assert_eq!(ride.driver.total_rides, 12);
        assert_eq!(ride.to.landmark.as_deref(), Some("Gate 2"));
        assert!(ride.stops().is_empty());
        assert_eq!(ride.amenities, vec!["ac", "music"]);
    }
}
