//! Bundled mock dataset.
//!
//! The client has no backend; every screen reads from the JSON fixtures in
//! `data/`. Bookings reference rides by id and are resolved against the ride
//! catalog when loaded.

use chrono::{DateTime, Utc};
use rideshare_core::{BookingStatus, Ride, RideBooking, User};
use serde::Deserialize;

const RIDES_JSON: &str = include_str!("../data/rides.json");
const DASHBOARD_JSON: &str = include_str!("../data/dashboard.json");

/// Cities offered by the autocomplete fields.
pub const CITIES: &[&str] = &[
    "Mumbai",
    "Pune",
    "Delhi",
    "Jaipur",
    "Bangalore",
    "Mysore",
    "Chennai",
    "Pondicherry",
    "Hyderabad",
    "Ahmedabad",
    "Vadodara",
    "Goa",
    "Kolkata",
    "Chandigarh",
    "Lucknow",
];

/// Selectable amenities as `(id, label)`.
pub const AMENITIES: &[(&str, &str)] = &[
    ("ac", "AC"),
    ("music", "Music"),
    ("charging", "Charging Point"),
    ("luggage", "Extra Luggage"),
    ("firstaid", "First Aid"),
];

/// Display label for an amenity id; unknown ids are shown as-is.
pub fn amenity_label(id: &str) -> &str {
    AMENITIES
        .iter()
        .find(|(amenity, _)| *amenity == id)
        .map(|(_, label)| *label)
        .unwrap_or(id)
}

/// A frequently travelled route shown on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularRoute {
    pub from: &'static str,
    pub to: &'static str,
    pub rides_per_week: u32,
}

pub fn popular_routes() -> Vec<PopularRoute> {
    vec![
        PopularRoute {
            from: "Mumbai",
            to: "Pune",
            rides_per_week: 120,
        },
        PopularRoute {
            from: "Bangalore",
            to: "Mysore",
            rides_per_week: 85,
        },
        PopularRoute {
            from: "Delhi",
            to: "Jaipur",
            rides_per_week: 95,
        },
        PopularRoute {
            from: "Chennai",
            to: "Pondicherry",
            rides_per_week: 60,
        },
    ]
}

/// The ride catalog.
pub fn rides() -> serde_json::Result<Vec<Ride>> {
    serde_json::from_str(RIDES_JSON)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardFixture {
    current_user: User,
    offered_rides: Vec<Ride>,
    bookings: Vec<BookingFixture>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingFixture {
    id: String,
    ride_id: String,
    seats_booked: u32,
    status: BookingStatus,
    booked_at: DateTime<Utc>,
}

/// The signed-in user's data for the dashboard and profile screens.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub current_user: User,
    pub offered_rides: Vec<Ride>,
    pub bookings: Vec<RideBooking>,
}

/// Load the dashboard, resolving booking ride ids against `catalog`.
pub fn dashboard(catalog: &[Ride]) -> serde_json::Result<Dashboard> {
    let fixture: DashboardFixture = serde_json::from_str(DASHBOARD_JSON)?;
    let passenger = fixture.current_user.clone();

    let bookings = fixture
        .bookings
        .into_iter()
        .filter_map(|b| {
            let Some(ride) = catalog.iter().find(|r| r.id == b.ride_id) else {
                tracing::warn!("Booking {} references unknown ride {}", b.id, b.ride_id);
                return None;
            };
            Some(RideBooking::new(
                b.id,
                ride.clone(),
                passenger.clone(),
                b.seats_booked,
                b.status,
                b.booked_at,
            ))
        })
        .collect();

    Ok(Dashboard {
        current_user: fixture.current_user,
        offered_rides: fixture.offered_rides,
        bookings,
    })
}
