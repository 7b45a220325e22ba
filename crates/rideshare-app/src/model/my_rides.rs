//! My rides dashboard: bookings as a passenger, offers as a driver.

use rideshare_core::{BookingStatus, RideStatus};
use rideshare_engine::mock::Dashboard;

use crate::format::{amenity_chips, format_date_short, format_price, format_time, AmenityChips};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RidesTab {
    #[default]
    Passenger,
    Driver,
}

impl RidesTab {
    pub fn label(&self) -> &'static str {
        match self {
            RidesTab::Passenger => "As Passenger",
            RidesTab::Driver => "As Driver",
        }
    }
}

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Pending,
    Negative,
}

impl From<BookingStatus> for StatusTone {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Confirmed | BookingStatus::Completed => StatusTone::Positive,
            BookingStatus::Cancelled => StatusTone::Negative,
            BookingStatus::Pending => StatusTone::Pending,
        }
    }
}

impl From<RideStatus> for StatusTone {
    fn from(status: RideStatus) -> Self {
        match status {
            RideStatus::Upcoming | RideStatus::Completed => StatusTone::Positive,
            RideStatus::Cancelled => StatusTone::Negative,
            RideStatus::Ongoing => StatusTone::Pending,
        }
    }
}

/// A booking card on the passenger tab.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow {
    pub booking_id: String,
    pub ride_id: String,
    pub route: String,
    pub date: String,
    pub time: String,
    pub seats: u32,
    pub amount: String,
    pub status: &'static str,
    pub tone: StatusTone,
    pub vehicle: String,
    /// "Booked 2/1/2026"
    pub booked_on: String,
}

/// An offered ride card on the driver tab.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferedRow {
    pub ride_id: String,
    pub route: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub status: &'static str,
    pub tone: StatusTone,
    /// "booked / total booked"
    pub occupancy: String,
    pub amenities: AmenityChips,
}

/// State behind the my-rides screen.
pub struct MyRidesScreen {
    dashboard: Dashboard,
    tab: RidesTab,
}

impl MyRidesScreen {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            tab: RidesTab::default(),
        }
    }

    pub fn tab(&self) -> RidesTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: RidesTab) {
        self.tab = tab;
    }

    /// Badge count for a tab.
    pub fn count(&self, tab: RidesTab) -> usize {
        match tab {
            RidesTab::Passenger => self.dashboard.bookings.len(),
            RidesTab::Driver => self.dashboard.offered_rides.len(),
        }
    }

    pub fn booking_rows(&self) -> Vec<BookingRow> {
        self.dashboard
            .bookings
            .iter()
            .map(|b| BookingRow {
                booking_id: b.id.clone(),
                ride_id: b.ride.id.clone(),
                route: format!("{} → {}", b.ride.from.city, b.ride.to.city),
                date: format_date_short(&b.ride.date),
                time: format_time(&b.ride.time),
                seats: b.seats_booked,
                amount: format_price(b.total_amount),
                status: b.status.label(),
                tone: b.status.into(),
                vehicle: format!("{} • {}", b.ride.vehicle_name, b.ride.vehicle_number),
                booked_on: format!("Booked {}", b.booked_at.format("%-d/%-m/%Y")),
            })
            .collect()
    }

    pub fn offered_rows(&self) -> Vec<OfferedRow> {
        self.dashboard
            .offered_rides
            .iter()
            .map(|r| OfferedRow {
                ride_id: r.id.clone(),
                route: format!("{} → {}", r.from.city, r.to.city),
                date: format_date_short(&r.date),
                time: format_time(&r.time),
                price: format_price(r.price_per_seat),
                status: r.status.label(),
                tone: r.status.into(),
                occupancy: format!("{} / {} booked", r.seats_booked(), r.total_seats),
                amenities: amenity_chips(&r.amenities),
            })
            .collect()
    }

    /// Empty-state heading and message for the active tab.
    pub fn empty_state(&self) -> Option<(&'static str, &'static str)> {
        if self.count(self.tab) > 0 {
            return None;
        }
        Some(match self.tab {
            RidesTab::Passenger => (
                "No bookings yet",
                "Start exploring available rides and book your first carpooling journey!",
            ),
            RidesTab::Driver => (
                "No rides offered yet",
                "Share your journey and help others while earning money!",
            ),
        })
    }
}
