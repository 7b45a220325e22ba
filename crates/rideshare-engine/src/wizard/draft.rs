//! The ride offer draft and its validity predicates.
//!
//! Validity is never stored: every gate is a pure function over the current
//! draft, so edits made in any order are always reflected.

use std::collections::BTreeSet;

use rideshare_core::{Location, OfferConfig, Ride, RideStatus, User, VehicleType};
use serde::{Deserialize, Serialize};

use crate::mock::AMENITIES;

/// An intermediate stop being entered on the route step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopDraft {
    pub city: String,
    pub address: String,
}

/// Text fields of the draft that are edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FromCity,
    FromAddress,
    ToCity,
    ToAddress,
    Date,
    Time,
    Price,
    VehicleName,
    VehicleNumber,
    Notes,
}

/// A ride offer under construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideOfferDraft {
    pub from_city: String,
    pub from_address: String,
    pub to_city: String,
    pub to_address: String,
    pub date: String,
    pub time: String,
    pub seats: u32,
    /// Raw price input; parsed on demand.
    pub price: String,
    pub vehicle_type: VehicleType,
    pub vehicle_name: String,
    pub vehicle_number: String,
    pub amenities: BTreeSet<String>,
    pub notes: String,
    pub stops: Vec<StopDraft>,
}

impl Default for RideOfferDraft {
    fn default() -> Self {
        Self::new(&OfferConfig::default())
    }
}

impl RideOfferDraft {
    /// Empty draft with the configured seat and amenity defaults.
    pub fn new(config: &OfferConfig) -> Self {
        Self {
            from_city: String::new(),
            from_address: String::new(),
            to_city: String::new(),
            to_address: String::new(),
            date: String::new(),
            time: String::new(),
            seats: config.default_seats,
            price: String::new(),
            vehicle_type: VehicleType::Car,
            vehicle_name: String::new(),
            vehicle_number: String::new(),
            amenities: config.default_amenities.iter().cloned().collect(),
            notes: String::new(),
            stops: Vec::new(),
        }
    }

    pub(crate) fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::FromCity => &mut self.from_city,
            DraftField::FromAddress => &mut self.from_address,
            DraftField::ToCity => &mut self.to_city,
            DraftField::ToAddress => &mut self.to_address,
            DraftField::Date => &mut self.date,
            DraftField::Time => &mut self.time,
            DraftField::Price => &mut self.price,
            DraftField::VehicleName => &mut self.vehicle_name,
            DraftField::VehicleNumber => &mut self.vehicle_number,
            DraftField::Notes => &mut self.notes,
        }
    }

    /// Symmetric toggle: removes `id` if present, adds it otherwise.
    pub fn toggle_amenity(&mut self, id: &str) {
        if !self.amenities.remove(id) {
            self.amenities.insert(id.to_string());
        }
    }

    /// Selected amenities in the order the picker lists them. Ids the picker
    /// does not know come last.
    pub fn listed_amenities(&self) -> Vec<String> {
        let known = AMENITIES
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| self.amenities.contains(*id));
        let unknown = self
            .amenities
            .iter()
            .map(String::as_str)
            .filter(|id| !AMENITIES.iter().any(|(known, _)| known == id));
        known.chain(unknown).map(str::to_string).collect()
    }

    // =========================================================================
    // Validity gates
    // =========================================================================

    pub fn route_complete(&self) -> bool {
        !self.from_city.is_empty()
            && !self.to_city.is_empty()
            && !self.date.is_empty()
            && !self.time.is_empty()
    }

    pub fn vehicle_complete(&self) -> bool {
        !self.vehicle_name.is_empty() && !self.vehicle_number.is_empty()
    }

    pub fn pricing_complete(&self) -> bool {
        matches!(self.price_per_seat(), Some(price) if price > 0)
    }

    /// Every gate holds; the draft may be published.
    pub fn is_complete(&self) -> bool {
        self.route_complete() && self.vehicle_complete() && self.pricing_complete()
    }

    /// Integer price per seat, if the input starts with one.
    pub fn price_per_seat(&self) -> Option<i64> {
        parse_leading_int(&self.price)
    }

    /// Earnings if every seat is booked; 0 when the price does not parse.
    pub fn projected_earnings(&self) -> i64 {
        self.price_per_seat()
            .map(|price| price.saturating_mul(i64::from(self.seats)))
            .unwrap_or(0)
    }

    /// Build the published ride. Stops with no city are dropped.
    pub fn to_ride(&self, id: impl Into<String>, driver: User) -> Ride {
        let stops: Vec<Location> = self
            .stops
            .iter()
            .filter(|stop| !stop.city.trim().is_empty())
            .map(|stop| Location::new(stop.city.clone(), stop.address.clone()))
            .collect();

        Ride {
            id: id.into(),
            driver,
            from: Location::new(self.from_city.clone(), self.from_address.clone()),
            to: Location::new(self.to_city.clone(), self.to_address.clone()),
            date: self.date.clone(),
            time: self.time.clone(),
            seats_available: self.seats,
            total_seats: self.seats,
            price_per_seat: self.price_per_seat().unwrap_or(0) as f64,
            vehicle_type: self.vehicle_type,
            vehicle_name: self.vehicle_name.clone(),
            vehicle_number: self.vehicle_number.clone(),
            amenities: self.listed_amenities(),
            status: RideStatus::Upcoming,
            stops: (!stops.is_empty()).then_some(stops),
            notes: (!self.notes.trim().is_empty()).then(|| self.notes.clone()),
        }
    }
}

/// Parse the leading base-10 integer of `input`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Returns `None` when no digit is found. Values beyond the
/// `i64` range saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(d));
    }

    seen.then_some(if negative { -value } else { value })
}
