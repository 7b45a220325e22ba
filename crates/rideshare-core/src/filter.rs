//! Search filter types.
//!
//! A [`SearchFilters`] value describes which rides the user wants to see and
//! in which order. Every field has a "no constraint" value, so a default
//! filter matches the whole catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ride::VehicleType;

/// Upper bound of the price slider.
pub const DEFAULT_PRICE_MAX: f64 = 1500.0;

/// Sort key for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Cheapest seat first.
    Price,
    /// Earliest departure first.
    #[default]
    Time,
    /// Best-rated driver first.
    Rating,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Time, SortBy::Price, SortBy::Rating];

    /// Label for the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Price => "Price: Low to High",
            SortBy::Time => "Departure Time",
            SortBy::Rating => "Driver Rating",
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortBy::Price),
            "time" => Ok(SortBy::Time),
            "rating" => Ok(SortBy::Rating),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

/// Vehicle type constraint. `All` disables the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleFilter {
    #[default]
    All,
    Car,
    Suv,
}

impl VehicleFilter {
    pub const ALL: [VehicleFilter; 3] =
        [VehicleFilter::All, VehicleFilter::Car, VehicleFilter::Suv];

    pub fn matches(&self, vehicle: VehicleType) -> bool {
        match self {
            VehicleFilter::All => true,
            VehicleFilter::Car => vehicle == VehicleType::Car,
            VehicleFilter::Suv => vehicle == VehicleType::Suv,
        }
    }
}

impl fmt::Display for VehicleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleFilter::All => write!(f, "All"),
            VehicleFilter::Car => write!(f, "CAR"),
            VehicleFilter::Suv => write!(f, "SUV"),
        }
    }
}

/// Inclusive price-per-seat bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

/// User-chosen constraints narrowing the ride catalog.
///
/// Empty strings and `seats == 0` mean "no constraint".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub from: String,
    pub to: String,
    /// ISO date; empty matches any date.
    pub date: String,
    pub seats: u32,
    pub sort_by: SortBy,
    pub price_range: PriceRange,
    pub vehicle_type: VehicleFilter,
    pub verified_only: bool,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            date: String::new(),
            seats: 0,
            sort_by: SortBy::default(),
            price_range: PriceRange::default(),
            vehicle_type: VehicleFilter::All,
            verified_only: false,
        }
    }
}

impl SearchFilters {
    pub fn sorted_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}
