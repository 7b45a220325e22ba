//! Core types for the RideShare carpooling client.
//!
//! This crate contains the data shared by every RideShare crate:
//! - Ride, driver and location types
//! - Bookings
//! - Search filter types
//! - Configuration types
//! - Error types

mod booking;
mod config;
mod error;
mod filter;
mod ride;

pub use booking::{BookingStatus, RideBooking};
pub use config::{
    config_dir, config_path, AppConfig, BookingConfig, OfferConfig, SearchConfig,
};
pub use error::{BookingError, ConfigError, PublishError};
pub use filter::{PriceRange, SearchFilters, SortBy, VehicleFilter, DEFAULT_PRICE_MAX};
pub use ride::{Location, Ride, RideStatus, User, VehicleType};
