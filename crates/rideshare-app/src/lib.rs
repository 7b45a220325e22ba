//! Screen layer for the RideShare carpooling client.
//!
//! This crate provides the renderer-independent side of the app:
//! - Screen models (home, find ride, ride details, offer ride, my rides)
//! - Backend integration over the ride engine
//! - Display formatting
//! - The error type surfaced to a frontend

pub mod backend;
pub mod error;
pub mod format;
pub mod model;

// Re-export commonly used types
pub use backend::{Backend, RuntimeBackend};
pub use error::{AppError, AppResult};
pub use model::{
    FindRideScreen, HomeScreen, MyRidesScreen, OfferRideScreen, RideDetails, RideDetailsScreen,
    RidesTab, SearchForm, SearchQuery,
};
