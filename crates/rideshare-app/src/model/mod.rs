//! Screen models for the RideShare client.
//!
//! One state type per screen. All types are renderer-independent for
//! testability; a UI layer reads them and forwards user input.

mod find_ride;
mod home;
mod my_rides;
mod offer_ride;
mod ride_details;
mod search;

pub use find_ride::FindRideScreen;
pub use home::{route_frequency, route_query, HomeScreen, FEATURED_RIDES};
pub use my_rides::{BookingRow, MyRidesScreen, OfferedRow, RidesTab, StatusTone};
pub use offer_ride::{AmenityOption, OfferRideScreen, StepIndicator};
pub use ride_details::{RideDetails, RideDetailsScreen, ShareInfo};
pub use search::{SearchForm, SearchQuery};
