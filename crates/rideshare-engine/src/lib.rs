//! Ride engine for the RideShare client.
//!
//! This crate holds the logic behind the screens:
//! - Ride search with filter/sort over a shared catalog
//! - Observable search sessions that broadcast results
//! - The three-step ride offer wizard
//! - Booking requests with cancellable acknowledgement
//! - Injected notifier/publisher collaborators
//! - The bundled mock dataset

pub mod booking;
pub mod catalog;
pub mod collab;
pub mod engine;
pub mod mock;
pub mod suggest;
pub mod wizard;

// Re-export commonly used types
pub use booking::{validate_seat_request, BookingService};
pub use catalog::RideCatalog;
pub use collab::{
    CatalogPublisher, Notice, NoticeKind, Notifier, PublishReceipt, RidePublisher, TracingNotifier,
};
pub use engine::{filter_and_sort, ObservableSearch, RideQueryEngine};
pub use suggest::city_suggestions;
pub use wizard::{
    DraftField, Rejection, RideOfferDraft, RideOfferWizard, StopDraft, WizardEvent, WizardOutcome,
    WizardPhase, WizardState, WizardStep,
};

// Re-export rideshare_core types for convenience
pub use rideshare_core::{
    BookingError, PublishError, Ride, RideBooking, SearchFilters, SortBy, VehicleFilter,
};
