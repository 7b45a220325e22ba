//! Error types for the RideShare client.

use thiserror::Error;

use crate::ride::RideStatus;

/// Booking request errors - surfaced to the ride details screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// No ride with the requested id.
    #[error("Ride not found: {0}")]
    RideNotFound(String),

    /// Zero seats requested.
    #[error("At least one seat must be requested")]
    NoSeatsRequested,

    /// More seats requested than the ride has left.
    #[error("Only {available} seat(s) available, {requested} requested")]
    InsufficientSeats { requested: u32, available: u32 },

    /// The ride is no longer open for booking.
    #[error("Ride is {status} and cannot be booked")]
    RideUnavailable { status: RideStatus },

    /// The request was cancelled before it completed.
    #[error("Booking request cancelled")]
    Cancelled,
}

/// Errors returned by a ride publishing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    /// The publisher refused the offer.
    #[error("Ride offer rejected: {0}")]
    Rejected(String),

    /// The publisher could not be reached.
    #[error("Ride publisher unavailable")]
    Unavailable,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value parsed but is out of range.
    #[error("Invalid config value: {0}")]
    Invalid(String),
}
