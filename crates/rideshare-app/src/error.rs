//! Centralized error type for the RideShare screens.
//!
//! Wraps the engine's typed errors and serializes them as
//! `{ "kind", "message" }` so a frontend can branch on `kind`.

use rideshare_core::{BookingError, ConfigError, PublishError};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the backend facade.
#[derive(Debug, Error)]
pub enum AppError {
    /// No ride with the given id.
    #[error("Ride not found: {0}")]
    RideNotFound(String),

    #[error("Booking failed: {0}")]
    Booking(#[from] BookingError),

    #[error("Publishing failed: {0}")]
    Publish(#[from] PublishError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Bundled data could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::RideNotFound(_) | AppError::Booking(BookingError::RideNotFound(_)) => {
                "RideNotFound"
            }
            AppError::Booking(BookingError::Cancelled) => "BookingCancelled",
            AppError::Booking(_) => "BookingRejected",
            AppError::Publish(_) => "PublishFailed",
            AppError::Config(_) => "ConfigError",
            AppError::Json(_) => "JsonError",
        }
    }
}

/// The frontend receives errors in the format:
/// ```json
/// { "kind": "RideNotFound", "message": "Ride not found: 42" }
/// ```
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("AppError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = AppError::RideNotFound("42".to_string());
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["kind"], "RideNotFound");
        assert_eq!(json["message"], "Ride not found: 42");
    }

    #[test]
    fn test_missing_ride_has_one_kind() {
        let error: AppError = BookingError::RideNotFound("42".to_string()).into();
        assert_eq!(error.kind(), AppError::RideNotFound("42".to_string()).kind());
        assert_eq!(serde_json::to_value(&error).unwrap()["kind"], "RideNotFound");
    }

    #[test]
    fn test_booking_error_conversion() {
        let error: AppError = BookingError::InsufficientSeats {
            requested: 3,
            available: 1,
        }
        .into();
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["kind"], "BookingRejected");
        assert_eq!(
            json["message"],
            "Booking failed: Only 1 seat(s) available, 3 requested"
        );

        let error: AppError = BookingError::Cancelled.into();
        assert_eq!(error.kind(), "BookingCancelled");
    }
}
