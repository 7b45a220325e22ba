//! Configuration types.
//!
//! Configuration lives in `<config dir>/rideshare/config.toml`. Every field is
//! optional; a missing file yields [`AppConfig::default`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::filter::{SortBy, DEFAULT_PRICE_MAX};

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Find-ride screen defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Booking request behaviour
    #[serde(default)]
    pub booking: BookingConfig,

    /// Offer-ride wizard defaults
    #[serde(default)]
    pub offer: OfferConfig,
}

/// Find-ride screen defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_sort: SortBy,
    pub price_min: f64,
    pub price_max: f64,
    /// Slider granularity.
    pub price_step: f64,
    /// Seats assumed when the search form leaves the field unset.
    pub default_seats: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_sort: SortBy::Time,
            price_min: 0.0,
            price_max: DEFAULT_PRICE_MAX,
            price_step: 50.0,
            default_seats: 1,
        }
    }
}

/// Booking request behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Simulated round trip before a request is acknowledged.
    pub request_delay_ms: u64,
}

impl BookingConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: 1500,
        }
    }
}

/// Offer-ride wizard defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferConfig {
    pub default_seats: u32,
    pub max_seats: u32,
    pub default_amenities: Vec<String>,
}

impl Default for OfferConfig {
    fn default() -> Self {
        Self {
            default_seats: 3,
            max_seats: 6,
            default_amenities: vec!["ac".to_string(), "music".to_string()],
        }
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            tracing::info!("No config found at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: AppConfig =
            toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Reject values the screens cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.price_min > self.search.price_max {
            return Err(ConfigError::Invalid(format!(
                "search.price_min ({}) exceeds search.price_max ({})",
                self.search.price_min, self.search.price_max
            )));
        }
        if self.search.price_step <= 0.0 {
            return Err(ConfigError::Invalid(
                "search.price_step must be positive".to_string(),
            ));
        }
        if self.offer.max_seats == 0 {
            return Err(ConfigError::Invalid(
                "offer.max_seats must be at least 1".to_string(),
            ));
        }
        if !(1..=self.offer.max_seats).contains(&self.offer.default_seats) {
            return Err(ConfigError::Invalid(format!(
                "offer.default_seats must be within 1..={}",
                self.offer.max_seats
            )));
        }
        Ok(())
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("rideshare"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.search.price_max, 1500.0);
        assert_eq!(config.booking.request_delay(), Duration::from_millis(1500));
        assert_eq!(config.offer.default_seats, 3);
        assert_eq!(config.offer.default_amenities, vec!["ac", "music"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
            [search]
            default_sort = "rating"

            [booking]
            request_delay_ms = 10
            "#,
        );

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.search.default_sort, SortBy::Rating);
        assert_eq!(config.search.price_step, 50.0);
        assert_eq!(config.booking.request_delay_ms, 10);
        assert_eq!(config.offer.max_seats, 6);
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("[search\nprice_max = ");
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config(
            r#"
            [offer]
            default_seats = 8
            max_seats = 6
            "#,
        );
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
