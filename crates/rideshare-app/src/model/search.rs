//! Search form and the query it submits.

use rideshare_core::{PriceRange, SearchConfig, SearchFilters};
use rideshare_engine::city_suggestions;
use rideshare_engine::wizard::parse_leading_int;

// =============================================================================
// Search Query
// =============================================================================

/// Already-decoded `from`/`to`/`date`/`seats` query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
    pub seats: Option<String>,
}

impl SearchQuery {
    /// Collect the known keys from decoded pairs; the last value wins.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key {
                "from" => &mut query.from,
                "to" => &mut query.to,
                "date" => &mut query.date,
                "seats" => &mut query.seats,
                _ => continue,
            };
            *slot = Some(value.to_string());
        }
        query
    }

    /// Decoded pairs in submission order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("from", &self.from),
            ("to", &self.to),
            ("date", &self.date),
            ("seats", &self.seats),
        ]
        .into_iter()
        .map(|(key, value)| (key, value.clone().unwrap_or_default()))
        .collect()
    }

    /// Requested seats: the configured default when absent or empty, 0
    /// ("any") when the value does not start with a positive integer.
    pub fn seats(&self, config: &SearchConfig) -> u32 {
        match self.seats.as_deref() {
            None | Some("") => config.default_seats,
            Some(raw) => parse_leading_int(raw)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
        }
    }

    /// Filters for the find-ride screen, using the configured panel
    /// defaults for everything the query does not carry.
    pub fn to_filters(&self, config: &SearchConfig) -> SearchFilters {
        SearchFilters {
            from: self.from.clone().unwrap_or_default(),
            to: self.to.clone().unwrap_or_default(),
            date: self.date.clone().unwrap_or_default(),
            seats: self.seats(config),
            sort_by: config.default_sort,
            price_range: PriceRange::new(config.price_min, config.price_max),
            ..Default::default()
        }
    }
}

// =============================================================================
// Search Form
// =============================================================================

/// The from/to/date/seats form on the home and find-ride screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub from: String,
    pub to: String,
    pub date: String,
    pub seats: u32,
}

impl SearchForm {
    /// Prefill from a previous query.
    pub fn new(query: &SearchQuery, config: &SearchConfig) -> Self {
        let seats = match query.seats(config) {
            0 => config.default_seats,
            n => n,
        };
        Self {
            from: query.from.clone().unwrap_or_default(),
            to: query.to.clone().unwrap_or_default(),
            date: query.date.clone().unwrap_or_default(),
            seats,
        }
    }

    /// Exchange origin and destination.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Cities for the origin field, never the chosen destination.
    pub fn from_suggestions(&self) -> Vec<&'static str> {
        city_suggestions(&self.from, Some(&self.to))
    }

    /// Cities for the destination field, never the chosen origin.
    pub fn to_suggestions(&self) -> Vec<&'static str> {
        city_suggestions(&self.to, Some(&self.from))
    }

    pub fn submit(&self) -> SearchQuery {
        tracing::debug!("Search submitted: {} -> {}", self.from, self.to);
        SearchQuery {
            from: Some(self.from.clone()),
            to: Some(self.to.clone()),
            date: Some(self.date.clone()),
            seats: Some(self.seats.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rideshare_core::SortBy;

    #[test]
    fn test_query_from_pairs() {
        let query = SearchQuery::from_pairs([
            ("from", "Pune"),
            ("utm", "x"),
            ("to", "Mumbai"),
            ("seats", "2"),
        ]);
        assert_eq!(query.from.as_deref(), Some("Pune"));
        assert_eq!(query.to.as_deref(), Some("Mumbai"));
        assert_eq!(query.date, None);
        assert_eq!(query.seats.as_deref(), Some("2"));
    }

    #[test]
    fn test_seats_defaults() {
        let config = SearchConfig::default();
        assert_eq!(SearchQuery::default().seats(&config), 1);

        let with = |raw: &str| SearchQuery {
            seats: Some(raw.to_string()),
            ..Default::default()
        };
        assert_eq!(with("3").seats(&config), 3);
        assert_eq!(with("2 seats").seats(&config), 2);
        assert_eq!(with("many").seats(&config), 0);
        assert_eq!(with("").seats(&config), 1);
        assert_eq!(with("-2").seats(&config), 0);
    }

    #[test]
    fn test_to_filters() {
        let config = SearchConfig {
            default_sort: SortBy::Rating,
            price_max: 900.0,
            ..Default::default()
        };
        let query = SearchQuery::from_pairs([("from", "pune"), ("date", "2026-01-10")]);
        let filters = query.to_filters(&config);

        assert_eq!(filters.from, "pune");
        assert_eq!(filters.to, "");
        assert_eq!(filters.date, "2026-01-10");
        assert_eq!(filters.seats, 1);
        assert_eq!(filters.sort_by, SortBy::Rating);
        assert_eq!(filters.price_range, PriceRange::new(0.0, 900.0));
        assert!(!filters.verified_only);
    }

    #[test]
    fn test_form_swap_and_suggestions() {
        let config = SearchConfig::default();
        let mut form = SearchForm::new(
            &SearchQuery::from_pairs([("from", "Pune"), ("to", "Mumbai")]),
            &config,
        );
        assert_eq!(form.seats, 1);

        form.swap();
        assert_eq!((form.from.as_str(), form.to.as_str()), ("Mumbai", "Pune"));

        form.from = "pun".to_string();
        assert!(form.from_suggestions().is_empty());
        form.to = String::new();
        assert_eq!(form.from_suggestions(), vec!["Pune"]);

        form.from = "Goa".to_string();
        assert!(!form.to_suggestions().contains(&"Goa"));
    }

    #[test]
    fn test_submit_round_trips_into_filters() {
        let config = SearchConfig::default();
        let form = SearchForm {
            from: "Delhi".to_string(),
            to: "Jaipur".to_string(),
            date: String::new(),
            seats: 2,
        };
        let query = form.submit();
        assert_eq!(
            query.to_pairs(),
            vec![
                ("from", "Delhi".to_string()),
                ("to", "Jaipur".to_string()),
                ("date", String::new()),
                ("seats", "2".to_string()),
            ]
        );
        let filters = query.to_filters(&config);
        assert_eq!(filters.seats, 2);
        assert_eq!(filters.date, "");
    }
}
