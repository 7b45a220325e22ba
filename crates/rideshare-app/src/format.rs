//! Display formatting shared by the screens.

use chrono::NaiveDate;

use rideshare_engine::mock::amenity_label;

/// Amenity chips shown on a ride card before collapsing into "+N".
pub const VISIBLE_AMENITIES: usize = 3;

/// `"08:00"` → `"8:00 AM"`. Input that is not `HH:MM` is returned as-is.
pub fn format_time(time: &str) -> String {
    let Some((hours, minutes)) = time.split_once(':') else {
        return time.to_string();
    };
    let Ok(hour) = hours.parse::<u32>() else {
        return time.to_string();
    };
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{} {}", hour, minutes, suffix)
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// `"2026-01-10"` → `"Saturday, 10 January 2026"`.
pub fn format_date_long(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format("%A, %-d %B %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// `"2026-01-10"` → `"Sat, 10 Jan"`.
pub fn format_date_short(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format("%a, %-d %b").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Rupee amount without decimals, e.g. `"₹1200"`.
pub fn format_price(amount: f64) -> String {
    format!("₹{}", amount.round() as i64)
}

/// Seat count that should be highlighted as running out.
pub fn seats_urgent(seats_available: u32) -> bool {
    seats_available <= 1
}

/// Amenity chips for a ride card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityChips {
    pub labels: Vec<String>,
    /// Count of amenities folded into the "+N" chip.
    pub overflow: usize,
}

impl AmenityChips {
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }
}

/// The first amenities in listing order, then the "+N" count.
pub fn amenity_chips(amenities: &[String]) -> AmenityChips {
    AmenityChips {
        labels: amenities
            .iter()
            .take(VISIBLE_AMENITIES)
            .map(|id| amenity_label(id).to_string())
            .collect(),
        overflow: amenities.len().saturating_sub(VISIBLE_AMENITIES),
    }
}
