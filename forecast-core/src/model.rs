use chrono::NaiveDate;

/// Country shown when the geocoder omits one.
pub const UNKNOWN_COUNTRY: &str = "N/A";

/// A geocoded place the user can ask the forecast for.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, country: Option<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            country: country.unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
            latitude,
            longitude,
        }
    }
}

/// One raw reading from the 3-hour-interval forecast series.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Upstream timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    pub description: String,
    pub max_temperature: f64,
}

/// The representative reading kept for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastSample {
    pub date: NaiveDate,
    pub description: String,
    /// Degrees Celsius, rounded.
    pub max_temperature: i64,
}
