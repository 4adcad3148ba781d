use std::time::Duration;

use crate::error::WeatherError;

/// Fixed base address of the upstream weather service.
pub const DEFAULT_BASE_URL: &str = "https://weather.lewagon.com";

/// Per-request timeout applied to every upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of candidate cities asked from the geocoder.
pub const GEOCODE_LIMIT: usize = 5;

/// Connection settings for the upstream provider.
///
/// Nothing here is read from disk or the environment; the defaults are the
/// only values the binary uses. Tests swap the base URL for a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub geocode_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            geocode_limit: GEOCODE_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Same defaults, different upstream address.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<(), WeatherError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(WeatherError::InvalidConfig(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout.is_zero() {
            return Err(WeatherError::InvalidConfig("timeout must be non-zero".into()));
        }

        if self.geocode_limit == 0 {
            return Err(WeatherError::InvalidConfig("geocode limit must be at least 1".into()));
        }

        Ok(())
    }
}
