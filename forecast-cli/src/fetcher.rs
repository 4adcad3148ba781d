use forecast_core::{ForecastSample, WeatherProvider, midday_samples};
use tracing::warn;

use crate::console::Console;

/// Fetch the series for a coordinate and keep up to `days` midday samples.
///
/// A failed request is reported to the user and yields an empty list.
pub async fn fetch_daily<C: Console + ?Sized>(
    provider: &dyn WeatherProvider,
    console: &mut C,
    latitude: f64,
    longitude: f64,
    days: usize,
) -> Vec<ForecastSample> {
    match provider.forecast(latitude, longitude).await {
        Ok(entries) => midday_samples(&entries, days),
        Err(err) => {
            warn!(latitude, longitude, transport = err.is_transport(), error = %err, "forecast failed");
            console.say(&format!("Error fetching weather forecast: {err}"));
            Vec::new()
        }
    }
}
