use crate::{
    config::ClientConfig,
    error::WeatherError,
    model::{ForecastEntry, Location},
    provider::lewagon::LeWagonProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod lewagon;

/// Upstream service able to geocode city names and serve 3-hour forecasts.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Up to `limit` places matching a free-text query, best match first.
    async fn geocode(&self, query: &str, limit: usize) -> Result<Vec<Location>, WeatherError>;

    /// The full forecast series for a coordinate, in upstream order.
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Vec<ForecastEntry>, WeatherError>;
}

/// Construct the upstream client described by the config.
pub fn provider_from_config(config: &ClientConfig) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    config.validate()?;
    Ok(Box::new(LeWagonProvider::new(config)?))
}
