use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    config::ClientConfig,
    error::WeatherError,
    model::{ForecastEntry, Location},
};

use super::WeatherProvider;

const GEOCODING_PATH: &str = "/geo/1.0/direct";
const FORECAST_PATH: &str = "/data/2.5/forecast";

/// Client for the OpenWeather-compatible proxy at `weather.lewagon.com`.
#[derive(Debug, Clone)]
pub struct LeWagonProvider {
    base_url: String,
    http: Client,
}

impl LeWagonProvider {
    pub fn new(config: &ClientConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| WeatherError::Request { endpoint: "client", source })?;

        Ok(Self { base_url: config.base().to_string(), http })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, endpoint, "sending request");

        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| WeatherError::Request { endpoint, source })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| WeatherError::Request { endpoint, source })?;

        if !status.is_success() {
            return Err(WeatherError::Status { endpoint, status, body: truncate_body(&body) });
        }

        serde_json::from_str(&body).map_err(|source| WeatherError::Decode { endpoint, source })
    }
}

#[derive(Debug, Deserialize)]
struct LwPlace {
    name: String,
    country: Option<String>,
    lat: f64,
    lon: f64,
}

impl From<LwPlace> for Location {
    fn from(place: LwPlace) -> Self {
        Location::new(place.name, place.country, place.lat, place.lon)
    }
}

#[derive(Debug, Deserialize)]
struct LwMain {
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct LwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct LwForecastEntry {
    dt_txt: String,
    main: LwMain,
    #[serde(default)]
    weather: Vec<LwWeather>,
}

impl From<LwForecastEntry> for ForecastEntry {
    fn from(entry: LwForecastEntry) -> Self {
        let description = entry
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_else(|| "Unknown".to_string());

        ForecastEntry { timestamp: entry.dt_txt, description, max_temperature: entry.main.temp_max }
    }
}

#[derive(Debug, Deserialize)]
struct LwForecastResponse {
    list: Vec<LwForecastEntry>,
}

#[async_trait]
impl WeatherProvider for LeWagonProvider {
    async fn geocode(&self, query: &str, limit: usize) -> Result<Vec<Location>, WeatherError> {
        let places: Vec<LwPlace> = self
            .get_json(
                "geocoding",
                GEOCODING_PATH,
                &[("q", query.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        debug!(query, matches = places.len(), "geocoding finished");
        Ok(places.into_iter().take(limit).map(Location::from).collect())
    }

    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Vec<ForecastEntry>, WeatherError> {
        let parsed: LwForecastResponse = self
            .get_json(
                "forecast",
                FORECAST_PATH,
                &[("lat", latitude.to_string()), ("lon", longitude.to_string())],
            )
            .await?;

        debug!(entries = parsed.list.len(), "forecast series received");
        Ok(parsed.list.into_iter().map(ForecastEntry::from).collect())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
