//! In-memory provider and console for exercising the interactive flow.

use std::{
    collections::VecDeque,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use forecast_core::{ForecastEntry, Location, WeatherError, WeatherProvider, error::StatusCode};

use crate::console::{Console, PromptError};

#[derive(Debug, Default)]
pub struct FakeProvider {
    pub places: Vec<Location>,
    pub entries: Vec<ForecastEntry>,
    pub fail_geocode: bool,
    pub fail_forecast: bool,
    pub geocode_calls: AtomicUsize,
    pub forecast_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn with_places(places: Vec<Location>) -> Self {
        Self { places, ..Self::default() }
    }

    pub fn network_calls(&self) -> usize {
        self.geocode_calls.load(Ordering::SeqCst) + self.forecast_calls.load(Ordering::SeqCst)
    }
}

fn upstream_down(endpoint: &'static str) -> WeatherError {
    WeatherError::Status {
        endpoint,
        status: StatusCode::SERVICE_UNAVAILABLE,
        body: "upstream down".into(),
    }
}

#[async_trait]
impl WeatherProvider for FakeProvider {
    async fn geocode(&self, _query: &str, limit: usize) -> Result<Vec<Location>, WeatherError> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_geocode {
            return Err(upstream_down("geocoding"));
        }
        Ok(self.places.iter().take(limit).cloned().collect())
    }

    async fn forecast(&self, _latitude: f64, _longitude: f64) -> Result<Vec<ForecastEntry>, WeatherError> {
        self.forecast_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_forecast {
            return Err(upstream_down("forecast"));
        }
        Ok(self.entries.clone())
    }
}

/// Replays canned answers and records everything printed.
/// Running out of answers behaves like Ctrl-C.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), ..Self::default() }
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(PromptError::Interrupted)
    }
}

pub fn place(name: &str, country: &str, latitude: f64, longitude: f64) -> Location {
    Location::new(name, Some(country.to_string()), latitude, longitude)
}

pub fn midday(date: &str, description: &str, max_temperature: f64) -> ForecastEntry {
    ForecastEntry {
        timestamp: format!("{date} 12:00:00"),
        description: description.to_string(),
        max_temperature,
    }
}
