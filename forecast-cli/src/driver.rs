use forecast_core::{ClientConfig, DAYS, ForecastSample, Location, WeatherProvider};
use tracing::{debug, warn};

use crate::{
    console::{Console, PromptError},
    fetcher::fetch_daily,
    resolver::resolve_city,
};

pub const CITY_PROMPT: &str = "City?\n> ";
pub const GOODBYE: &str = "\nGoodbye!";

/// Prompt-resolve-fetch-print loop. Each turn is independent.
pub struct Driver<'a, C: Console + ?Sized> {
    provider: &'a dyn WeatherProvider,
    console: &'a mut C,
    geocode_limit: usize,
}

impl<'a, C: Console + ?Sized> Driver<'a, C> {
    pub fn new(provider: &'a dyn WeatherProvider, console: &'a mut C, config: &ClientConfig) -> Self {
        Self { provider, console, geocode_limit: config.geocode_limit }
    }

    /// Run turns until the user interrupts or input ends, then say goodbye.
    pub async fn run(&mut self) {
        loop {
            match self.turn().await {
                Ok(()) => {}
                Err(PromptError::Io(err)) => {
                    warn!(error = %err, "reading input failed, stopping");
                    break;
                }
                Err(err) => {
                    debug!(reason = %err, "stopping");
                    break;
                }
            }
        }

        self.console.say(GOODBYE);
    }

    /// One prompt-to-printout cycle.
    pub async fn turn(&mut self) -> Result<(), PromptError> {
        let answer = self.console.ask(CITY_PROMPT)?;
        let query = answer.trim();
        if query.is_empty() {
            return Ok(());
        }

        let Some(city) = resolve_city(self.provider, &mut *self.console, query, self.geocode_limit).await? else {
            return Ok(());
        };

        let samples = fetch_daily(self.provider, &mut *self.console, city.latitude, city.longitude, DAYS).await;
        if samples.is_empty() {
            self.console.say("No weather forecast available.");
            return Ok(());
        }

        self.print_forecast(&city, &samples);
        Ok(())
    }

    fn print_forecast(&mut self, city: &Location, samples: &[ForecastSample]) {
        self.console.say(&format!("\nHere's the weather in {}:", city.name));
        for sample in samples {
            self.console.say(&format_sample(sample));
        }
    }
}

pub fn format_sample(sample: &ForecastSample) -> String {
    format!("{}: {} ({}°C)", sample.date, sample.description, sample.max_temperature)
}
