//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Client configuration for the fixed upstream service
//! - Abstraction over the upstream provider (geocoding and forecast)
//! - Shared domain models and the pure transforms applied to them
//!
//! It is used by `forecast-cli`, but does no terminal I/O of its own.

pub mod choice;
pub mod config;
pub mod daily;
pub mod error;
pub mod model;
pub mod provider;

pub use choice::{Choice, parse_choice};
pub use config::ClientConfig;
pub use daily::{DAYS, midday_samples};
pub use error::WeatherError;
pub use model::{ForecastEntry, ForecastSample, Location};
pub use provider::{WeatherProvider, provider_from_config};
