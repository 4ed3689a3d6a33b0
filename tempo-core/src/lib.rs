//! Core library for the `tempo` weather client.
//!
//! This crate defines:
//! - The WeatherAPI.com wire format and an async client for it
//! - The adapter that normalizes provider payloads into internal records
//! - Day/hour views over the normalized forecast
//! - Configuration & credentials handling
//!
//! It is used by `tempo-cli`, but can also be reused by other binaries or services.

pub mod adapter;
pub mod config;
pub mod error;
pub mod model;
pub mod present;
pub mod provider;

pub use adapter::{Category, classify, daily_view, hourly_view, to_current_weather, to_forecast};
pub use config::Config;
pub use error::WeatherError;
pub use model::{
    City, Condition, Coordinates, CurrentWeather, DayPeriod, ForecastEntry, ForecastList, Lang,
    Query, QueryKind, WeatherReport, Wind,
};
pub use provider::{WeatherSource, fetch_weather, source_from_config, weatherapi::WeatherApiClient};
