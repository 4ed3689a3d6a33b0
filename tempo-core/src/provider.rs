use crate::{
    Config,
    adapter::transform::{to_current_weather, to_forecast},
    error::WeatherError,
    model::{Query, WeatherReport},
    provider::weatherapi::{RawProviderResponse, WeatherApiClient},
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone};
use std::fmt::Debug;

pub mod weatherapi;

/// Source of raw `forecast.json` payloads.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_forecast_json(
        &self,
        query: &Query,
        days: u8,
    ) -> Result<RawProviderResponse, WeatherError>;
}

/// Construct the WeatherAPI.com client from config.
pub fn source_from_config(config: &Config) -> anyhow::Result<WeatherApiClient> {
    let api_key = config.resolved_api_key()?;
    Ok(WeatherApiClient::new(api_key, config.lang).with_base_url(config.base_url.clone()))
}

/// Fetch the current and forecast payloads concurrently and normalize both.
///
/// The first failure of either request is returned as is; nothing is retried.
pub async fn fetch_weather<S, Tz>(
    source: &S,
    query: &Query,
    config: &Config,
    now: &DateTime<Tz>,
) -> Result<WeatherReport, WeatherError>
where
    S: WeatherSource + ?Sized,
    Tz: TimeZone,
{
    let (current_raw, forecast_raw) = tokio::try_join!(
        source.fetch_forecast_json(query, config.current_days),
        source.fetch_forecast_json(query, config.forecast_days),
    )?;

    let current = to_current_weather(&current_raw, now)?;
    let forecast = to_forecast(&forecast_raw, now)?;

    tracing::info!(
        city = %current.name,
        country = %current.country,
        hours = forecast.entries.len(),
        "weather report ready"
    );

    Ok(WeatherReport { current, forecast })
}
