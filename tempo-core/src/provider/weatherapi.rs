use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::WeatherError,
    model::{Lang, Query},
};

use super::WeatherSource;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    lang: Lang,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String, lang: Lang) -> Self {
        Self { api_key, base_url: DEFAULT_BASE_URL.to_string(), lang, http: Client::new() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl WeatherSource for WeatherApiClient {
    async fn fetch_forecast_json(
        &self,
        query: &Query,
        days: u8,
    ) -> Result<RawProviderResponse, WeatherError> {
        let url = format!("{}/forecast.json", self.base_url.trim_end_matches('/'));
        let q = query.to_wire();
        let days = days.to_string();

        tracing::info!(query = %q, %days, lang = %self.lang, "requesting WeatherAPI forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", q.as_str()),
                ("days", days.as_str()),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(
                %status,
                body = %truncate_body(&body),
                "WeatherAPI forecast request failed"
            );
            return Err(WeatherError::UpstreamUnavailable {
                status: status.as_u16(),
                query_kind: query.kind(),
            });
        }

        decode_body(&body)
    }
}

/// Parse a `forecast.json` body.
///
/// Text that is not JSON is a [`WeatherError::Decode`]; JSON with the wrong
/// shape is a [`WeatherError::MalformedResponse`].
pub fn decode_body(body: &str) -> Result<RawProviderResponse, WeatherError> {
    serde_json::from_str(body).map_err(|err| match err.classify() {
        serde_json::error::Category::Data => WeatherError::MalformedResponse(err.to_string()),
        _ => WeatherError::Decode(err),
    })
}

/// Top-level `forecast.json` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProviderResponse {
    pub location: RawLocation,
    pub current: RawCurrent,
    #[serde(default)]
    pub forecast: RawForecast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLocation {
    pub name: String,
    #[serde(default)]
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tz_id: String,
    pub localtime_epoch: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    pub text: String,
    pub icon: String,
    pub code: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrent {
    pub last_updated_epoch: i64,
    pub temp_c: f64,
    pub condition: RawCondition,
    pub wind_kph: f64,
    pub wind_degree: f64,
    #[serde(default)]
    pub gust_kph: f64,
    pub pressure_mb: f64,
    #[serde(default)]
    pub precip_mm: f64,
    pub humidity: u8,
    pub cloud: u8,
    pub feelslike_c: f64,
    pub vis_km: f64,
    #[serde(default)]
    pub uv: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForecast {
    #[serde(default)]
    pub forecastday: Vec<RawForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastDay {
    pub date: String,
    pub date_epoch: i64,
    pub day: RawDay,
    pub astro: RawAstro,
    #[serde(default)]
    pub hour: Vec<RawHour>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDay {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    #[serde(default)]
    pub avgtemp_c: f64,
    #[serde(default)]
    pub daily_chance_of_rain: f64,
    pub condition: RawCondition,
}

/// Sun and moon times as 12-hour clock strings, e.g. `"06:45 AM"`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAstro {
    pub sunrise: String,
    pub sunset: String,
    #[serde(default)]
    pub moonrise: String,
    #[serde(default)]
    pub moonset: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHour {
    pub time_epoch: i64,
    pub time: String,
    pub temp_c: f64,
    pub condition: RawCondition,
    pub wind_kph: f64,
    pub wind_degree: f64,
    #[serde(default)]
    pub gust_kph: f64,
    pub pressure_mb: f64,
    pub humidity: u8,
    pub cloud: u8,
    pub feelslike_c: f64,
    #[serde(default)]
    pub will_it_rain: u8,
    #[serde(default)]
    pub chance_of_rain: f64,
    pub vis_km: f64,
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
