//! Current-weather and forecast transformers.
//!
//! This is the only place units are converted: provider km/h become m/s and
//! km become meters. Temperatures are already Celsius.

use chrono::{DateTime, TimeZone};

use crate::{
    adapter::{clock::parse_clock_time_on, condition::classify, country::resolve_country_code},
    error::WeatherError,
    model::{
        City, Condition, Coordinates, CurrentWeather, DayPeriod, ForecastEntry, ForecastList, Wind,
    },
    provider::weatherapi::{RawCondition, RawForecastDay, RawProviderResponse},
};

const KMH_PER_MPS: f64 = 3.6;
const METERS_PER_KM: f64 = 1000.0;

/// Marker in the provider's icon path for daytime icons.
const DAY_ICON_MARKER: &str = "day";

fn kmh_to_mps(kmh: f64) -> f64 {
    kmh / KMH_PER_MPS
}

fn km_to_m(km: f64) -> f64 {
    km * METERS_PER_KM
}

fn condition(raw: &RawCondition) -> Condition {
    Condition {
        category: classify(raw.code),
        code: raw.code,
        description: raw.text.clone(),
        icon: raw.icon.clone(),
    }
}

fn first_day(raw: &RawProviderResponse) -> Result<&RawForecastDay, WeatherError> {
    raw.forecast.forecastday.first().ok_or_else(|| {
        WeatherError::MalformedResponse("response contained no forecastday entries".to_string())
    })
}

/// Build the current-conditions record.
///
/// Day 0 of the forecast supplies min/max and sunrise/sunset; an empty
/// forecast is rejected. `now` anchors the sun times to today's date.
pub fn to_current_weather<Tz: TimeZone>(
    raw: &RawProviderResponse,
    now: &DateTime<Tz>,
) -> Result<CurrentWeather, WeatherError> {
    let today = first_day(raw)?;
    let current = &raw.current;

    Ok(CurrentWeather {
        name: raw.location.name.clone(),
        country: resolve_country_code(&raw.location.country),
        coord: Coordinates { lat: raw.location.lat, lon: raw.location.lon },
        temperature_c: current.temp_c,
        feels_like_c: current.feelslike_c,
        temp_min_c: today.day.mintemp_c,
        temp_max_c: today.day.maxtemp_c,
        humidity_pct: current.humidity,
        pressure_hpa: current.pressure_mb,
        visibility_m: km_to_m(current.vis_km),
        cloud_pct: current.cloud,
        wind: Wind {
            speed_mps: kmh_to_mps(current.wind_kph),
            direction_deg: current.wind_degree,
            gust_mps: kmh_to_mps(current.gust_kph),
        },
        condition: condition(&current.condition),
        sunrise: parse_clock_time_on(&today.astro.sunrise, now),
        sunset: parse_clock_time_on(&today.astro.sunset, now),
        observed_at: current.last_updated_epoch,
    })
}

/// Flatten every hour of every day into one list, keeping only entries at
/// or after `now`.
///
/// Provider order is kept as is; the list is chronological only because
/// the provider sends days and hours in order.
pub fn to_forecast<Tz: TimeZone>(
    raw: &RawProviderResponse,
    now: &DateTime<Tz>,
) -> Result<ForecastList, WeatherError> {
    let first = first_day(raw)?;
    let cutoff = now.timestamp();

    let entries: Vec<ForecastEntry> = raw
        .forecast
        .forecastday
        .iter()
        .flat_map(|day| day.hour.iter())
        .map(|hour| ForecastEntry {
            timestamp: hour.time_epoch,
            temperature_c: hour.temp_c,
            feels_like_c: hour.feelslike_c,
            temp_min_c: hour.temp_c,
            temp_max_c: hour.temp_c,
            pressure_hpa: hour.pressure_mb,
            humidity_pct: hour.humidity,
            condition: condition(&hour.condition),
            cloud_pct: hour.cloud,
            wind: Wind {
                speed_mps: kmh_to_mps(hour.wind_kph),
                direction_deg: hour.wind_degree,
                gust_mps: kmh_to_mps(hour.gust_kph),
            },
            visibility_m: km_to_m(hour.vis_km),
            precipitation_probability: hour.chance_of_rain / 100.0,
            period: if hour.condition.icon.contains(DAY_ICON_MARKER) {
                DayPeriod::Day
            } else {
                DayPeriod::Night
            },
            time_text: hour.time.clone(),
        })
        .filter(|entry| entry.timestamp >= cutoff)
        .collect();

    tracing::debug!(
        days = raw.forecast.forecastday.len(),
        kept = entries.len(),
        cutoff,
        "flattened hourly forecast"
    );

    Ok(ForecastList {
        city: City {
            name: raw.location.name.clone(),
            coord: Coordinates { lat: raw.location.lat, lon: raw.location.lon },
            country: resolve_country_code(&raw.location.country),
            sunrise: parse_clock_time_on(&first.astro.sunrise, now),
            sunset: parse_clock_time_on(&first.astro.sunset, now),
        },
        entries,
    })
}
