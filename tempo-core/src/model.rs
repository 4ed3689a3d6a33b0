use std::fmt;

use serde::{Deserialize, Serialize};

use crate::adapter::condition::Category;

/// What the user asked for: a free-text place or a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Place(String),
    Coords { lat: f64, lon: f64 },
}

impl Query {
    pub fn kind(&self) -> QueryKind {
        match self {
            Query::Place(_) => QueryKind::Place,
            Query::Coords { .. } => QueryKind::Coords,
        }
    }

    /// Value sent as the provider's `q` parameter.
    pub fn to_wire(&self) -> String {
        match self {
            Query::Place(name) => name.trim().to_string(),
            Query::Coords { lat, lon } => format!("{lat},{lon}"),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Place,
    Coords,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::Place => f.write_str("place"),
            QueryKind::Coords => f.write_str("coordinates"),
        }
    }
}

/// Language used for provider descriptions and user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Pt,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Pt => "pt",
            Lang::En => "en",
        }
    }

    pub const fn all() -> &'static [Lang] {
        &[Lang::Pt, Lang::En]
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Lang {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "pt" | "pt-br" => Ok(Lang::Pt),
            "en" => Ok(Lang::En),
            _ => Err(anyhow::anyhow!("Unknown language '{value}'. Supported languages: pt, en.")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub category: Category,
    /// Provider code the category was derived from.
    pub code: i32,
    pub description: String,
    pub icon: String,
}

/// Speeds in m/s, direction in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed_mps: f64,
    pub direction_deg: f64,
    pub gust_mps: f64,
}

/// Normalized current conditions for one location.
///
/// Sunrise and sunset are epoch seconds; `0` means the provider's clock
/// string could not be parsed and the value is not available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    pub country: String,
    pub coord: Coordinates,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: f64,
    pub visibility_m: f64,
    pub cloud_pct: u8,
    pub wind: Wind,
    pub condition: Condition,
    pub sunrise: i64,
    pub sunset: i64,
    pub observed_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Day,
    Night,
}

/// One hour of forecast data.
///
/// Hourly data carries no separate min/max, so `temp_min_c` and
/// `temp_max_c` repeat `temperature_c`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: i64,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub pressure_hpa: f64,
    pub humidity_pct: u8,
    pub condition: Condition,
    pub cloud_pct: u8,
    pub wind: Wind,
    pub visibility_m: f64,
    /// Fraction in `[0, 1]`.
    pub precipitation_probability: f64,
    pub period: DayPeriod,
    pub time_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub coord: Coordinates,
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

/// Chronological, now-relative forecast for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastList {
    pub city: City,
    pub entries: Vec<ForecastEntry>,
}

/// Both views produced for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub forecast: ForecastList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_query_wire_format() {
        let q = Query::Coords { lat: -23.55, lon: -46.63 };
        assert_eq!(q.to_wire(), "-23.55,-46.63");
        assert_eq!(q.kind(), QueryKind::Coords);
    }

    #[test]
    fn place_query_is_trimmed() {
        let q = Query::Place("  São Paulo ".into());
        assert_eq!(q.to_wire(), "São Paulo");
        assert_eq!(q.kind(), QueryKind::Place);
    }

    #[test]
    fn lang_as_str_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::try_from(lang.as_str()).expect("roundtrip should succeed");
            assert_eq!(*lang, parsed);
        }
    }

    #[test]
    fn unknown_lang_error() {
        let err = Lang::try_from("klingon").unwrap_err();
        assert!(err.to_string().contains("Unknown language"));
    }
}
