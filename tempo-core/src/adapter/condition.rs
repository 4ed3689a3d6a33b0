use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Provider-independent weather categories used for icons and backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Clear,
    Clouds,
    Mist,
    Drizzle,
    Thunderstorm,
    Snow,
    Fog,
    Rain,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Mist => "Mist",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Fog => "Fog",
            Self::Rain => "Rain",
        }
    }

    pub const fn all() -> &'static [Category] {
        &[
            Self::Clear,
            Self::Clouds,
            Self::Mist,
            Self::Drizzle,
            Self::Thunderstorm,
            Self::Snow,
            Self::Fog,
            Self::Rain,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category returned for codes no rule covers.
pub const FALLBACK: Category = Category::Clouds;

/// WeatherAPI.com condition code ranges, first match wins.
/// See: https://www.weatherapi.com/docs/weather_conditions.json
const RULES: &[(RangeInclusive<i32>, Category)] = &[
    (1000..=1000, Category::Clear),
    (1003..=1009, Category::Clouds),
    (1030..=1039, Category::Mist),
    (1063..=1072, Category::Drizzle),
    (1087..=1087, Category::Thunderstorm), // thundery outbreaks possible
    (1114..=1117, Category::Snow),         // blowing snow, blizzard
    (1135..=1147, Category::Fog),
    (1150..=1201, Category::Rain),
    (1204..=1237, Category::Snow), // sleet, snow, ice pellets
    (1240..=1246, Category::Rain), // rain showers
    (1249..=1264, Category::Snow), // sleet and snow showers
    (1273..=1282, Category::Thunderstorm),
];

/// Map a provider condition code to a [`Category`]. Total over `i32`.
pub fn classify(code: i32) -> Category {
    RULES
        .iter()
        .find(|(range, _)| range.contains(&code))
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunny_is_clear() {
        assert_eq!(classify(1000), Category::Clear);
    }

    #[test]
    fn cloud_codes() {
        assert_eq!(classify(1003), Category::Clouds);
        assert_eq!(classify(1006), Category::Clouds);
        assert_eq!(classify(1009), Category::Clouds);
    }

    #[test]
    fn mist_and_fog() {
        assert_eq!(classify(1030), Category::Mist);
        assert_eq!(classify(1135), Category::Fog);
        assert_eq!(classify(1147), Category::Fog);
    }

    #[test]
    fn patchy_precipitation_is_drizzle() {
        assert_eq!(classify(1063), Category::Drizzle);
        assert_eq!(classify(1072), Category::Drizzle);
    }

    #[test]
    fn thunder_codes() {
        assert_eq!(classify(1087), Category::Thunderstorm);
        assert_eq!(classify(1273), Category::Thunderstorm);
        assert_eq!(classify(1282), Category::Thunderstorm);
    }

    #[test]
    fn rain_codes() {
        assert_eq!(classify(1150), Category::Rain);
        assert_eq!(classify(1183), Category::Rain);
        assert_eq!(classify(1195), Category::Rain);
        assert_eq!(classify(1243), Category::Rain);
    }

    #[test]
    fn snow_codes() {
        assert_eq!(classify(1114), Category::Snow);
        assert_eq!(classify(1117), Category::Snow);
        assert_eq!(classify(1213), Category::Snow);
        assert_eq!(classify(1258), Category::Snow);
    }

    #[test]
    fn unknown_codes_fall_back_to_clouds() {
        assert_eq!(classify(9999), Category::Clouds);
        assert_eq!(classify(1001), Category::Clouds);
        assert_eq!(classify(0), Category::Clouds);
        assert_eq!(classify(-1), Category::Clouds);
        assert_eq!(classify(i32::MIN), Category::Clouds);
        assert_eq!(classify(i32::MAX), Category::Clouds);
    }

    #[test]
    fn classify_is_total() {
        for code in -1000..=5000 {
            assert!(Category::all().contains(&classify(code)));
        }
    }
}
