//! Helpers used at the rendering boundary.
//!
//! None of these touch the normalized records; they only turn values into
//! display strings.

use chrono::{Datelike, TimeZone, Timelike};

use crate::{adapter::condition::Category, model::Lang};

/// Gradient used when no category matches.
pub const DEFAULT_BACKGROUND: &str = "from-blue-500 via-purple-500 to-pink-500";

/// Gradient shown before any weather has been loaded.
pub const IDLE_BACKGROUND: &str = "from-indigo-900 via-purple-900 to-pink-800";

/// Shown in place of a sun time the provider string could not be parsed for.
pub const MISSING_TIME: &str = "--:--";

const BACKGROUNDS: &[(&str, &str)] = &[
    ("Clear", "from-yellow-400 via-orange-500 to-pink-500"),
    ("Sunny", "from-yellow-400 via-orange-500 to-pink-500"),
    ("Clouds", "from-gray-400 via-gray-500 to-gray-600"),
    ("Cloudy", "from-gray-400 via-gray-500 to-gray-600"),
    ("Overcast", "from-gray-500 via-gray-600 to-gray-700"),
    ("Rain", "from-blue-600 via-blue-700 to-gray-800"),
    ("Drizzle", "from-blue-400 via-blue-500 to-blue-600"),
    ("Thunderstorm", "from-purple-800 via-gray-800 to-gray-900"),
    ("Snow", "from-blue-100 via-blue-200 to-white"),
    ("Mist", "from-gray-300 via-gray-400 to-gray-500"),
    ("Fog", "from-gray-300 via-gray-400 to-gray-500"),
    ("Haze", "from-yellow-200 via-yellow-300 to-gray-400"),
];

const COMPASS_PT: [&str; 8] = ["N", "NE", "L", "SE", "S", "SO", "O", "NO"];
const COMPASS_EN: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

const WEEKDAYS_PT: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];
const WEEKDAYS_EN: [&str; 7] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];
const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Background gradient for a category name, with [`DEFAULT_BACKGROUND`] as
/// fallback.
pub fn background_for_name(name: &str) -> &'static str {
    BACKGROUNDS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, gradient)| *gradient)
        .unwrap_or(DEFAULT_BACKGROUND)
}

pub fn background_for(category: Category) -> &'static str {
    background_for_name(category.as_str())
}

/// Absolute URL of the large variant of a provider icon.
pub fn icon_url(icon: &str) -> String {
    let large = icon.replace("64x64", "128x128");
    if large.starts_with("//") { format!("https:{large}") } else { large }
}

/// Eight-point compass label for a bearing in degrees.
pub fn wind_direction(deg: f64, lang: Lang) -> &'static str {
    let index = ((deg / 45.0).round() as i64).rem_euclid(8) as usize;
    match lang {
        Lang::Pt => COMPASS_PT[index],
        Lang::En => COMPASS_EN[index],
    }
}

/// m/s back to whole km/h, for display.
pub fn kmh(mps: f64) -> i64 {
    (mps * 3.6).round() as i64
}

/// `HH:MM` in `tz`, or [`MISSING_TIME`] for the `0` sentinel.
pub fn format_time<Tz: TimeZone>(epoch: i64, tz: &Tz) -> String {
    if epoch == 0 {
        return MISSING_TIME.to_string();
    }
    match tz.timestamp_opt(epoch, 0).single() {
        Some(dt) => format!("{:02}:{:02}", dt.hour(), dt.minute()),
        None => MISSING_TIME.to_string(),
    }
}

/// Long weekday, day and month, e.g. "domingo, 10 de março".
pub fn format_date<Tz: TimeZone>(epoch: i64, tz: &Tz, lang: Lang) -> String {
    let Some(dt) = tz.timestamp_opt(epoch, 0).single() else {
        return String::new();
    };
    let weekday = dt.weekday().num_days_from_monday() as usize;
    let month = dt.month0() as usize;
    match lang {
        Lang::Pt => format!("{}, {} de {}", WEEKDAYS_PT[weekday], dt.day(), MONTHS_PT[month]),
        Lang::En => format!("{}, {} {}", WEEKDAYS_EN[weekday], dt.day(), MONTHS_EN[month]),
    }
}

/// Short weekday and day, e.g. "dom 10".
pub fn format_short_date<Tz: TimeZone>(epoch: i64, tz: &Tz, lang: Lang) -> String {
    let Some(dt) = tz.timestamp_opt(epoch, 0).single() else {
        return String::new();
    };
    let weekday = dt.weekday().num_days_from_monday() as usize;
    let name = match lang {
        Lang::Pt => WEEKDAYS_PT[weekday],
        Lang::En => WEEKDAYS_EN[weekday],
    };
    let short: String = name.chars().take(3).collect();
    format!("{} {}", short, dt.day())
}
