//! Plain-text rendering of a weather report.

use chrono::{DateTime, TimeZone};
use tempo_core::{
    ForecastEntry, Lang, WeatherReport, daily_view, hourly_view,
    present::{format_date, format_short_date, format_time, kmh, wind_direction},
};

struct Labels {
    feels_like: &'static str,
    humidity: &'static str,
    wind: &'static str,
    pressure: &'static str,
    visibility: &'static str,
    clouds: &'static str,
    sunrise: &'static str,
    sunset: &'static str,
    next_hours: &'static str,
    next_days: &'static str,
    now: &'static str,
    tomorrow: &'static str,
}

const PT: Labels = Labels {
    feels_like: "Sensação",
    humidity: "Umidade",
    wind: "Vento",
    pressure: "Pressão",
    visibility: "Visibilidade",
    clouds: "Nuvens",
    sunrise: "Nascer do Sol",
    sunset: "Pôr do Sol",
    next_hours: "Próximas horas",
    next_days: "Previsão para os próximos dias",
    now: "Agora",
    tomorrow: "Amanhã",
};

const EN: Labels = Labels {
    feels_like: "Feels like",
    humidity: "Humidity",
    wind: "Wind",
    pressure: "Pressure",
    visibility: "Visibility",
    clouds: "Clouds",
    sunrise: "Sunrise",
    sunset: "Sunset",
    next_hours: "Next hours",
    next_days: "Upcoming days",
    now: "Now",
    tomorrow: "Tomorrow",
};

fn labels(lang: Lang) -> &'static Labels {
    match lang {
        Lang::Pt => &PT,
        Lang::En => &EN,
    }
}

pub fn report<Tz: TimeZone>(
    report: &WeatherReport,
    hours: usize,
    lang: Lang,
    now: &DateTime<Tz>,
) -> String {
    let l = labels(lang);
    let tz = now.timezone();
    let cw = &report.current;
    let mut lines = Vec::new();

    lines.push(format!("{}, {}", cw.name, cw.country));
    lines.push(format_date(cw.observed_at, &tz, lang));
    lines.push(format!(
        "{:.0}°C  {} ({})  ↑{:.0}° ↓{:.0}°",
        cw.temperature_c,
        cw.condition.description,
        cw.condition.category,
        cw.temp_max_c,
        cw.temp_min_c
    ));
    lines.push(format!(
        "{} {:.0}°  {} {}%  {} {} km/h {}",
        l.feels_like,
        cw.feels_like_c,
        l.humidity,
        cw.humidity_pct,
        l.wind,
        kmh(cw.wind.speed_mps),
        wind_direction(cw.wind.direction_deg, lang)
    ));
    lines.push(format!(
        "{} {:.0} hPa  {} {:.1} km  {} {}%",
        l.pressure,
        cw.pressure_hpa,
        l.visibility,
        cw.visibility_m / 1000.0,
        l.clouds,
        cw.cloud_pct
    ));
    lines.push(format!(
        "{} {}  {} {}",
        l.sunrise,
        format_time(cw.sunrise, &tz),
        l.sunset,
        format_time(cw.sunset, &tz)
    ));

    let next_hours = hourly_view(&report.forecast, hours);
    if !next_hours.is_empty() {
        lines.push(String::new());
        lines.push(l.next_hours.to_string());
        for (i, entry) in next_hours.iter().enumerate() {
            let when = if i == 0 { l.now.to_string() } else { format_time(entry.timestamp, &tz) };
            lines.push(hour_line(&when, entry));
        }
    }

    let days = daily_view(&report.forecast, true, now);
    if !days.is_empty() {
        lines.push(String::new());
        lines.push(l.next_days.to_string());
        for (i, entry) in days.iter().enumerate() {
            let when = if i == 0 {
                l.tomorrow.to_string()
            } else {
                format_short_date(entry.timestamp, &tz, lang)
            };
            lines.push(format!(
                "  {:<10} {:>3.0}° {:>3.0}°  {}  {}%  {} km/h",
                when,
                entry.temp_max_c,
                entry.temp_min_c,
                entry.condition.description,
                entry.humidity_pct,
                kmh(entry.wind.speed_mps)
            ));
        }
    }

    lines.join("\n")
}

fn hour_line(when: &str, entry: &ForecastEntry) -> String {
    let mut line =
        format!("  {:<6} {:>3.0}°  {}", when, entry.temperature_c, entry.condition.description);
    if entry.precipitation_probability > 0.0 {
        line.push_str(&format!("  {:.0}%", entry.precipitation_probability * 100.0));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempo_core::{provider::weatherapi::RawProviderResponse, to_current_weather, to_forecast};

    /// 2024-03-10 00:00:00 UTC, a Sunday.
    const DAY0: i64 = 1_710_028_800;

    fn raw() -> RawProviderResponse {
        let days: Vec<_> = (0..3)
            .map(|d| {
                let start = DAY0 + d * 86_400;
                let hours: Vec<_> = (0..24)
                    .map(|h| {
                        let chance = if h == 3 { 40 } else { 0 };
                        serde_json::json!({
                            "time_epoch": start + h * 3600,
                            "time": "",
                            "temp_c": 20.0,
                            "condition": {
                                "text": "Nublado",
                                "icon": "//x/64x64/day/119.png",
                                "code": 1006
                            },
                            "wind_kph": 18.0,
                            "wind_degree": 90,
                            "pressure_mb": 1010.0,
                            "humidity": 60,
                            "cloud": 80,
                            "feelslike_c": 20.0,
                            "chance_of_rain": chance,
                            "vis_km": 10.0
                        })
                    })
                    .collect();
                serde_json::json!({
                    "date": "",
                    "date_epoch": start,
                    "day": {
                        "maxtemp_c": 26.0,
                        "mintemp_c": 17.0,
                        "condition": { "text": "Nublado", "icon": "", "code": 1006 }
                    },
                    "astro": { "sunrise": "06:10 AM", "sunset": "Unknown" },
                    "hour": hours
                })
            })
            .collect();

        serde_json::from_value(serde_json::json!({
            "location": { "name": "Curitiba", "country": "Brazil", "lat": -25.4, "lon": -49.3 },
            "current": {
                "last_updated_epoch": DAY0 + 3600,
                "temp_c": 19.4,
                "condition": { "text": "Nublado", "icon": "//x/64x64/day/119.png", "code": 1006 },
                "wind_kph": 36.0,
                "wind_degree": 90,
                "pressure_mb": 1010.0,
                "humidity": 60,
                "cloud": 80,
                "feelslike_c": 19.0,
                "vis_km": 10.0
            },
            "forecast": { "forecastday": days }
        }))
        .unwrap()
    }

    fn sample_report(now: &DateTime<Utc>) -> WeatherReport {
        let raw = raw();
        WeatherReport {
            current: to_current_weather(&raw, now).unwrap(),
            forecast: to_forecast(&raw, now).unwrap(),
        }
    }

    #[test]
    fn renders_current_block_in_portuguese() {
        let now = DateTime::from_timestamp(DAY0 + 2 * 3600, 0).unwrap();
        let out = report(&sample_report(&now), 4, Lang::Pt, &now);

        assert!(out.starts_with("Curitiba, BR\n"));
        assert!(out.contains("domingo, 10 de março"));
        assert!(out.contains("Vento 36 km/h L"));
        assert!(out.contains("Visibilidade 10.0 km"));
        assert!(out.contains("Nascer do Sol 06:10  Pôr do Sol --:--"));
    }

    #[test]
    fn renders_hours_and_days() {
        let now = DateTime::from_timestamp(DAY0 + 2 * 3600, 0).unwrap();
        let out = report(&sample_report(&now), 4, Lang::En, &now);

        assert!(out.contains("Next hours\n  Now"));
        assert!(out.contains("  03:00   20°  Nublado  40%"));
        assert!(out.contains("Upcoming days\n  Tomorrow"));
        assert_eq!(out.lines().filter(|l| l.contains("km/h") && l.starts_with("  ")).count(), 2);
    }
}
