use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveTime, TimeZone};
use regex::Regex;

static CLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(AM|PM)").expect("clock pattern must compile")
});

/// Parse a 12-hour clock string such as `"06:45 AM"` into epoch seconds on
/// today's local date.
///
/// Returns `0` when the text does not match; callers treat `0` as
/// "not available". Out-of-range fields (e.g. `"13:00 PM"` or minutes above
/// 59) also return `0`.
pub fn parse_clock_time(text: &str) -> i64 {
    parse_clock_time_on(text, &Local::now())
}

/// Same as [`parse_clock_time`], anchored to the calendar date of `today` in
/// its own time zone.
pub fn parse_clock_time_on<Tz: TimeZone>(text: &str, today: &DateTime<Tz>) -> i64 {
    let Some(time) = parse_clock(text) else {
        tracing::debug!(text, "unparseable clock string");
        return 0;
    };

    let local = today.date_naive().and_time(time);
    match today.timezone().from_local_datetime(&local).earliest() {
        Some(dt) => dt.timestamp(),
        None => {
            tracing::debug!(text, %local, "clock time does not exist in time zone");
            0
        }
    }
}

fn parse_clock(text: &str) -> Option<NaiveTime> {
    let caps = CLOCK_PATTERN.captures(text)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let pm = caps[3].eq_ignore_ascii_case("PM");

    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 15, 27, 42).unwrap()
    }

    fn parse_utc(text: &str) -> DateTime<Utc> {
        let ts = parse_clock_time_on(text, &anchor());
        DateTime::from_timestamp(ts, 0).unwrap()
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(parse_utc("12:00 AM").hour(), 0);
        assert_eq!(parse_utc("12:00 PM").hour(), 12);
    }

    #[test]
    fn morning_keeps_hour_and_minute() {
        let dt = parse_utc("06:45 AM");
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (6, 45, 0));
    }

    #[test]
    fn afternoon_adds_twelve() {
        let dt = parse_utc("07:30 PM");
        assert_eq!((dt.hour(), dt.minute()), (19, 30));
    }

    #[test]
    fn single_digit_hour_and_lowercase_meridiem() {
        let dt = parse_utc("5:05 pm");
        assert_eq!((dt.hour(), dt.minute()), (17, 5));
    }

    #[test]
    fn anchored_to_given_date() {
        let dt = parse_utc("06:45 AM");
        assert_eq!(dt.date_naive(), anchor().date_naive());
    }

    #[test]
    fn non_matching_input_is_zero() {
        assert_eq!(parse_clock_time_on("noon", &anchor()), 0);
        assert_eq!(parse_clock_time_on("", &anchor()), 0);
        assert_eq!(parse_clock_time_on("06:45", &anchor()), 0);
        assert_eq!(parse_clock_time("No moonrise"), 0);
    }

    #[test]
    fn out_of_range_hour_is_zero() {
        assert_eq!(parse_clock_time_on("13:00 PM", &anchor()), 0);
    }

    #[test]
    fn out_of_range_minute_is_zero() {
        assert_eq!(parse_clock_time_on("06:75 AM", &anchor()), 0);
        assert_eq!(parse_clock_time_on("11:60 PM", &anchor()), 0);
    }

    #[test]
    fn local_hour_matches_for_every_valid_hour() {
        for h12 in 1..=12u32 {
            for (meridiem, pm) in [("AM", false), ("PM", true)] {
                let text = format!("{h12:02}:15 {meridiem}");
                let ts = parse_clock_time(&text);
                let expected = match (h12, pm) {
                    (12, false) => 0,
                    (12, true) => 12,
                    (h, true) => h + 12,
                    (h, false) => h,
                };
                // Skip hours swallowed by a DST gap on the test machine.
                if ts == 0 {
                    continue;
                }
                let local = Local.timestamp_opt(ts, 0).unwrap();
                assert_eq!(local.hour(), expected, "{text}");
                assert_eq!(local.minute(), 15, "{text}");
            }
        }
    }
}
