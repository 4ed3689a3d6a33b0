use chrono::{DateTime, NaiveDate, TimeZone, Timelike};

use crate::model::{ForecastEntry, ForecastList};

/// Upper bound on days returned by [`daily_view`].
pub const MAX_DAILY_ENTRIES: usize = 5;

const MIDDAY_HOUR: i64 = 12;

/// Pick one entry per calendar date, the one whose hour is closest to noon.
///
/// Dates are taken in the time zone of `now`, which also defines "today"
/// for `exclude_today`. Output follows the order in which dates first
/// appear in the list and is not re-sorted. Ties keep the earlier entry.
pub fn daily_view<Tz: TimeZone>(
    list: &ForecastList,
    exclude_today: bool,
    now: &DateTime<Tz>,
) -> Vec<ForecastEntry> {
    let tz = now.timezone();
    let today = now.date_naive();

    // (date, distance from noon, entry) in first-seen order
    let mut buckets: Vec<(NaiveDate, i64, &ForecastEntry)> = Vec::new();

    for entry in &list.entries {
        let Some(local) = tz.timestamp_opt(entry.timestamp, 0).single() else {
            tracing::debug!(timestamp = entry.timestamp, "skipping unrepresentable timestamp");
            continue;
        };
        let date = local.date_naive();
        if exclude_today && date == today {
            continue;
        }

        let distance = (i64::from(local.hour()) - MIDDAY_HOUR).abs();
        match buckets.iter().position(|(d, _, _)| *d == date) {
            Some(i) if distance < buckets[i].1 => buckets[i] = (date, distance, entry),
            Some(_) => {}
            None => buckets.push((date, distance, entry)),
        }
    }

    buckets
        .into_iter()
        .take(MAX_DAILY_ENTRIES)
        .map(|(_, _, entry)| entry.clone())
        .collect()
}

/// The first `count` entries of the list.
pub fn hourly_view(list: &ForecastList, count: usize) -> &[ForecastEntry] {
    &list.entries[..count.min(list.entries.len())]
}
