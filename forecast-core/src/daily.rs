//! Reduction of the 3-hour forecast series to one reading per day.

use std::collections::HashSet;

use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

use crate::model::{ForecastEntry, ForecastSample};

/// Number of days reported per city.
pub const DAYS: usize = 5;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Keep the first midday entry of each calendar day, in upstream order,
/// stopping after `max_days` distinct dates.
pub fn midday_samples(entries: &[ForecastEntry], max_days: usize) -> Vec<ForecastSample> {
    let mut seen = HashSet::new();
    let mut samples = Vec::with_capacity(max_days.min(entries.len()));

    for entry in entries {
        if samples.len() >= max_days {
            break;
        }

        let Ok(ts) = NaiveDateTime::parse_from_str(entry.timestamp.trim(), TIMESTAMP_FORMAT) else {
            debug!(timestamp = %entry.timestamp, "skipping forecast entry with unparseable timestamp");
            continue;
        };

        if !is_midday(&ts) || !seen.insert(ts.date()) {
            continue;
        }

        samples.push(ForecastSample {
            date: ts.date(),
            description: entry.description.clone(),
            max_temperature: round_celsius(entry.max_temperature),
        });
    }

    debug!(kept = samples.len(), total = entries.len(), "selected midday samples");
    samples
}

fn is_midday(ts: &NaiveDateTime) -> bool {
    (ts.hour(), ts.minute(), ts.second()) == (12, 0, 0)
}

/// Round half to even, the way the upstream's reference client does.
pub fn round_celsius(value: f64) -> i64 {
    value.round_ties_even() as i64
}
