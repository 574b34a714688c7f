//! Aggregation of raw events into the daily frequency series.

use crate::config::DateRange;
use crate::events::event::EarthquakeEvent;
use crate::frequency::error::SchemaError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Number of events observed on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u32,
}

/// Builds the ordered daily frequency series for `range` from `events`.
///
/// Every event must carry a `time` and a `mag` field and the timestamp must
/// parse; otherwise aggregation fails with a [`SchemaError`]. Events dated
/// outside the range are silently excluded. The result covers every date in
/// the range in ascending order, zero-filled where no events occurred, so its
/// length is always `range.num_days()`.
pub fn daily_series(
    events: &[EarthquakeEvent],
    range: &DateRange,
) -> Result<Vec<DailyCount>, SchemaError> {
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();

    for (index, event) in events.iter().enumerate() {
        let raw_time = event
            .time
            .as_deref()
            .ok_or(SchemaError::MissingField {
                field: "time",
                index,
            })?;
        if event.mag.is_none() {
            return Err(SchemaError::MissingField {
                field: "mag",
                index,
            });
        }
        let date = event_date(raw_time, index)?;
        if range.contains(date) {
            *per_day.entry(date).or_insert(0) += 1;
        }
    }

    Ok(range
        .iter_days()
        .map(|date| DailyCount {
            date,
            count: per_day.get(&date).copied().unwrap_or(0),
        })
        .collect())
}

/// Parses an event timestamp and truncates it to its calendar date.
///
/// Accepts RFC 3339 (the API's format) and falls back to a timezone-naive
/// ISO 8601 form. The date is taken in the timestamp's own offset.
fn event_date(raw: &str, index: usize) -> Result<NaiveDate, SchemaError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.date_naive()),
        Err(rfc_err) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.date())
            .map_err(|_| SchemaError::InvalidTimestamp {
                value: raw.to_string(),
                index,
                source: rfc_err,
            }),
    }
}
