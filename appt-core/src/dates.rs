//! Instants are carried as epoch milliseconds everywhere outside the widgets.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt::Display;

/// Table cell format: `DD.MM.YYYY HH.mm`.
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y %H.%M";

/// Value format of an `<input type="datetime-local">`.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format used by the CSV fixtures and the CLI.
pub const FIXTURE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Anything a date picker can hand back.
pub trait DateLike {
    /// Milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> i64;
}

impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    fn epoch_millis(&self) -> i64 {
        self.timestamp_millis()
    }
}

/// Wall-clock time in the user's zone. Times skipped by a DST jump fall back to UTC.
impl DateLike for NaiveDateTime {
    fn epoch_millis(&self) -> i64 {
        Local
            .from_local_datetime(self)
            .earliest()
            .map(|d| d.timestamp_millis())
            .unwrap_or_else(|| self.and_utc().timestamp_millis())
    }
}

/// Format an instant for display in the given zone. Out-of-range values render empty.
pub fn format_instant<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Render an instant as a `datetime-local` input value.
pub fn to_input_value(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|utc| utc.with_timezone(&Local).format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse a `datetime-local` input value. Empty or malformed input clears the date.
pub fn parse_input_value(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(s, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Parse `YYYY-MM-DD HH:MM`, or a bare `YYYY-MM-DD` meaning midnight.
pub fn parse_datetime(s: &str) -> anyhow::Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, FIXTURE_FORMAT) {
        return Ok(dt);
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid date '{}': {}", s, e))?;
    Ok(date.and_time(chrono::NaiveTime::MIN))
}
