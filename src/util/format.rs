//! Date display helpers.
//!
//! Server payloads carry timestamps in a few shapes (RFC 3339 with an offset,
//! naive ISO date-times, bare dates). These are read the way a browser `Date`
//! constructor reads them and rendered in US short form:
//!
//! - offset-bearing and RFC 2822 values are instants;
//! - naive date-times are wall-clock time in the target zone;
//! - naive date-times inside a DST gap move forward by the gap;
//! - bare `YYYY-MM-DD` dates are UTC midnight, so they can render as the
//!   previous day west of Greenwich.
//!
//! Missing input renders as [`MISSING`]; anything unreadable as [`INVALID`].

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};

pub const MISSING: &str = "N/A";
pub const INVALID: &str = "Invalid Date";

const DATE_FORMAT: &str = "%-m/%-d/%Y";
const DATE_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const WALL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Date-only rendering in the browser's zone, e.g. `1/15/2024`.
pub fn format_date(input: Option<&str>) -> String {
    format_date_in(input, &Local)
}

/// Date and time rendering in the browser's zone, e.g. `1/15/2024, 2:05:09 PM`.
pub fn format_date_time(input: Option<&str>) -> String {
    format_date_time_in(input, &Local)
}

pub fn format_date_in<Tz>(input: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    render(input, tz, DATE_FORMAT)
}

pub fn format_date_time_in<Tz>(input: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    render(input, tz, DATE_TIME_FORMAT)
}

fn render<Tz>(input: Option<&str>, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let Some(input) = input.filter(|s| !s.is_empty()) else {
        return MISSING.to_owned();
    };
    match parse(input).and_then(|moment| moment.in_zone(tz)) {
        Some(dt) => dt.format(pattern).to_string(),
        None => INVALID.to_owned(),
    }
}

/// A parsed timestamp before it is pinned to a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Moment {
    Instant(DateTime<FixedOffset>),
    Wall(NaiveDateTime),
    UtcMidnight(NaiveDate),
}

impl Moment {
    fn in_zone<Tz: TimeZone>(self, tz: &Tz) -> Option<DateTime<Tz>> {
        match self {
            Self::Instant(dt) => Some(dt.with_timezone(tz)),
            Self::Wall(naive) => match tz.from_local_datetime(&naive) {
                // Wall times skipped by a spring-forward jump land just past it.
                LocalResult::None => tz.from_local_datetime(&(naive + TimeDelta::hours(1))).earliest(),
                resolved => resolved.earliest(),
            },
            Self::UtcMidnight(date) => Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)).with_timezone(tz)),
        }
    }
}

fn parse(input: &str) -> Option<Moment> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(Moment::Instant(dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(Moment::Instant(dt));
    }
    if let Some(dt) = OFFSET_FORMATS.iter().find_map(|f| DateTime::parse_from_str(input, f).ok()) {
        return Some(Moment::Instant(dt));
    }
    if let Some(naive) = WALL_FORMATS.iter().find_map(|f| NaiveDateTime::parse_from_str(input, f).ok()) {
        return Some(Moment::Wall(naive));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok().map(Moment::UtcMidnight)
}
