// src/simplify/dates.rs

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Keys that may carry a date, in the order they are read.
/// Anything not in this list is never treated as a date, even if it looks like one.
pub const DATE_KEYS: [&str; 6] = [
    "CreationTime",
    "LastModificationTime",
    "ClientSubmitTime",
    "MessageDeliveryTime",
    "Last Modification Time",
    "PSETID_Task: DoItTime",
];

/// The exporter writes this when a date was never set.
pub const ZERO_DATE: &str = "0001-01-01T00:00:00";

const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// 26-Dec-24 11:52:18 AM
static EXPORT_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})-(\w{3})-([0-9]{2})\s+([0-9]{1,2}):([0-9]{2}):([0-9]{2})\s+([AP]M)")
        .expect("EXPORT_DATE_RE should compile")
});

// 2024-12-26T11:52:18[.fff][+hh:mm]
static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T([0-9]{2}):([0-9]{2}):([0-9]{2})")
        .expect("ISO_DATE_RE should compile")
});

/// A successfully parsed date: the string we would show for it and the
/// timestamp used for ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDate {
    pub canonical: String,
    pub timestamp: NaiveDateTime,
}

/// Oldest and newest timestamps of one record, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSpan {
    pub oldest: String,
    pub newest: String,
}

/// True for the values the exporter uses to mean "no date".
pub fn is_no_date(raw: &str) -> bool {
    raw.is_empty() || raw == "{}" || raw == ZERO_DATE
}

pub fn format_canonical(ts: &NaiveDateTime) -> String {
    ts.format(CANONICAL_FORMAT).to_string()
}

/// Parses one exported date string. Returns `None` for sentinels, unknown
/// shapes and calendar-invalid values alike.
pub fn parse_date(raw: &str) -> Option<ParsedDate> {
    if is_no_date(raw) {
        return None;
    }

    if let Some(caps) = EXPORT_DATE_RE.captures(raw) {
        let day: u32 = caps[1].parse().ok()?;
        let month = month_from_abbr(&caps[2])?;
        // Two-digit years are always taken as 20YY.
        let year = 2000 + caps[3].parse::<i32>().ok()?;
        let hour = to_24_hour(caps[4].parse().ok()?, &caps[7]);
        let minute: u32 = caps[5].parse().ok()?;
        let second: u32 = caps[6].parse().ok()?;

        let timestamp = build_timestamp(year, month, day, hour, minute, second)?;
        return Some(ParsedDate {
            canonical: format_canonical(&timestamp),
            timestamp,
        });
    }

    if let Some(caps) = ISO_DATE_RE.captures(raw) {
        let timestamp = build_timestamp(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
            caps[4].parse().ok()?,
            caps[5].parse().ok()?,
            caps[6].parse().ok()?,
        )?;
        // Fractional seconds and offsets are dropped from the timestamp but
        // the literal input is kept as-is.
        return Some(ParsedDate {
            canonical: raw.to_string(),
            timestamp,
        });
    }

    None
}

/// Oldest and newest of the given timestamps, or `None` when there are none.
pub fn reconcile(timestamps: &[NaiveDateTime]) -> Option<DateSpan> {
    let oldest = timestamps.iter().min()?;
    let newest = timestamps.iter().max()?;
    Some(DateSpan {
        oldest: format_canonical(oldest),
        newest: format_canonical(newest),
    })
}

fn build_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}

fn to_24_hour(hour: u32, meridiem: &str) -> u32 {
    match meridiem {
        "PM" if hour < 12 => hour + 12,
        "AM" if hour == 12 => 0,
        _ => hour,
    }
}

fn month_from_abbr(abbr: &str) -> Option<u32> {
    let month = match abbr {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => return None,
    };
    Some(month)
}
