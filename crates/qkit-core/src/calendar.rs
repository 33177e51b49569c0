//! Date arithmetic for the day calculator.
//!
//! Provides "today" in a chosen timezone, signed day offsets, ISO 8601 date
//! formatting, and a calendar-aware difference between two dates.
//!
//! The `_at` variants take the "now" anchor explicitly and are fully
//! deterministic; the plain variants read `Utc::now()` and delegate to them.
//!
//! # Functions
//!
//! - [`today_in_timezone`]: Current calendar date in a [`TimezoneSpec`]
//! - [`add_days`]: Shift a date by a signed number of days
//! - [`calc_from_today`]: Today plus N days, formatted as `YYYY-MM-DD`
//! - [`date_difference`]: Elapsed days / years-months-days between two dates

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use serde::Serialize;

use crate::error::{QkitError, Result};
use crate::timezone::TimezoneSpec;

/// A civil (year, month, day) date with no time or zone attached.
pub type CalendarDate = NaiveDate;

/// Spans of up to this many days are reported as a plain day count.
const DAYS_ONLY_THRESHOLD: i64 = 31;

/// Years that fit the four-digit `YYYY` field.
const ISO_YEARS: RangeInclusive<i32> = 0..=9999;

// ── today_in_timezone ───────────────────────────────────────────────────────

/// The current calendar date in `spec`, read from the system clock.
pub fn today_in_timezone(spec: TimezoneSpec) -> CalendarDate {
    today_in_timezone_at(Utc::now(), spec)
}

/// The calendar date of the instant `now` as seen in `spec`.
///
/// A fixed offset is applied to the instant, not to the date fields, so
/// `23:30 UTC` in `UTC+9` is correctly the next day.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use qkit_core::calendar::{format_iso_date, today_in_timezone_at};
/// use qkit_core::timezone::TimezoneSpec;
///
/// let now = Utc.with_ymd_and_hms(2026, 12, 31, 20, 0, 0).unwrap();
/// let seoul = TimezoneSpec::fixed(9).unwrap();
/// assert_eq!(format_iso_date(today_in_timezone_at(now, seoul)), "2027-01-01");
/// ```
pub fn today_in_timezone_at(now: DateTime<Utc>, spec: TimezoneSpec) -> CalendarDate {
    spec.now_in(now).date_naive()
}

// ── add_days ────────────────────────────────────────────────────────────────

/// The date `delta` days after `date` (before it, if `delta` is negative).
///
/// # Errors
///
/// Returns [`QkitError::OutOfRange`] if the result falls outside years
/// 0000-9999, which `YYYY-MM-DD` cannot express.
pub fn add_days(date: CalendarDate, delta: i64) -> Result<CalendarDate> {
    TimeDelta::try_days(delta)
        .and_then(|d| date.checked_add_signed(d))
        .filter(|shifted| ISO_YEARS.contains(&shifted.year()))
        .ok_or_else(|| {
            QkitError::OutOfRange(format!(
                "{} {:+} days",
                format_iso_date(date),
                delta
            ))
        })
}

/// Today in `timezone` plus `days`, as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`QkitError::InvalidTimezone`] if `timezone` is not `local`,
/// `UTC`, or `UTC±H`, or [`QkitError::OutOfRange`] for absurd offsets.
pub fn calc_from_today(days: i64, timezone: &str) -> Result<String> {
    let spec: TimezoneSpec = timezone.parse()?;
    calc_from_today_at(Utc::now(), days, spec)
}

/// Deterministic form of [`calc_from_today`].
pub fn calc_from_today_at(now: DateTime<Utc>, days: i64, spec: TimezoneSpec) -> Result<String> {
    let today = today_in_timezone_at(now, spec);
    add_days(today, days).map(format_iso_date)
}

// ── ISO dates ───────────────────────────────────────────────────────────────

/// Format as `YYYY-MM-DD` with a four-digit year.
pub fn format_iso_date(date: CalendarDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`QkitError::MissingDate`] for empty input and
/// [`QkitError::InvalidDate`] for anything else that does not parse.
pub fn parse_iso_date(s: &str) -> Result<CalendarDate> {
    let s = s.trim();
    if s.is_empty() {
        return Err(QkitError::MissingDate("a date is required".to_string()));
    }
    if !is_iso_date_shape(s) {
        return Err(QkitError::InvalidDate(format!("'{s}': expected YYYY-MM-DD")));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| QkitError::InvalidDate(format!("'{s}': {e}")))
}

/// Exactly `DDDD-DD-DD`; chrono alone also takes `2024-1-5` and `+2024-01-05`.
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

// ── date_difference ─────────────────────────────────────────────────────────

/// Elapsed calendar time between two dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateDifference {
    /// The earlier date (`YYYY-MM-DD`).
    pub start: String,
    /// The later date (`YYYY-MM-DD`).
    pub end: String,
    /// Whole days from `start` to `end`.
    pub total_days: i64,
    /// Whole years in the calendar breakdown.
    pub years: i64,
    /// Remaining whole months (0-11).
    pub months: i64,
    /// Remaining days.
    pub days: i64,
    /// Display form: `"14 days"`, `"11 months, 30 days"`, `"0 days"`.
    pub human_readable: String,
}

/// Compute the difference between two `YYYY-MM-DD` dates.
///
/// Argument order does not matter. Spans of 31 days or fewer read as a day
/// count (`"14 days"`); longer spans read as years, months and days with
/// zero parts dropped (`"1 year, 2 months"`).
///
/// # Errors
///
/// Returns [`QkitError::MissingDate`] if either date is empty, or
/// [`QkitError::InvalidDate`] if either cannot be parsed.
///
/// # Examples
///
/// ```
/// use qkit_core::calendar::date_difference;
///
/// let diff = date_difference("2024-01-01", "2024-12-31").unwrap();
/// assert_eq!(diff.human_readable, "11 months, 30 days");
/// assert_eq!(diff.total_days, 365);
/// ```
pub fn date_difference(date1: &str, date2: &str) -> Result<DateDifference> {
    let d1 = parse_iso_date(date1)?;
    let d2 = parse_iso_date(date2)?;
    Ok(difference_between(d1, d2))
}

/// Difference between two already-parsed dates, in either order.
pub fn difference_between(a: CalendarDate, b: CalendarDate) -> DateDifference {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    let total_days = (end - start).num_days();
    let (years, months, days) = calendar_breakdown(start, end);

    let human_readable = if total_days == 0 {
        "0 days".to_string()
    } else if total_days <= DAYS_ONLY_THRESHOLD {
        plural(total_days, "day")
    } else {
        format_ymd(years, months, days)
    };

    DateDifference {
        start: format_iso_date(start),
        end: format_iso_date(end),
        total_days,
        years,
        months,
        days,
        human_readable,
    }
}

/// Years, months and days from `start` to `end` (`start <= end`).
///
/// A negative day count borrows the length of the month before `end`'s
/// month; a negative month count borrows twelve months from the years.
fn calendar_breakdown(start: CalendarDate, end: CalendarDate) -> (i64, i64, i64) {
    let mut years = i64::from(end.year() - start.year());
    let mut months = i64::from(end.month()) - i64::from(start.month());
    let mut days = i64::from(end.day()) - i64::from(start.day());

    if days < 0 {
        days += i64::from(days_in_previous_month(end));
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    // Jan 31 -> Mar 1 style spans still come up short after one borrow;
    // the remainder is dropped rather than borrowed again.
    (years, months, days.max(0))
}

/// Length of the month immediately before `date`'s month.
fn days_in_previous_month(date: CalendarDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

fn format_ymd(years: i64, months: i64, days: i64) -> String {
    let parts: Vec<String> = [(years, "year"), (months, "month"), (days, "day")]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| plural(n, unit))
        .collect();

    if parts.is_empty() {
        "0 days".to_string()
    } else {
        parts.join(", ")
    }
}

fn plural(n: i64, unit: &str) -> String {
    format!("{} {}{}", n, unit, if n == 1 { "" } else { "s" })
}
