//! Timezone selection and clock display.
//!
//! QKit only knows three kinds of timezone: the host's local zone, UTC, and
//! a whole-hour fixed offset from UTC written as `"UTC+9"` or `"UTC-5"`.
//! There are no IANA names and no DST rules; a fixed offset is exactly that.
//!
//! Strings are parsed into [`TimezoneSpec`] once, at the boundary, and all
//! internal logic works on the enum.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use serde::Serialize;

use crate::error::QkitError;

/// Westernmost whole-hour offset accepted by [`OffsetHours`].
pub const MIN_OFFSET_HOURS: i32 = -12;
/// Easternmost whole-hour offset accepted by [`OffsetHours`].
pub const MAX_OFFSET_HOURS: i32 = 14;

const SECONDS_PER_HOUR: i32 = 3600;

/// A whole-hour UTC offset in `MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetHours(i8);

impl OffsetHours {
    /// Validate an hour offset.
    ///
    /// # Errors
    ///
    /// Returns [`QkitError::InvalidTimezone`] if `hours` is outside
    /// `-12..=14`.
    pub fn new(hours: i32) -> Result<Self, QkitError> {
        if !(MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&hours) {
            return Err(QkitError::InvalidTimezone(format!(
                "offset {hours:+} hours is outside UTC{MIN_OFFSET_HOURS:+}..UTC{MAX_OFFSET_HOURS:+}"
            )));
        }
        Ok(Self(hours as i8))
    }

    /// The offset in hours.
    pub fn get(self) -> i32 {
        i32::from(self.0)
    }

    fn to_fixed(self) -> FixedOffset {
        // In range by construction; the fallback is never taken.
        FixedOffset::east_opt(self.get() * SECONDS_PER_HOUR).unwrap_or_else(|| Utc.fix())
    }
}

/// Which clock "today" and the displayed time are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimezoneSpec {
    /// The host machine's current offset.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A constant whole-hour shift from UTC.
    FixedOffset(OffsetHours),
}

impl TimezoneSpec {
    /// Build a fixed-offset spec from a raw hour count.
    ///
    /// # Errors
    ///
    /// Returns [`QkitError::InvalidTimezone`] if `hours` is out of range.
    pub fn fixed(hours: i32) -> Result<Self, QkitError> {
        OffsetHours::new(hours).map(TimezoneSpec::FixedOffset)
    }

    /// The UTC offset in effect for this spec at the instant `now`.
    ///
    /// Only [`TimezoneSpec::Local`] depends on `now` (the host zone may be
    /// observing DST).
    pub fn offset_at(&self, now: DateTime<Utc>) -> FixedOffset {
        match self {
            TimezoneSpec::Local => now.with_timezone(&Local).offset().fix(),
            TimezoneSpec::Utc => Utc.fix(),
            TimezoneSpec::FixedOffset(hours) => hours.to_fixed(),
        }
    }

    /// The instant `now` expressed as wall-clock time in this timezone.
    pub fn now_in(&self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        now.with_timezone(&self.offset_at(now))
    }
}

impl fmt::Display for TimezoneSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimezoneSpec::Local => f.write_str("local"),
            TimezoneSpec::Utc => f.write_str("UTC"),
            TimezoneSpec::FixedOffset(hours) => write!(f, "UTC{:+}", hours.get()),
        }
    }
}

impl FromStr for TimezoneSpec {
    type Err = QkitError;

    /// Parse `"local"`, `"UTC"`, or `"UTC±H"` (case-insensitive, surrounding
    /// whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(TimezoneSpec::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") {
            return Ok(TimezoneSpec::Utc);
        }

        let invalid = || {
            QkitError::InvalidTimezone(format!(
                "'{s}' (expected 'local', 'UTC', or 'UTC±H')"
            ))
        };

        let offset = trimmed
            .get(..3)
            .filter(|prefix| prefix.eq_ignore_ascii_case("utc"))
            .map(|_| &trimmed[3..])
            .ok_or_else(invalid)?;

        let (sign, digits) = match offset.as_bytes().first() {
            Some(b'+') => (1, &offset[1..]),
            Some(b'-') => (-1, &offset[1..]),
            _ => return Err(invalid()),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: i32 = digits.parse().map_err(|_| invalid())?;

        TimezoneSpec::fixed(sign * hours)
    }
}

impl Serialize for TimezoneSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── Clock display ───────────────────────────────────────────────────────────

/// The current time as shown in the side-panel clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockReading {
    /// Wall-clock time in the selected timezone (`"2026-03-15 23:05:09"`).
    pub datetime: String,
    /// The timezone as the user selected it (`"local"`, `"UTC"`, `"UTC+9"`).
    pub timezone: String,
    /// The UTC offset in effect (`"+09:00"`).
    pub utc_offset: String,
}

impl fmt::Display for ClockReading {
    /// `"2026-03-15 23:05:09 UTC+9 (UTC+09:00)"`; the local zone has no label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.datetime)?;
        if self.timezone != "local" {
            write!(f, " {}", self.timezone)?;
        }
        write!(f, " (UTC{})", self.utc_offset)
    }
}

/// Read the clock at instant `now` in timezone `spec`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use qkit_core::timezone::{clock_reading, TimezoneSpec};
///
/// let now = Utc.with_ymd_and_hms(2026, 3, 15, 14, 5, 9).unwrap();
/// let spec: TimezoneSpec = "UTC+9".parse().unwrap();
/// let reading = clock_reading(now, spec);
/// assert_eq!(reading.to_string(), "2026-03-15 23:05:09 UTC+9 (UTC+09:00)");
/// ```
pub fn clock_reading(now: DateTime<Utc>, spec: TimezoneSpec) -> ClockReading {
    let local = spec.now_in(now);
    ClockReading {
        datetime: local.format("%Y-%m-%d %H:%M:%S").to_string(),
        timezone: spec.to_string(),
        utc_offset: format_utc_offset(*local.offset()),
    }
}

/// Sentence explaining which timezone "today" is computed in.
pub fn timezone_description(now: DateTime<Utc>, spec: TimezoneSpec) -> String {
    format!(
        "Today is based on {spec} timezone (UTC{})",
        format_utc_offset(spec.offset_at(now))
    )
}

/// Format a UTC offset as a string (e.g., "-05:00", "+09:00").
pub fn format_utc_offset(offset: FixedOffset) -> String {
    let offset_secs = offset.local_minus_utc();
    let sign = if offset_secs >= 0 { "+" } else { "-" };
    let abs_secs = offset_secs.unsigned_abs();
    let hours = abs_secs / 3600;
    let minutes = (abs_secs % 3600) / 60;
    format!("{sign}{hours:02}:{minutes:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        // Sunday, March 15, 2026, 14:05:09 UTC
        Utc.with_ymd_and_hms(2026, 3, 15, 14, 5, 9).unwrap()
    }

    // ── parsing ─────────────────────────────────────────────────────────

    #[test]
    fn test_parse_local_and_utc() {
        assert_eq!("local".parse::<TimezoneSpec>().unwrap(), TimezoneSpec::Local);
        assert_eq!("UTC".parse::<TimezoneSpec>().unwrap(), TimezoneSpec::Utc);
        assert_eq!(" utc ".parse::<TimezoneSpec>().unwrap(), TimezoneSpec::Utc);
    }

    #[test]
    fn test_parse_fixed_offsets() {
        assert_eq!(
            "UTC+9".parse::<TimezoneSpec>().unwrap(),
            TimezoneSpec::fixed(9).unwrap()
        );
        assert_eq!(
            "UTC-5".parse::<TimezoneSpec>().unwrap(),
            TimezoneSpec::fixed(-5).unwrap()
        );
        assert_eq!(
            "UTC+14".parse::<TimezoneSpec>().unwrap(),
            TimezoneSpec::fixed(14).unwrap()
        );
        assert_eq!(
            "UTC-12".parse::<TimezoneSpec>().unwrap(),
            TimezoneSpec::fixed(-12).unwrap()
        );
        assert_eq!(
            "UTC+09".parse::<TimezoneSpec>().unwrap(),
            TimezoneSpec::fixed(9).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in [
            "", "Asia/Seoul", "UTC9", "UTC+", "UTC+9:30", "UTC+5.5", "GMT+9", "UTC+x",
            "UTC+99999999999",
        ] {
            let err = bad.parse::<TimezoneSpec>().unwrap_err();
            assert!(err.is_invalid_input(), "{bad}");
            assert!(err.to_string().contains("Invalid timezone"), "got: {err}");
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_offsets() {
        assert!("UTC+15".parse::<TimezoneSpec>().is_err());
        assert!("UTC-13".parse::<TimezoneSpec>().is_err());
    }

    #[test]
    fn test_parse_handles_non_ascii_without_panicking() {
        assert!("안녕하세요".parse::<TimezoneSpec>().is_err());
        assert!("U한".parse::<TimezoneSpec>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for label in ["local", "UTC", "UTC+9", "UTC-5", "UTC+0"] {
            let spec: TimezoneSpec = label.parse().unwrap();
            assert_eq!(spec.to_string(), label);
        }
    }

    // ── offsets ─────────────────────────────────────────────────────────

    #[test]
    fn test_offset_at_fixed_and_utc() {
        assert_eq!(TimezoneSpec::Utc.offset_at(anchor()).local_minus_utc(), 0);
        let kst = TimezoneSpec::fixed(9).unwrap();
        assert_eq!(kst.offset_at(anchor()).local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_offset_at_local_matches_host() {
        let expected = anchor().with_timezone(&Local).offset().fix();
        assert_eq!(TimezoneSpec::Local.offset_at(anchor()), expected);
    }

    #[test]
    fn test_now_in_crosses_midnight() {
        // 14:05 UTC is already the next morning in UTC+14.
        let kiribati = TimezoneSpec::fixed(14).unwrap();
        let local = kiribati.now_in(anchor());
        assert_eq!(local.format("%Y-%m-%d %H:%M").to_string(), "2026-03-16 04:05");
    }

    #[test]
    fn test_format_utc_offset() {
        let east = FixedOffset::east_opt(9 * 3600).unwrap();
        let west = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(format_utc_offset(east), "+09:00");
        assert_eq!(format_utc_offset(west), "-05:30");
        assert_eq!(format_utc_offset(Utc.fix()), "+00:00");
    }

    // ── clock display ───────────────────────────────────────────────────

    #[test]
    fn test_clock_reading_utc() {
        let reading = clock_reading(anchor(), TimezoneSpec::Utc);
        assert_eq!(reading.datetime, "2026-03-15 14:05:09");
        assert_eq!(reading.to_string(), "2026-03-15 14:05:09 UTC (UTC+00:00)");
    }

    #[test]
    fn test_clock_reading_negative_offset() {
        let reading = clock_reading(anchor(), TimezoneSpec::fixed(-5).unwrap());
        assert_eq!(reading.utc_offset, "-05:00");
        assert_eq!(reading.to_string(), "2026-03-15 09:05:09 UTC-5 (UTC-05:00)");
    }

    #[test]
    fn test_clock_reading_local_has_no_label() {
        let reading = clock_reading(anchor(), TimezoneSpec::Local);
        assert_eq!(reading.timezone, "local");
        assert!(!reading.to_string().contains("local"));
        assert!(reading.to_string().ends_with(&format!("(UTC{})", reading.utc_offset)));
    }

    #[test]
    fn test_timezone_description() {
        assert_eq!(
            timezone_description(anchor(), TimezoneSpec::Utc),
            "Today is based on UTC timezone (UTC+00:00)"
        );
        assert_eq!(
            timezone_description(anchor(), TimezoneSpec::fixed(9).unwrap()),
            "Today is based on UTC+9 timezone (UTC+09:00)"
        );
        assert!(timezone_description(anchor(), TimezoneSpec::Local)
            .starts_with("Today is based on local timezone (UTC"));
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&TimezoneSpec::fixed(-3).unwrap()).unwrap();
        assert_eq!(json, "\"UTC-3\"");
    }
}
