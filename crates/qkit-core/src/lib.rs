//! # qkit-core
//!
//! Pure text and date utilities behind the QKit side panel.
//!
//! Every function here is synchronous and side-effect free. The only
//! functions that read the system clock are the thin `today_in_timezone`
//! and `calc_from_today` wrappers; each has an `_at` variant that takes an
//! explicit "now" anchor instead.
//!
//! ## Modules
//!
//! - [`width`]: Full-width ⇄ half-width conversion of the printable ASCII band
//! - [`metrics`]: Character counts (with/without whitespace) and UTF-8 byte length
//! - [`timezone`]: `local` / `UTC` / `UTC±H` timezone parsing and clock display
//! - [`calendar`]: Today-in-timezone, day offsets, and calendar-aware date differences
//! - [`error`]: Error types

pub mod calendar;
pub mod error;
pub mod metrics;
pub mod timezone;
pub mod width;

pub use calendar::{
    add_days, calc_from_today, calc_from_today_at, date_difference, difference_between,
    format_iso_date, parse_iso_date, today_in_timezone, today_in_timezone_at, CalendarDate,
    DateDifference,
};
pub use error::QkitError;
pub use metrics::{count, count_bytes, count_with_spaces, count_without_spaces, TextCounts};
pub use timezone::{
    clock_reading, format_utc_offset, timezone_description, ClockReading, OffsetHours,
    TimezoneSpec,
};
pub use width::{full_width_char, half_width_char, to_full_width, to_half_width};
