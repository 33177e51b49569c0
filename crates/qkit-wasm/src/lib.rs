//! WASM bindings for the QKit side panel.
//!
//! Exported names match what the side-panel script calls, so this module
//! can replace the script's own utilities. Failures are thrown as JS
//! `Error`s carrying the [`qkit_core::QkitError`] message.
//!
//! Each fallible export is a thin wrapper over a helper that returns
//! [`qkit_core::error::Result`]. Helpers that need the clock take it as a
//! `now` argument.

use chrono::{DateTime, Utc};
use qkit_core::error::Result as CoreResult;
use qkit_core::{QkitError, TimezoneSpec};
use wasm_bindgen::prelude::*;

fn to_js(e: QkitError) -> JsError {
    JsError::new(&e.to_string())
}

// ── Text ────────────────────────────────────────────────────────────────────

#[wasm_bindgen(js_name = toHalfWidth)]
pub fn to_half_width(text: &str) -> String {
    qkit_core::to_half_width(text)
}

#[wasm_bindgen(js_name = toFullWidth)]
pub fn to_full_width(text: &str) -> String {
    qkit_core::to_full_width(text)
}

#[wasm_bindgen(js_name = countWithSpaces)]
pub fn count_with_spaces(text: &str) -> usize {
    qkit_core::count_with_spaces(text)
}

#[wasm_bindgen(js_name = countWithoutSpaces)]
pub fn count_without_spaces(text: &str) -> usize {
    qkit_core::count_without_spaces(text)
}

#[wasm_bindgen(js_name = countBytes)]
pub fn count_bytes(text: &str) -> usize {
    qkit_core::count_bytes(text)
}

// ── Dates ───────────────────────────────────────────────────────────────────

/// Today in `timezone` plus `days`, as `YYYY-MM-DD`.
#[wasm_bindgen(js_name = calcFromToday)]
pub fn calc_from_today(days: i32, timezone: &str) -> Result<String, JsError> {
    calc_from_today_at(Utc::now(), days, timezone).map_err(to_js)
}

fn calc_from_today_at(now: DateTime<Utc>, days: i32, timezone: &str) -> CoreResult<String> {
    let spec = timezone.parse::<TimezoneSpec>()?;
    qkit_core::calc_from_today_at(now, i64::from(days), spec)
}

/// Human-readable difference, e.g. `"11 months, 30 days"`.
#[wasm_bindgen(js_name = dateDifference)]
pub fn date_difference(date1: &str, date2: &str) -> Result<String, JsError> {
    date_difference_text(date1, date2).map_err(to_js)
}

fn date_difference_text(date1: &str, date2: &str) -> CoreResult<String> {
    qkit_core::date_difference(date1, date2).map(|d| d.human_readable)
}

/// Today in `timezone`, as `YYYY-MM-DD`.
#[wasm_bindgen(js_name = getTodayInTimezone)]
pub fn get_today_in_timezone(timezone: &str) -> Result<String, JsError> {
    today_at(Utc::now(), timezone).map_err(to_js)
}

fn today_at(now: DateTime<Utc>, timezone: &str) -> CoreResult<String> {
    let spec = timezone.parse::<TimezoneSpec>()?;
    Ok(qkit_core::format_iso_date(qkit_core::today_in_timezone_at(now, spec)))
}

/// Validate a `YYYY-MM-DD` date and return it trimmed.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: &str) -> Result<String, JsError> {
    normalize_date(date).map_err(to_js)
}

fn normalize_date(date: &str) -> CoreResult<String> {
    qkit_core::parse_iso_date(date).map(qkit_core::format_iso_date)
}

// ── Clock ───────────────────────────────────────────────────────────────────

/// The clock line, e.g. `"2026-03-15 23:05:09 UTC+9 (UTC+09:00)"`.
#[wasm_bindgen(js_name = formatClock)]
pub fn format_clock(timezone: &str) -> Result<String, JsError> {
    clock_at(Utc::now(), timezone).map_err(to_js)
}

fn clock_at(now: DateTime<Utc>, timezone: &str) -> CoreResult<String> {
    let spec = timezone.parse::<TimezoneSpec>()?;
    Ok(qkit_core::clock_reading(now, spec).to_string())
}

#[wasm_bindgen(js_name = describeTimezone)]
pub fn describe_timezone(timezone: &str) -> Result<String, JsError> {
    describe_timezone_at(Utc::now(), timezone).map_err(to_js)
}

fn describe_timezone_at(now: DateTime<Utc>, timezone: &str) -> CoreResult<String> {
    let spec = timezone.parse::<TimezoneSpec>()?;
    Ok(qkit_core::timezone_description(now, spec))
}
