//! Display formatting for derived statistics.
//!
//! Magnitudes are abbreviated with one decimal place and a unit suffix
//! (`65000000` -> `65M`, `1.2e12` -> `1.2T`). Absent values always render as
//! [`UNAVAILABLE`], never as an empty string.

use std::fmt::Display;

/// Placeholder shown wherever a value is absent.
pub const UNAVAILABLE: &str = "unavailable";

const UNITS: [&str; 7] = ["", "K", "M", "B", "T", "P", "E"];
const PRECISION: f64 = 10.0;

fn round_to_precision(value: f64) -> f64 {
    (value * PRECISION).round() / PRECISION
}

fn trim_fraction(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}

/// Abbreviate a finite number to one decimal place with a magnitude suffix.
pub fn abbreviate(value: f64) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }

    let mut magnitude = value.abs();
    let mut unit = 0;
    while magnitude >= 1000.0 && unit < UNITS.len() - 1 {
        magnitude /= 1000.0;
        unit += 1;
    }

    let mut rounded = round_to_precision(magnitude);
    // 999.96K rounds up to 1000K; carry into the next unit
    if rounded >= 1000.0 && unit < UNITS.len() - 1 {
        rounded = round_to_precision(rounded / 1000.0);
        unit += 1;
    }

    let sign = if value < 0.0 && rounded != 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, trim_fraction(rounded), UNITS[unit])
}

/// `$ ` followed by the abbreviated amount, or the bare placeholder.
pub fn currency(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("$ {}", abbreviate(v)),
        None => UNAVAILABLE.to_string(),
    }
}

/// Plain count without currency prefix. Zero is a present value.
pub fn count<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

/// Percentage figure as delivered, e.g. `-2.41`.
pub fn percent(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => v.to_string(),
        None => UNAVAILABLE.to_string(),
    }
}
