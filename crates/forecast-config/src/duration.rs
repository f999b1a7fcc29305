//! Duration parsing for configuration values.
//!
//! Accepted forms:
//! - `[d.]hh:mm[:ss[.fffffff]]`, e.g. `00:05:00` or `1.12:00:00`
//! - a bare whole number, read as days (`2` is two days)
//! - a whole number with a unit: `500ms`, `30s`, `5m`, `2h`, `1d`

use forecast_core::{ForecastError, ForecastResult};
use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Seconds carry at most seven fractional digits (100ns ticks).
const MAX_FRACTION_DIGITS: usize = 7;

/// Parses a configuration duration string.
///
/// # Errors
///
/// Returns a configuration error for empty, negative or malformed values.
pub fn parse_duration(value: &str) -> ForecastResult<Duration> {
    let trimmed = value.trim();

    let parsed = if trimmed.is_empty() || trimmed.starts_with('-') {
        None
    } else if trimmed.contains(':') {
        parse_clock_form(trimmed)
    } else if trimmed.bytes().any(|b| b.is_ascii_alphabetic()) {
        parse_unit_form(trimmed)
    } else {
        parse_digits(trimmed)
            .and_then(|days| days.checked_mul(SECS_PER_DAY))
            .map(Duration::from_secs)
    };

    parsed.ok_or_else(|| {
        ForecastError::configuration(format!(
            "invalid duration '{value}': expected [d.]hh:mm[:ss[.fraction]], \
             a whole number of days, or a number with a unit (ms, s, m, h, d)"
        ))
    })
}

fn parse_clock_form(value: &str) -> Option<Duration> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let (days, hours) = match parts[0].split_once('.') {
        Some((days, hours)) => (parse_digits(days)?, parse_digits(hours)?),
        None => (0, parse_digits(parts[0])?),
    };
    let minutes = parse_digits(parts[1])?;
    let (seconds, nanos) = match parts.get(2) {
        Some(seconds) => parse_seconds(seconds)?,
        None => (0, 0),
    };

    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }

    let secs = days
        .checked_mul(SECS_PER_DAY)?
        .checked_add(hours * SECS_PER_HOUR + minutes * SECS_PER_MINUTE + seconds)?;
    Some(Duration::new(secs, nanos))
}

fn parse_seconds(value: &str) -> Option<(u64, u32)> {
    match value.split_once('.') {
        Some((whole, fraction)) => {
            if fraction.is_empty() || fraction.len() > MAX_FRACTION_DIGITS {
                return None;
            }
            let digits = u32::try_from(parse_digits(fraction)?).ok()?;
            let scale = 10u32.pow(9 - u32::try_from(fraction.len()).ok()?);
            Some((parse_digits(whole)?, digits * scale))
        }
        None => Some((parse_digits(value)?, 0)),
    }
}

fn parse_unit_form(value: &str) -> Option<Duration> {
    let split = value.find(|c: char| c.is_ascii_alphabetic())?;
    let (amount, unit) = value.split_at(split);
    let amount = parse_digits(amount.trim())?;

    match unit.trim().to_ascii_lowercase().as_str() {
        "ms" => Some(Duration::from_millis(amount)),
        "s" => Some(Duration::from_secs(amount)),
        "m" => amount.checked_mul(SECS_PER_MINUTE).map(Duration::from_secs),
        "h" => amount.checked_mul(SECS_PER_HOUR).map(Duration::from_secs),
        "d" => amount.checked_mul(SECS_PER_DAY).map(Duration::from_secs),
        _ => None,
    }
}

fn parse_digits(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
