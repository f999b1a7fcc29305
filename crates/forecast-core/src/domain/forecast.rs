//! Weather forecast entity.

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Short descriptions a generated forecast may carry.
pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// Lowest generated temperature in Celsius (inclusive).
pub const MIN_TEMPERATURE_C: i32 = -20;

/// Upper bound of generated temperatures in Celsius (exclusive).
pub const MAX_TEMPERATURE_C: i32 = 55;

/// Number of days covered by one forecast.
pub const FORECAST_DAYS: u32 = 5;

/// A single day's forecast.
///
/// The Fahrenheit temperature is derived on demand. It is written out when the
/// entry is serialized but ignored when one is read back, so a cached entry
/// can never carry an inconsistent value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: Option<String>,
}

impl WeatherForecast {
    /// Creates a forecast entry.
    #[must_use]
    pub fn new(date: NaiveDate, temperature_c: i32, summary: Option<String>) -> Self {
        Self {
            date,
            temperature_c,
            summary,
        }
    }

    /// Temperature in Fahrenheit, `32 + round(C / 0.5556)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn temperature_f(&self) -> i32 {
        32 + (f64::from(self.temperature_c) / 0.5556).round() as i32
    }
}

impl Serialize for WeatherForecast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WeatherForecast", 4)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("temperatureC", &self.temperature_c)?;
        state.serialize_field("summary", &self.summary)?;
        state.serialize_field("temperatureF", &self.temperature_f())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(temperature_c: i32) -> WeatherForecast {
        WeatherForecast::new(
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            temperature_c,
            Some("Mild".to_string()),
        )
    }

    #[test]
    fn test_fahrenheit_conversion() {
        assert_eq!(entry(0).temperature_f(), 32);
        assert_eq!(entry(100).temperature_f(), 212);
        assert_eq!(entry(-20).temperature_f(), -4);
        assert_eq!(entry(25).temperature_f(), 77);
        assert_eq!(entry(37).temperature_f(), 99);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(entry(25)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2025-01-02",
                "temperatureC": 25,
                "summary": "Mild",
                "temperatureF": 77
            })
        );
    }

    #[test]
    fn test_stored_fahrenheit_is_ignored_on_read() {
        let json = r#"{"date":"2025-01-02","temperatureC":25,"summary":"Mild","temperatureF":-1000}"#;
        let parsed: WeatherForecast = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, entry(25));
        assert_eq!(parsed.temperature_f(), 77);
    }

    #[test]
    fn test_null_summary() {
        let json = r#"{"date":"2025-01-02","temperatureC":3,"summary":null}"#;
        let parsed: WeatherForecast = serde_json::from_str(json).unwrap();
        assert!(parsed.summary.is_none());
        let out = serde_json::to_value(&parsed).unwrap();
        assert!(out["summary"].is_null());
    }
}
