//! Forecast DTOs.

use chrono::NaiveDate;
use forecast_core::WeatherForecast;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One day of a forecast as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecastResponse {
    /// Calendar date of the forecast.
    #[schema(example = "2025-01-02")]
    pub date: NaiveDate,
    /// Temperature in degrees Celsius.
    #[schema(example = 21)]
    pub temperature_c: i32,
    /// Short description of the weather.
    #[schema(example = "Mild")]
    pub summary: Option<String>,
    /// Temperature in degrees Fahrenheit.
    #[schema(example = 70)]
    pub temperature_f: i32,
}

impl From<&WeatherForecast> for WeatherForecastResponse {
    fn from(forecast: &WeatherForecast) -> Self {
        Self {
            date: forecast.date,
            temperature_c: forecast.temperature_c,
            summary: forecast.summary.clone(),
            temperature_f: forecast.temperature_f(),
        }
    }
}

impl From<WeatherForecast> for WeatherForecastResponse {
    fn from(forecast: WeatherForecast) -> Self {
        Self::from(&forecast)
    }
}
