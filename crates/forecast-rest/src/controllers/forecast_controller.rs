//! Weather forecast controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use forecast_service::WeatherForecastResponse;
use tracing::debug;

/// Creates the forecast router.
pub fn router() -> Router<AppState> {
    Router::new().route("/weatherforecast/:city", get(get_weather_forecast))
}

/// Get the five-day forecast for a city.
#[utoipa::path(
    get,
    path = "/weatherforecast/{city}",
    operation_id = "GetWeatherForecast",
    tag = "forecast",
    params(
        ("city" = String, Path, description = "City name, used verbatim and case-sensitively as the cache key")
    ),
    responses(
        (status = 200, description = "Forecast for the next five days", body = [WeatherForecastResponse]),
        (status = 500, description = "Cache, serialization or configuration failure", body = forecast_core::ErrorResponse)
    )
)]
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> ApiResult<Vec<WeatherForecastResponse>> {
    debug!("Forecast request: {}", city);

    let forecast = state.forecast_service.get_forecast(&city).await?;
    ok(forecast)
}
