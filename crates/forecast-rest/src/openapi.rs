//! OpenAPI documentation configuration.

use crate::controllers::health_controller::HealthResponse;
use forecast_core::ErrorResponse;
use forecast_service::WeatherForecastResponse;
use utoipa::OpenApi;

/// OpenAPI documentation for the forecast API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather Forecast API",
        version = "1.0.0",
        description = "Five-day weather forecasts served through a Redis cache",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::forecast_controller::get_weather_forecast,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            WeatherForecastResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "forecast", description = "Weather forecast endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
