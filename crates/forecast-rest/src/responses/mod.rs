//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forecast_core::{ErrorResponse, ForecastError};
use tracing::error;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub ForecastError);

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = self.0.error_code(), "Request failed: {}", self.0);
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}
