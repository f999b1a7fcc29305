//! Result type aliases for the forecast service.

use crate::ForecastError;

/// A specialized `Result` type for forecast operations.
pub type ForecastResult<T> = Result<T, ForecastError>;
