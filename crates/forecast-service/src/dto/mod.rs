//! Data transfer objects.

pub mod forecast_dto;

pub use forecast_dto::*;
