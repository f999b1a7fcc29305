//! Forecast service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `forecast_service.rs`).

pub mod forecast_service_impl;

pub use forecast_service_impl::{ForecastServiceImpl, ForecastServiceImplParameters};
