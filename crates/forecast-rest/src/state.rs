//! Application state for Axum handlers.

use forecast_service::ForecastService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub forecast_service: Arc<dyn ForecastService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(forecast_service: Arc<dyn ForecastService>) -> Self {
        Self { forecast_service }
    }

    /// Creates the application state by resolving services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn ForecastService>,
    {
        Self::new(module.resolve())
    }
}
