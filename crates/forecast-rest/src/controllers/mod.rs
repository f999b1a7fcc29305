//! REST API controllers.

pub mod forecast_controller;
pub mod health_controller;

pub use health_controller::*;
