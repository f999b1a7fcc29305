//! # Forecast REST
//!
//! REST API layer using Axum for the forecast service.
//! Provides the forecast endpoint, health checks and the OpenAPI document.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
