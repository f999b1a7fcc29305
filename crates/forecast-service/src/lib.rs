//! # Forecast Service
//!
//! Business logic for the forecast service: a cache-aside lookup that
//! generates a forecast on a miss and stores it with a jittered expiration.

pub mod cache;
pub mod dto;
pub mod forecast_service;
pub mod generator;
pub mod r#impl;

pub use cache::*;
pub use dto::*;
pub use forecast_service::*;
pub use generator::*;
pub use r#impl::*;
