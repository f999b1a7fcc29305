//! # Forecast Config
//!
//! Configuration management for the forecast service.
//! Supports layered configuration from files and environment variables,
//! plus the duration syntax used for cache expiration settings.

mod app_config;
mod duration;
mod loader;

pub use app_config::*;
pub use duration::*;
pub use loader::*;
