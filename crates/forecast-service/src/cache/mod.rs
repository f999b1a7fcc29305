//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with a Redis implementation
//! and an in-process implementation for local development and tests.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::InMemoryCacheService;
pub use redis_cache::{create_pool, RedisCacheService, RedisCacheServiceParameters};
