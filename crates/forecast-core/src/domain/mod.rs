//! Domain entities.

pub mod forecast;

pub use forecast::*;
