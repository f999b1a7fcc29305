//! # Forecast Core
//!
//! Core types, traits, and error definitions for the forecast service.
//! Every other crate in the workspace builds on the error type, the
//! forecast entity and the injectable clock and randomness seams defined here.

pub mod clock;
pub mod domain;
pub mod error;
pub mod random;
pub mod result;

pub use clock::*;
pub use domain::*;
pub use error::*;
pub use random::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
