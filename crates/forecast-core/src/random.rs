//! Injectable sources of randomness.
//!
//! Forecast values and cache-expiration jitter are both drawn from a
//! [`RandomSource`] so that tests can replace the thread RNG with a seeded one.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shaku::{Component, Interface};

/// Source of uniformly distributed integers.
pub trait RandomSource: Interface + Send + Sync {
    /// Returns an integer drawn uniformly from `[low, high)`.
    ///
    /// Returns `low` when the range is empty.
    fn next_in_range(&self, low: i64, high: i64) -> i64;
}

/// Random source backed by the thread-local RNG.
#[derive(Component, Debug, Default)]
#[shaku(interface = RandomSource)]
pub struct ThreadRandomSource {}

impl ThreadRandomSource {
    /// Creates a new thread RNG source.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl RandomSource for ThreadRandomSource {
    fn next_in_range(&self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..high)
    }
}

/// Deterministic random source seeded with a fixed value.
///
/// Two sources built from the same seed yield the same sequence.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    /// Creates a source from a seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn next_in_range(&self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.rng.lock().gen_range(low..high)
    }
}
