//! Cache key generators for consistent key naming.

/// Generate the cache key for a city's forecast.
///
/// The city is used verbatim: no trimming and no case folding, so `Paris`
/// and `paris` are separate entries.
#[must_use]
pub fn forecast(instance_name: &str, city: &str) -> String {
    format!("{instance_name}{city}")
}
