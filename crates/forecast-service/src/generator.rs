//! Forecast generation and jittered expiration.

use chrono::{Days, NaiveDate};
use forecast_core::{
    RandomSource, WeatherForecast, FORECAST_DAYS, MAX_TEMPERATURE_C, MIN_TEMPERATURE_C, SUMMARIES,
};
use std::time::Duration;

/// Generates one forecast entry per day for the days after `today`.
///
/// Each entry draws its temperature and then its summary from `random`.
#[must_use]
pub fn generate_forecast(random: &dyn RandomSource, today: NaiveDate) -> Vec<WeatherForecast> {
    (1..=FORECAST_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(u64::from(offset))))
        .map(|date| {
            let temperature_c = random_temperature(random);
            let summary = random_summary(random);
            WeatherForecast::new(date, temperature_c, summary)
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn random_temperature(random: &dyn RandomSource) -> i32 {
    random.next_in_range(i64::from(MIN_TEMPERATURE_C), i64::from(MAX_TEMPERATURE_C)) as i32
}

fn random_summary(random: &dyn RandomSource) -> Option<String> {
    let index = random.next_in_range(0, SUMMARIES.len() as i64);
    usize::try_from(index)
        .ok()
        .and_then(|i| SUMMARIES.get(i))
        .map(|summary| (*summary).to_string())
}

/// Adds a random whole number of seconds in `[0, jitter)` to `base`.
///
/// Only whole seconds of `jitter` count, so a jitter under one second adds
/// nothing.
#[must_use]
pub fn jittered_ttl(base: Duration, jitter: Duration, random: &dyn RandomSource) -> Duration {
    let jitter_secs = i64::try_from(jitter.as_secs()).unwrap_or(i64::MAX);
    let extra = random.next_in_range(0, jitter_secs);
    base.saturating_add(Duration::from_secs(u64::try_from(extra).unwrap_or(0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::{SeededRandomSource, ThreadRandomSource};
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 29).unwrap()
    }

    #[test]
    fn test_generates_five_consecutive_days_from_tomorrow() {
        let forecast = generate_forecast(&ThreadRandomSource::new(), today());

        let dates: Vec<NaiveDate> = forecast.iter().map(|f| f.date).collect();
        let expected: Vec<NaiveDate> = (1..=5)
            .map(|d| today().checked_add_days(Days::new(d)).unwrap())
            .collect();
        assert_eq!(dates, expected);
        assert_eq!(dates[4], NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
    }

    #[test]
    fn test_values_stay_within_bounds() {
        let random = ThreadRandomSource::new();
        for _ in 0..200 {
            for entry in generate_forecast(&random, today()) {
                assert!((MIN_TEMPERATURE_C..MAX_TEMPERATURE_C).contains(&entry.temperature_c));
                let summary = entry.summary.expect("generated entries carry a summary");
                assert!(SUMMARIES.contains(&summary.as_str()));
            }
        }
    }

    #[test]
    fn test_same_seed_same_forecast() {
        let a = generate_forecast(&SeededRandomSource::from_seed(7), today());
        let b = generate_forecast(&SeededRandomSource::from_seed(7), today());
        assert_eq!(a, b);
    }

    #[test]
    fn test_jitter_stays_within_bounds() {
        let random = ThreadRandomSource::new();
        let base = Duration::from_secs(300);
        let jitter = Duration::from_secs(60);
        for _ in 0..1000 {
            let ttl = jittered_ttl(base, jitter, &random);
            assert!(ttl >= base);
            assert!(ttl < base + jitter);
        }
    }

    #[test]
    fn test_jitter_decorrelates_expirations() {
        let random = SeededRandomSource::from_seed(2024);
        let ttls: HashSet<Duration> = (0..50)
            .map(|_| jittered_ttl(Duration::from_secs(300), Duration::from_secs(60), &random))
            .collect();
        assert!(ttls.len() > 1);
    }

    #[test]
    fn test_sub_second_jitter_adds_nothing() {
        let random = ThreadRandomSource::new();
        let base = Duration::from_secs(30);
        assert_eq!(jittered_ttl(base, Duration::from_millis(999), &random), base);
        assert_eq!(jittered_ttl(base, Duration::ZERO, &random), base);
    }

    #[test]
    fn test_whole_seconds_only() {
        let random = ThreadRandomSource::new();
        for _ in 0..100 {
            let ttl = jittered_ttl(Duration::from_millis(1500), Duration::from_secs(3), &random);
            assert_eq!(ttl.subsec_millis(), 500);
        }
    }
}
