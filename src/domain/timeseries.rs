// Sample time-series indicators for the dashboard chart
use crate::domain::prediction::RandomSource;
use chrono::NaiveDate;

pub const SAMPLE_LEN: usize = 30;

/// Simulated satellite indicators. Every value is independently uniform in
/// `[0, 1)` and regenerated on each render; the series carry no relation to
/// the fetched weather data.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesSample {
    pub dates: Vec<NaiveDate>,
    pub ndvi: Vec<f64>,
    pub soil_moisture: Vec<f64>,
    pub precipitation: Vec<f64>,
}

impl TimeSeriesSample {
    pub fn generate(start: NaiveDate, end: NaiveDate, rng: &mut dyn RandomSource) -> Self {
        Self {
            dates: evenly_spaced_dates(start, end, SAMPLE_LEN),
            ndvi: unit_series(rng, SAMPLE_LEN),
            soil_moisture: unit_series(rng, SAMPLE_LEN),
            precipitation: unit_series(rng, SAMPLE_LEN),
        }
    }
}

fn unit_series(rng: &mut dyn RandomSource, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.unit()).collect()
}

/// `n` dates spread evenly across `[start, end]`, endpoints included. The
/// span is clamped to zero for an inverted range.
fn evenly_spaced_dates(start: NaiveDate, end: NaiveDate, n: usize) -> Vec<NaiveDate> {
    let span_days = (end - start).num_days().max(0);
    (0..n)
        .map(|i| {
            let offset = if n > 1 {
                span_days * i as i64 / (n as i64 - 1)
            } else {
                0
            };
            start + chrono::Duration::days(offset)
        })
        .collect()
}
