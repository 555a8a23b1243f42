// Prediction domain models and the risk transform
use crate::domain::weather::{GeoPoint, WeatherRow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Uniform random values, injectable so tests can use a seeded generator.
pub trait RandomSource {
    /// A value in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// A value in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        self.uniform(0.0, 1.0)
    }
}

// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRow {
    pub date: NaiveDate,
    pub temperature: f64,
    pub precipitation: f64,
    pub humidity: f64,
    pub drought_risk: f64,
    pub fire_risk: f64,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionTable {
    pub origin: GeoPoint,
    pub rows: Vec<PredictionRow>,
}

/// Derive the two risk scores and jittered map coordinates for each row.
///
/// The formulas are a stand-in for a real predictive model:
/// `drought_risk = 1 - precipitation / max(precipitation)` and
/// `fire_risk = temperature / max(temperature) * (1 - humidity / 100)`.
/// A period whose maximum precipitation (or temperature) is not positive has
/// no meaningful normalization, so the corresponding risk is 0 for every row
/// instead of NaN.
pub fn derive_risks(
    rows: Vec<WeatherRow>,
    origin: GeoPoint,
    rng: &mut dyn RandomSource,
) -> PredictionTable {
    let max_precipitation = column_max(&rows, |r| r.precipitation);
    let max_temperature = column_max(&rows, |r| r.temperature);

    let rows = rows
        .into_iter()
        .map(|row| {
            let drought_risk = if max_precipitation > 0.0 {
                1.0 - row.precipitation / max_precipitation
            } else {
                0.0
            };
            let fire_risk = if max_temperature > 0.0 {
                (row.temperature / max_temperature) * (1.0 - row.humidity / 100.0)
            } else {
                0.0
            };
            PredictionRow {
                date: row.date,
                temperature: row.temperature,
                precipitation: row.precipitation,
                humidity: row.humidity,
                drought_risk,
                fire_risk,
                lat: origin.lat + rng.uniform(-1.0, 1.0),
                lon: origin.lon + rng.uniform(-1.0, 1.0),
            }
        })
        .collect();

    PredictionTable { origin, rows }
}

fn column_max(rows: &[WeatherRow], column: impl Fn(&WeatherRow) -> f64) -> f64 {
    rows.iter().map(column).fold(f64::NEG_INFINITY, f64::max)
}
