// Prediction service - fetch, align and transform daily weather data
use crate::application::weather_repository::WeatherRepository;
use crate::domain::prediction::{derive_risks, PredictionTable};
use crate::domain::session::SessionParams;
use crate::domain::weather::{daily_date_sequence, WeatherRow};
use crate::error::AppError;
use crate::infrastructure::config::RegionsConfig;
use crate::infrastructure::random::ThreadRandom;

#[derive(Clone)]
pub struct PredictionService {
    repository: std::sync::Arc<dyn WeatherRepository>,
    regions: RegionsConfig,
}

impl PredictionService {
    pub fn new(repository: std::sync::Arc<dyn WeatherRepository>, regions: RegionsConfig) -> Self {
        Self { repository, regions }
    }

    /// One full fetch pass: resolve coordinates, pull the raw daily series,
    /// align them against the requested date range and derive the risk
    /// columns. Any failure leaves the caller's previous table untouched.
    pub async fn refresh(&self, params: &SessionParams) -> Result<PredictionTable, AppError> {
        let origin = self.regions.coordinates_for(params.region);

        tracing::info!(
            "Fetching predictions for {} using {} model",
            params.region.label(),
            params.model_choice.label()
        );

        let dates =
            daily_date_sequence(params.start_date, params.end_date).ok_or(AppError::EmptyRange {
                start: params.start_date,
                end: params.end_date,
            })?;

        let raw = self
            .repository
            .fetch_daily(origin, params.start_date, params.end_date)
            .await
            .map_err(|e| AppError::WeatherApi(e.to_string()))?;

        check_aligned("temperature", dates.len(), raw.temperature.len())?;
        check_aligned("precipitation", dates.len(), raw.precipitation.len())?;
        check_aligned("humidity", dates.len(), raw.humidity.len())?;

        let rows: Vec<WeatherRow> = dates
            .into_iter()
            .zip(raw.temperature)
            .zip(raw.precipitation)
            .zip(raw.humidity)
            .map(|(((date, temperature), precipitation), humidity)| WeatherRow {
                date,
                temperature,
                precipitation,
                humidity,
            })
            .collect();

        let mut rng = ThreadRandom::default();
        Ok(derive_risks(rows, origin, &mut rng))
    }
}

/// The API must return exactly one value per requested day; anything else is
/// surfaced instead of silently truncating or padding.
fn check_aligned(variable: &'static str, expected: usize, actual: usize) -> Result<(), AppError> {
    if expected != actual {
        return Err(AppError::DataMismatch {
            variable,
            expected,
            actual,
        });
    }
    Ok(())
}
